//! Chained variable descriptor.
//!
//! # Zero-Erasure Design
//!
//! The descriptor stores typed function pointers that operate directly on
//! the solution. No `Arc<dyn>`, no `Box<dyn Any>`, no `downcast_ref`.

use std::fmt;

use super::value::ChainedValue;

/// Describes a chained planning variable at runtime.
///
/// For an entity at `entity_index`, the variable holds its immediate
/// predecessor: an anchor, another entity, or nothing when unassigned.
///
/// # Example
///
/// ```
/// use chainforge_core::{ChainedValue, ChainedVariableDescriptor};
///
/// #[derive(Clone)]
/// struct Routes {
///     vehicles: usize,
///     previous: Vec<Option<ChainedValue>>,
/// }
///
/// fn get_previous(s: &Routes, i: usize) -> Option<ChainedValue> {
///     s.previous.get(i).copied().flatten()
/// }
///
/// fn set_previous(s: &mut Routes, i: usize, v: Option<ChainedValue>) {
///     if let Some(slot) = s.previous.get_mut(i) {
///         *slot = v;
///     }
/// }
///
/// let variable = ChainedVariableDescriptor::new(
///     "previous",
///     0,
///     get_previous,
///     set_previous,
///     |s: &Routes| s.previous.len(),
///     |s: &Routes| s.vehicles,
/// );
///
/// let routes = Routes { vehicles: 1, previous: vec![Some(ChainedValue::Anchor(0)), None] };
/// assert!(variable.is_admissible(&routes, 1, Some(ChainedValue::Entity(0))));
/// assert!(!variable.is_admissible(&routes, 1, Some(ChainedValue::Anchor(3))));
/// ```
pub struct ChainedVariableDescriptor<S> {
    variable_name: &'static str,
    descriptor_index: usize,
    getter: fn(&S, usize) -> Option<ChainedValue>,
    setter: fn(&mut S, usize, Option<ChainedValue>),
    entity_count: fn(&S) -> usize,
    anchor_count: fn(&S) -> usize,
    value_filter: Option<fn(&S, usize, ChainedValue) -> bool>,
    allows_unassigned: bool,
}

impl<S> Clone for ChainedVariableDescriptor<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ChainedVariableDescriptor<S> {}

impl<S> fmt::Debug for ChainedVariableDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedVariableDescriptor")
            .field("variable_name", &self.variable_name)
            .field("descriptor_index", &self.descriptor_index)
            .field("allows_unassigned", &self.allows_unassigned)
            .field("filtered", &self.value_filter.is_some())
            .finish()
    }
}

impl<S> ChainedVariableDescriptor<S> {
    /// Creates a new chained variable descriptor.
    ///
    /// # Arguments
    /// * `variable_name` - Name of the variable (for debugging and notifications)
    /// * `descriptor_index` - Index of the entity descriptor owning the variable
    /// * `getter` - Reads the predecessor of the entity at an index
    /// * `setter` - Writes the predecessor of the entity at an index
    /// * `entity_count` - Number of planning entities in the solution
    /// * `anchor_count` - Number of anchors in the solution
    pub fn new(
        variable_name: &'static str,
        descriptor_index: usize,
        getter: fn(&S, usize) -> Option<ChainedValue>,
        setter: fn(&mut S, usize, Option<ChainedValue>),
        entity_count: fn(&S) -> usize,
        anchor_count: fn(&S) -> usize,
    ) -> Self {
        Self {
            variable_name,
            descriptor_index,
            getter,
            setter,
            entity_count,
            anchor_count,
            value_filter: None,
            allows_unassigned: false,
        }
    }

    /// Restricts the value range with an entity-dependent filter.
    ///
    /// The filter is consulted after the index range checks.
    pub fn with_value_filter(mut self, filter: fn(&S, usize, ChainedValue) -> bool) -> Self {
        self.value_filter = Some(filter);
        self
    }

    /// Sets whether the variable may be left unassigned.
    pub fn with_allows_unassigned(mut self, allows: bool) -> Self {
        self.allows_unassigned = allows;
        self
    }

    /// Returns the variable name.
    pub fn variable_name(&self) -> &'static str {
        self.variable_name
    }

    /// Returns the entity descriptor index.
    pub fn descriptor_index(&self) -> usize {
        self.descriptor_index
    }

    /// Returns true if the variable may be unassigned.
    pub fn allows_unassigned(&self) -> bool {
        self.allows_unassigned
    }

    /// Returns the current predecessor of the entity.
    #[inline]
    pub fn get_value(&self, solution: &S, entity_index: usize) -> Option<ChainedValue> {
        (self.getter)(solution, entity_index)
    }

    /// Writes the predecessor of the entity.
    ///
    /// Bypasses scoring and undo bookkeeping; moves go through the score
    /// director's `change_variable` instead.
    #[inline]
    pub fn set_value(&self, solution: &mut S, entity_index: usize, value: Option<ChainedValue>) {
        (self.setter)(solution, entity_index, value)
    }

    /// Returns the setter function pointer.
    pub fn setter(&self) -> fn(&mut S, usize, Option<ChainedValue>) {
        self.setter
    }

    /// Returns the number of planning entities.
    #[inline]
    pub fn entity_count(&self, solution: &S) -> usize {
        (self.entity_count)(solution)
    }

    /// Returns the number of anchors.
    #[inline]
    pub fn anchor_count(&self, solution: &S) -> usize {
        (self.anchor_count)(solution)
    }

    /// Returns true if `value` lies in the value range of the entity.
    ///
    /// Self-reference is not rejected here: `Entity(i)` is a member of the
    /// value range of entity `i`. Chain-aware moves exclude it themselves.
    pub fn is_admissible(
        &self,
        solution: &S,
        entity_index: usize,
        value: Option<ChainedValue>,
    ) -> bool {
        if entity_index >= self.entity_count(solution) {
            return false;
        }
        let value = match value {
            None => return self.allows_unassigned,
            Some(v) => v,
        };
        let in_range = match value {
            ChainedValue::Anchor(idx) => idx < self.anchor_count(solution),
            ChainedValue::Entity(idx) => idx < self.entity_count(solution),
        };
        in_range
            && self
                .value_filter
                .map_or(true, |filter| filter(solution, entity_index, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Line {
        anchors: usize,
        previous: Vec<Option<ChainedValue>>,
    }

    fn get_previous(s: &Line, i: usize) -> Option<ChainedValue> {
        s.previous.get(i).copied().flatten()
    }

    fn set_previous(s: &mut Line, i: usize, v: Option<ChainedValue>) {
        if let Some(slot) = s.previous.get_mut(i) {
            *slot = v;
        }
    }

    fn entity_count(s: &Line) -> usize {
        s.previous.len()
    }

    fn anchor_count(s: &Line) -> usize {
        s.anchors
    }

    fn variable() -> ChainedVariableDescriptor<Line> {
        ChainedVariableDescriptor::new(
            "previous",
            0,
            get_previous,
            set_previous,
            entity_count,
            anchor_count,
        )
    }

    fn line() -> Line {
        Line {
            anchors: 2,
            previous: vec![Some(ChainedValue::Anchor(0)), Some(ChainedValue::Entity(0)), None],
        }
    }

    #[test]
    fn test_get_and_set() {
        let var = variable();
        let mut s = line();

        assert_eq!(var.get_value(&s, 1), Some(ChainedValue::Entity(0)));
        var.set_value(&mut s, 2, Some(ChainedValue::Anchor(1)));
        assert_eq!(var.get_value(&s, 2), Some(ChainedValue::Anchor(1)));
    }

    #[test]
    fn test_admissible_ranges() {
        let var = variable();
        let s = line();

        assert!(var.is_admissible(&s, 2, Some(ChainedValue::Anchor(1))));
        assert!(var.is_admissible(&s, 2, Some(ChainedValue::Entity(1))));
        assert!(!var.is_admissible(&s, 2, Some(ChainedValue::Anchor(2))));
        assert!(!var.is_admissible(&s, 2, Some(ChainedValue::Entity(3))));
        // Entity out of range.
        assert!(!var.is_admissible(&s, 7, Some(ChainedValue::Anchor(0))));
    }

    #[test]
    fn test_unassigned_requires_opt_in() {
        let s = line();
        assert!(!variable().is_admissible(&s, 0, None));
        assert!(variable()
            .with_allows_unassigned(true)
            .is_admissible(&s, 0, None));
    }

    #[test]
    fn test_value_filter() {
        fn only_anchor_zero(_: &Line, _: usize, v: ChainedValue) -> bool {
            v != ChainedValue::Anchor(1)
        }
        let var = variable().with_value_filter(only_anchor_zero);
        let s = line();

        assert!(var.is_admissible(&s, 2, Some(ChainedValue::Anchor(0))));
        assert!(!var.is_admissible(&s, 2, Some(ChainedValue::Anchor(1))));
    }

    #[test]
    fn test_copy() {
        let a = variable();
        let b = a;
        assert_eq!(a.variable_name(), b.variable_name());
        assert_eq!(a.descriptor_index(), b.descriptor_index());
    }
}
