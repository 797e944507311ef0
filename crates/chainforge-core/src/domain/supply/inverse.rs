//! Externalized inverse supply for O(1) "who trails this value?" lookups.
//!
//! # Zero-Erasure Design
//!
//! - **Index-based**: Stores `value -> entity_index` mappings, not cloned entities
//! - **Owned**: No `Arc`, `RwLock`, or interior mutability - uses `&mut self`

use std::collections::HashMap;

use tracing::trace;

use super::SingletonInverseVariableSupply;
use crate::domain::value::ChainedValue;
use crate::domain::variable::ChainedVariableDescriptor;

/// Index-based inverse supply for a chained variable.
///
/// For a chained variable where `entity.previous = value`, answers:
/// "Given `value`, which entity index has `entities[idx].previous == value`?"
///
/// During a chain repair two entities briefly point at the same value.
/// [`retract`](Self::retract) only removes a mapping owned by the retracting
/// entity and [`insert`](Self::insert) overwrites, so replaying the writes in
/// order (or their undo in reverse order) leaves the map consistent again.
///
/// # Example
///
/// ```
/// use chainforge_core::domain::{ChainedValue, InverseSupply};
///
/// let mut supply = InverseSupply::new();
///
/// // Entity 0 sits behind anchor 0, entity 1 behind entity 0.
/// supply.insert(ChainedValue::Anchor(0), 0);
/// supply.insert(ChainedValue::Entity(0), 1);
///
/// assert_eq!(supply.get(&ChainedValue::Entity(0)), Some(1));
/// assert_eq!(supply.get(&ChainedValue::Entity(1)), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InverseSupply {
    inverse_map: HashMap<ChainedValue, usize>,
}

impl InverseSupply {
    /// Creates a new empty inverse supply.
    pub fn new() -> Self {
        Self {
            inverse_map: HashMap::new(),
        }
    }

    /// Creates a new inverse supply with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inverse_map: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a supply from the current state of a solution.
    pub fn from_solution<S>(solution: &S, variable: &ChainedVariableDescriptor<S>) -> Self {
        let mut supply = Self::with_capacity(variable.entity_count(solution));
        supply.rebuild(solution, variable);
        supply
    }

    /// Gets the entity index that points to the given value.
    #[inline]
    pub fn get(&self, value: &ChainedValue) -> Option<usize> {
        self.inverse_map.get(value).copied()
    }

    /// Registers that an entity now points to a value.
    ///
    /// Returns the entity previously mapped to this value, if any.
    #[inline]
    pub fn insert(&mut self, value: ChainedValue, entity_idx: usize) -> Option<usize> {
        self.inverse_map.insert(value, entity_idx)
    }

    /// Removes the mapping for `value` if it belongs to `entity_idx`.
    ///
    /// Returns true if a mapping was removed.
    #[inline]
    pub fn retract(&mut self, value: &ChainedValue, entity_idx: usize) -> bool {
        if self.inverse_map.get(value) == Some(&entity_idx) {
            self.inverse_map.remove(value);
            true
        } else {
            false
        }
    }

    /// Records that an entity changed which value it points to.
    #[inline]
    pub fn update(
        &mut self,
        old_value: Option<ChainedValue>,
        new_value: Option<ChainedValue>,
        entity_idx: usize,
    ) {
        if let Some(old) = old_value {
            self.retract(&old, entity_idx);
        }
        if let Some(new) = new_value {
            self.insert(new, entity_idx);
        }
    }

    /// Discards all mappings and re-reads them from the solution.
    pub fn rebuild<S>(&mut self, solution: &S, variable: &ChainedVariableDescriptor<S>) {
        self.inverse_map.clear();
        let entity_count = variable.entity_count(solution);
        for entity_idx in 0..entity_count {
            if let Some(value) = variable.get_value(solution, entity_idx) {
                self.inverse_map.insert(value, entity_idx);
            }
        }
        trace!(
            variable = variable.variable_name(),
            entity_count,
            mappings = self.inverse_map.len(),
            "Rebuilt inverse supply"
        );
    }

    /// Clears all mappings.
    #[inline]
    pub fn clear(&mut self) {
        self.inverse_map.clear();
    }

    /// Returns the number of tracked mappings.
    #[inline]
    pub fn len(&self) -> usize {
        self.inverse_map.len()
    }

    /// Returns true if no mappings exist.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inverse_map.is_empty()
    }

    /// Returns an iterator over all (value, entity_index) pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ChainedValue, &usize)> {
        self.inverse_map.iter()
    }
}

impl<S> SingletonInverseVariableSupply<S> for InverseSupply {
    #[inline]
    fn inverse_singleton(&self, _solution: &S, value: ChainedValue) -> Option<usize> {
        self.get(&value)
    }
}
