//! ChangeMove - points one entity's chained variable at a new value.
//!
//! This is the base primitive of the chained moves: one doability check and
//! one write through the score director. It does not repair chains; see
//! [`ChainedChangeMove`](super::ChainedChangeMove) for that.
//!
//! # Zero-Erasure Design
//!
//! The move stores the variable descriptor, a `Copy` bundle of typed
//! function pointers. No `Arc<dyn>`, no `Box<dyn Any>`, no `downcast_ref`.

use std::fmt::Debug;

use chainforge_core::domain::{ChainedValue, ChainedVariableDescriptor, PlanningSolution};
use chainforge_core::error::Result;
use chainforge_scoring::ScoreDirector;

use super::Move;

/// A move that assigns a value to an entity's chained variable.
///
/// # Type Parameters
/// * `S` - The planning solution type
pub struct ChangeMove<S> {
    entity_index: usize,
    to_value: Option<ChainedValue>,
    variable: ChainedVariableDescriptor<S>,
    allow_no_op: bool,
}

impl<S> Clone for ChangeMove<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ChangeMove<S> {}

impl<S> Debug for ChangeMove<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeMove")
            .field("entity_index", &self.entity_index)
            .field("descriptor_index", &self.variable.descriptor_index())
            .field("variable_name", &self.variable.variable_name())
            .field("to_value", &self.to_value)
            .finish()
    }
}

impl<S> ChangeMove<S> {
    /// Creates a new change move.
    ///
    /// # Arguments
    /// * `entity_index` - Index of the entity in its collection
    /// * `to_value` - The value to point at (None to unassign)
    /// * `variable` - Descriptor of the chained variable
    pub fn new(
        entity_index: usize,
        to_value: Option<ChainedValue>,
        variable: ChainedVariableDescriptor<S>,
    ) -> Self {
        Self {
            entity_index,
            to_value,
            variable,
            allow_no_op: false,
        }
    }

    /// Allows the move when the entity already points at `to_value`.
    pub fn with_allow_no_op(mut self, allow: bool) -> Self {
        self.allow_no_op = allow;
        self
    }

    /// Returns the entity index.
    pub fn entity_index(&self) -> usize {
        self.entity_index
    }

    /// Returns the target value.
    pub fn to_value(&self) -> Option<ChainedValue> {
        self.to_value
    }

    /// Returns the variable descriptor.
    pub fn variable(&self) -> &ChainedVariableDescriptor<S> {
        &self.variable
    }

    /// Returns true if moves to the current value are doable.
    pub fn allows_no_op(&self) -> bool {
        self.allow_no_op
    }

    /// Creates the move that restores the entity's current value.
    ///
    /// Must be called before `do_move`.
    pub fn undo_move<D>(&self, score_director: &D) -> Self
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
    {
        let current = self
            .variable
            .get_value(score_director.working_solution(), self.entity_index);
        Self {
            to_value: current,
            ..*self
        }
    }
}

impl<S: PlanningSolution> Move<S> for ChangeMove<S> {
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        let solution = score_director.working_solution();
        if !self
            .variable
            .is_admissible(solution, self.entity_index, self.to_value)
        {
            return false;
        }
        self.allow_no_op || self.variable.get_value(solution, self.entity_index) != self.to_value
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Result<()> {
        score_director.change_variable(&self.variable, self.entity_index, self.to_value)
    }

    fn descriptor_index(&self) -> usize {
        self.variable.descriptor_index()
    }

    fn entity_indices(&self) -> &[usize] {
        std::slice::from_ref(&self.entity_index)
    }

    fn variable_name(&self) -> &str {
        self.variable.variable_name()
    }
}
