//! ChainedChangeMove - relocates one entity of a chained variable.
//!
//! Moving entity `E` behind value `V` touches up to three entities:
//!
//! ```text
//! before:  ... -> P -> E -> T1 -> ...        ... -> V -> T2 -> ...
//! after:   ... -> P -> T1 -> ...             ... -> V -> E -> T2 -> ...
//! ```
//!
//! 1. `T1` (old trailing entity) closes the gap: `T1.var := P`
//! 2. `E.var := V`
//! 3. `T2` (new trailing entity) is rerouted: `T2.var := E`
//!
//! Both trailing entities are looked up through the inverse supply before
//! any write, so the supply never has to be consistent mid-move.

use std::fmt::Debug;

use chainforge_core::domain::{
    ChainedValue, ChainedVariableDescriptor, PlanningSolution, SingletonInverseVariableSupply,
};
use chainforge_core::error::Result;
use chainforge_scoring::ScoreDirector;
use tracing::trace;

use super::{ChangeMove, Move};

/// A change move on a chained variable that keeps both chains intact.
///
/// Wraps a [`ChangeMove`] and adds the two repair writes around it.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `I` - The inverse supply used to find trailing entities
///
/// # Example
///
/// ```
/// use chainforge_core::ChainedValue;
/// use chainforge_core::domain::ScanningInverseSupply;
/// use chainforge_scoring::SimpleScoreDirector;
/// use chainforge_solver::{ChainedChangeMove, Move};
/// use chainforge_test::route::{self, RouteSolution};
///
/// // Vehicle 0: 0 -> 1 -> 2 ; vehicle 1: 3
/// let solution = RouteSolution::from_chains(2, 4, &[&[0, 1, 2], &[3]]);
/// let mut director = SimpleScoreDirector::new(solution, route::calculate_distance);
///
/// let variable = route::previous_variable();
/// let m = ChainedChangeMove::new(
///     1,
///     variable,
///     ScanningInverseSupply::new(variable),
///     Some(ChainedValue::Entity(3)),
/// );
/// assert!(m.is_doable(&director));
/// m.do_move(&mut director).unwrap();
///
/// let solution = director.into_working_solution();
/// assert_eq!(solution.chains(), vec![vec![0, 2], vec![3, 1]]);
/// ```
pub struct ChainedChangeMove<S, I> {
    change: ChangeMove<S>,
    inverse: I,
}

impl<S, I: Clone> Clone for ChainedChangeMove<S, I> {
    fn clone(&self) -> Self {
        Self {
            change: self.change,
            inverse: self.inverse.clone(),
        }
    }
}

impl<S, I: Copy> Copy for ChainedChangeMove<S, I> {}

impl<S, I: Debug> Debug for ChainedChangeMove<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedChangeMove")
            .field("entity_index", &self.change.entity_index())
            .field("descriptor_index", &self.change.variable().descriptor_index())
            .field("variable_name", &self.change.variable().variable_name())
            .field("to_value", &self.change.to_value())
            .field("inverse", &self.inverse)
            .finish()
    }
}

impl<S, I> ChainedChangeMove<S, I> {
    /// Creates a new chained change move.
    ///
    /// # Arguments
    /// * `entity_index` - Index of the entity to relocate
    /// * `variable` - Descriptor of the chained variable
    /// * `inverse` - Inverse supply of the same variable
    /// * `to_value` - The value the entity will trail (None to unassign)
    pub fn new(
        entity_index: usize,
        variable: ChainedVariableDescriptor<S>,
        inverse: I,
        to_value: Option<ChainedValue>,
    ) -> Self {
        Self {
            change: ChangeMove::new(entity_index, to_value, variable),
            inverse,
        }
    }

    /// Allows the move when the entity already trails `to_value`.
    pub fn with_allow_no_op(mut self, allow: bool) -> Self {
        self.change = self.change.with_allow_no_op(allow);
        self
    }

    /// Returns the entity index.
    pub fn entity_index(&self) -> usize {
        self.change.entity_index()
    }

    /// Returns the target value.
    pub fn to_value(&self) -> Option<ChainedValue> {
        self.change.to_value()
    }

    /// Returns the variable descriptor.
    pub fn variable(&self) -> &ChainedVariableDescriptor<S> {
        self.change.variable()
    }

    /// Returns the inverse supply.
    pub fn inverse(&self) -> &I {
        &self.inverse
    }

    /// Creates the move that puts the entity back behind its current value.
    ///
    /// Must be called before `do_move`. Applying the undo move after this
    /// move restores both chains.
    pub fn undo_move<D>(&self, score_director: &D) -> Self
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
        I: Clone,
    {
        Self {
            change: self.change.undo_move(score_director),
            inverse: self.inverse.clone(),
        }
    }
}

impl<S, I> Move<S> for ChainedChangeMove<S, I>
where
    S: PlanningSolution,
    I: SingletonInverseVariableSupply<S>,
{
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        let entity = ChainedValue::Entity(self.change.entity_index());
        self.change.to_value() != Some(entity) && self.change.is_doable(score_director)
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Result<()> {
        let entity_index = self.change.entity_index();
        let to_value = self.change.to_value();
        let variable = self.change.variable();

        let solution = score_director.working_solution();
        let old_value = variable.get_value(solution, entity_index);
        let old_trailing = self
            .inverse
            .inverse_singleton(solution, ChainedValue::Entity(entity_index));
        let new_trailing = match to_value {
            Some(value) => self.inverse.inverse_singleton(solution, value),
            None => None,
        };
        // E already trails V, so the lookup returned E itself. Once the old
        // chain is closed V is trailed by T1; rerouting E's own slot instead
        // would write the self-loop `E.var := E`.
        let new_trailing = match new_trailing {
            Some(trailing) if trailing == entity_index => old_trailing,
            other => other,
        };

        trace!(
            variable = variable.variable_name(),
            entity_index,
            ?old_value,
            ?to_value,
            ?old_trailing,
            ?new_trailing,
            "Chained change"
        );

        if let Some(trailing) = old_trailing {
            score_director.change_variable(variable, trailing, old_value)?;
        }
        self.change.do_move(score_director)?;
        if let Some(trailing) = new_trailing {
            score_director.change_variable(
                variable,
                trailing,
                Some(ChainedValue::Entity(entity_index)),
            )?;
        }
        Ok(())
    }

    fn descriptor_index(&self) -> usize {
        self.change.descriptor_index()
    }

    fn entity_indices(&self) -> &[usize] {
        self.change.entity_indices()
    }

    fn variable_name(&self) -> &str {
        self.change.variable_name()
    }
}
