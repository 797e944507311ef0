//! Typed move selector trait.

use std::fmt::Debug;

use chainforge_core::domain::PlanningSolution;
use chainforge_scoring::ScoreDirector;

use crate::heuristic::r#move::Move;

/// A typed move selector that yields moves of type `M` directly.
///
/// Returns concrete moves inline, with no heap allocation per move.
///
/// # Type Parameters
/// * `S` - The planning solution type
/// * `M` - The move type
pub trait MoveSelector<S: PlanningSolution, M: Move<S>>: Send + Debug {
    /// Returns an iterator over typed moves.
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> impl Iterator<Item = M> + 'a;

    /// Returns the approximate number of moves.
    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize;

    /// Returns true if this selector may return the same move multiple times.
    fn is_never_ending(&self) -> bool {
        false
    }
}
