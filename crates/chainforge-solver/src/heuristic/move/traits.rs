//! Move trait definition.

use std::fmt::Debug;

use chainforge_core::domain::PlanningSolution;
use chainforge_core::error::Result;
use chainforge_scoring::ScoreDirector;

/// A move that modifies one or more planning variables.
///
/// Moves are fully typed - no boxing, no virtual dispatch.
///
/// # Type Parameters
/// * `S` - The planning solution type
///
/// # Implementation Notes
/// - Moves should be lightweight
/// - Use `RecordingScoreDirector` to wrap the score director for automatic undo
/// - Methods are generic over D to allow use with both concrete directors and RecordingScoreDirector
pub trait Move<S: PlanningSolution>: Send + Sync + Debug {
    /// Returns true if this move can be executed in the current state.
    ///
    /// A move is not doable if:
    /// - The target value is outside the variable's value range
    /// - The source value equals the destination value (unless no-op moves are allowed)
    /// - The move would make an entity trail itself
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool;

    /// Executes this move, modifying the working solution.
    ///
    /// All writes go through the score director. The first rejected write
    /// stops the move and its error is returned; writes already made stay
    /// registered for undo.
    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Result<()>;

    /// Returns the descriptor index of the entity type this move affects.
    fn descriptor_index(&self) -> usize;

    /// Returns the entity indices involved in this move.
    fn entity_indices(&self) -> &[usize];

    /// Returns the variable name this move affects.
    fn variable_name(&self) -> &str;
}
