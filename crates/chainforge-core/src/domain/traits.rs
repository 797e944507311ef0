//! Core domain traits

use crate::score::Score;

/// Marker trait for planning solutions.
///
/// A planning solution holds the problem facts (anchors), the planning
/// entities and the score of the current assignment.
///
/// # Example
///
/// ```
/// use chainforge_core::{PlanningSolution, SimpleScore};
///
/// #[derive(Clone)]
/// struct Routes {
///     previous: Vec<Option<usize>>,
///     score: Option<SimpleScore>,
/// }
///
/// impl PlanningSolution for Routes {
///     type Score = SimpleScore;
///
///     fn score(&self) -> Option<Self::Score> {
///         self.score
///     }
///
///     fn set_score(&mut self, score: Option<Self::Score>) {
///         self.score = score;
///     }
/// }
/// ```
pub trait PlanningSolution: Clone + Send + Sync + 'static {
    /// The score type used to evaluate this solution.
    type Score: Score;

    /// Returns the current score of this solution, if calculated.
    fn score(&self) -> Option<Self::Score>;

    /// Sets the score of this solution.
    fn set_score(&mut self, score: Option<Self::Score>);
}
