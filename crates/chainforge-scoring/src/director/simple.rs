//! Simple score director with full recalculation.

use chainforge_core::domain::PlanningSolution;

use super::traits::ScoreDirector;

/// A simple score director that recalculates the full score each time (zero-erasure).
///
/// The calculator is stored as a concrete generic type parameter, not as `Arc<dyn Fn>`.
/// Inefficient but correct - used for testing and small problems.
pub struct SimpleScoreDirector<S: PlanningSolution, C> {
    working_solution: S,
    score_calculator: C,
    score_dirty: bool,
    cached_score: Option<S::Score>,
    variable_change_count: u64,
}

impl<S, C> SimpleScoreDirector<S, C>
where
    S: PlanningSolution,
    C: Fn(&S) -> S::Score + Send + Sync,
{
    /// Creates a new SimpleScoreDirector.
    pub fn new(solution: S, score_calculator: C) -> Self {
        SimpleScoreDirector {
            working_solution: solution,
            score_calculator,
            score_dirty: true,
            cached_score: None,
            variable_change_count: 0,
        }
    }

    /// Returns the number of variable change notifications received.
    ///
    /// Every primitive `change_variable` produces exactly one.
    pub fn variable_change_count(&self) -> u64 {
        self.variable_change_count
    }

    /// Consumes the director and returns the working solution.
    pub fn into_working_solution(self) -> S {
        self.working_solution
    }

    fn mark_dirty(&mut self) {
        self.score_dirty = true;
    }
}

impl<S, C> ScoreDirector<S> for SimpleScoreDirector<S, C>
where
    S: PlanningSolution,
    C: Fn(&S) -> S::Score + Send + Sync,
{
    fn working_solution(&self) -> &S {
        &self.working_solution
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.mark_dirty();
        &mut self.working_solution
    }

    fn calculate_score(&mut self) -> S::Score {
        if !self.score_dirty {
            if let Some(score) = self.cached_score {
                return score;
            }
        }

        let score = (self.score_calculator)(&self.working_solution);
        self.working_solution.set_score(Some(score));
        self.cached_score = Some(score);
        self.score_dirty = false;
        score
    }

    fn clone_working_solution(&self) -> S {
        self.working_solution.clone()
    }

    fn before_variable_changed(
        &mut self,
        _descriptor_index: usize,
        _entity_index: usize,
        _variable_name: &str,
    ) {
        self.mark_dirty();
    }

    fn after_variable_changed(
        &mut self,
        _descriptor_index: usize,
        _entity_index: usize,
        _variable_name: &str,
    ) {
        self.variable_change_count += 1;
    }

    fn reset(&mut self) {
        self.mark_dirty();
        self.cached_score = None;
        self.variable_change_count = 0;
    }
}
