// Recording score director for automatic undo tracking.
//
// The `RecordingScoreDirector` wraps an existing score director and stores
// the typed undo closures registered by every primitive `change_variable`:
//
// ```text
// let mut recording = RecordingScoreDirector::new(&mut inner_sd);
// move.do_move(&mut recording)?;   // each primitive change registers its undo
// let score = recording.calculate_score();
// recording.undo_changes();        // replays undo closures in reverse order
// ```
//
// A move that fails halfway leaves its completed writes on the undo stack,
// so `undo_changes()` also reverts partially applied moves.

use chainforge_core::domain::PlanningSolution;

use super::ScoreDirector;

// A score director wrapper that stores typed undo closures.
//
// # Example
//
// ```
// use chainforge_scoring::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
// use chainforge_core::{PlanningSolution, SimpleScore};
//
// #[derive(Clone)]
// struct Solution { value: i32, score: Option<SimpleScore> }
//
// impl PlanningSolution for Solution {
//     type Score = SimpleScore;
//     fn score(&self) -> Option<Self::Score> { self.score }
//     fn set_score(&mut self, score: Option<Self::Score>) { self.score = score; }
// }
//
// let mut sd = SimpleScoreDirector::new(
//     Solution { value: 10, score: None },
//     |s: &Solution| SimpleScore::of(s.value as i64),
// );
//
// let mut recording = RecordingScoreDirector::new(&mut sd);
//
// let old_value = recording.working_solution().value;
// recording.working_solution_mut().value = 20;
// recording.register_undo(Box::new(move |s| s.value = old_value));
//
// recording.undo_changes();
// assert_eq!(recording.working_solution().value, 10);
// ```
pub struct RecordingScoreDirector<'a, S: PlanningSolution> {
    inner: &'a mut dyn ScoreDirector<S>,
    // Typed undo closures registered by primitive changes.
    undo_stack: Vec<Box<dyn FnOnce(&mut S) + Send>>,
    // Entities modified during this step, as (descriptor_index, entity_index).
    modified_entities: Vec<(usize, usize)>,
}

impl<'a, S: PlanningSolution> RecordingScoreDirector<'a, S> {
    // Creates a new recording score director wrapping the inner director.
    pub fn new(inner: &'a mut dyn ScoreDirector<S>) -> Self {
        Self {
            inner,
            undo_stack: Vec::with_capacity(16),
            modified_entities: Vec::with_capacity(8),
        }
    }

    // Undoes all recorded changes in reverse order.
    //
    // 1. Notify the inner director that each modified entity is about to change
    // 2. Run undo closures to restore planning variable values
    // 3. Notify that the modified entities changed
    pub fn undo_changes(&mut self) {
        for &(descriptor_idx, entity_idx) in &self.modified_entities {
            self.inner
                .before_variable_changed(descriptor_idx, entity_idx, "");
        }

        while let Some(undo) = self.undo_stack.pop() {
            undo(self.inner.working_solution_mut());
        }

        for (descriptor_idx, entity_idx) in self.modified_entities.drain(..) {
            self.inner
                .after_variable_changed(descriptor_idx, entity_idx, "");
        }
    }

    // Resets the recording state for reuse.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.modified_entities.clear();
    }

    // Returns the number of recorded undo closures.
    pub fn change_count(&self) -> usize {
        self.undo_stack.len()
    }

    // Returns true if there are no recorded changes.
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}

impl<S: PlanningSolution> ScoreDirector<S> for RecordingScoreDirector<'_, S> {
    fn working_solution(&self) -> &S {
        self.inner.working_solution()
    }

    fn working_solution_mut(&mut self) -> &mut S {
        self.inner.working_solution_mut()
    }

    fn calculate_score(&mut self) -> S::Score {
        self.inner.calculate_score()
    }

    fn clone_working_solution(&self) -> S {
        self.inner.clone_working_solution()
    }

    fn before_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        variable_name: &str,
    ) {
        self.inner
            .before_variable_changed(descriptor_index, entity_index, variable_name);
    }

    fn after_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        variable_name: &str,
    ) {
        self.inner
            .after_variable_changed(descriptor_index, entity_index, variable_name);

        let key = (descriptor_index, entity_index);
        if !self.modified_entities.contains(&key) {
            self.modified_entities.push(key);
        }
    }

    fn is_incremental(&self) -> bool {
        self.inner.is_incremental()
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.undo_stack.clear();
        self.modified_entities.clear();
    }

    fn register_undo(&mut self, undo: Box<dyn FnOnce(&mut S) + Send>) {
        self.undo_stack.push(undo);
    }
}
