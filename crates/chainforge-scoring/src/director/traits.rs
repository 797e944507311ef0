// Score director trait definition.

use chainforge_core::domain::{ChainedValue, ChainedVariableDescriptor, PlanningSolution};
use chainforge_core::error::{ChainForgeError, Result};
use tracing::{debug, trace};

// The score director manages solution state and score calculation.
//
// It is responsible for:
// - Maintaining the working solution
// - Calculating scores
// - Applying primitive variable changes and notifying about them
// - Handing undo closures to recording wrappers
pub trait ScoreDirector<S: PlanningSolution>: Send {
    // Returns a reference to the working solution.
    fn working_solution(&self) -> &S;

    // Returns a mutable reference to the working solution.
    fn working_solution_mut(&mut self) -> &mut S;

    // Calculates and returns the current score.
    fn calculate_score(&mut self) -> S::Score;

    // Clones the working solution.
    fn clone_working_solution(&self) -> S;

    // Called before a planning variable is changed.
    fn before_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        variable_name: &str,
    );

    // Called after a planning variable is changed.
    fn after_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        variable_name: &str,
    );

    // Returns true if this score director supports incremental scoring.
    fn is_incremental(&self) -> bool {
        false
    }

    // Resets the score director state.
    fn reset(&mut self) {}

    // Registers a typed undo closure.
    //
    // Called after every primitive change. The closure will be called in
    // reverse order during `undo_changes()`.
    //
    // Default implementation does nothing (for non-recording directors).
    fn register_undo(&mut self, _undo: Box<dyn FnOnce(&mut S) + Send>) {
        // Default: no-op - only RecordingScoreDirector stores undo closures
    }

    // Sets `entity.var := value` for a chained variable.
    //
    // This is the single primitive mutation moves are built from. The change
    // is rejected without touching the solution when the entity is out of
    // range, the value lies outside the variable's value range, or the
    // entity would point at itself.
    fn change_variable(
        &mut self,
        variable: &ChainedVariableDescriptor<S>,
        entity_index: usize,
        value: Option<ChainedValue>,
    ) -> Result<()> {
        let solution = self.working_solution();
        let rejection = if entity_index >= variable.entity_count(solution) {
            Some("entity index out of range".to_string())
        } else if value == Some(ChainedValue::Entity(entity_index)) {
            Some("an entity cannot trail itself".to_string())
        } else if !variable.is_admissible(solution, entity_index, value) {
            Some(match value {
                Some(v) => format!("{} is outside the value range", v),
                None => "variable does not allow unassigned entities".to_string(),
            })
        } else {
            None
        };

        if let Some(reason) = rejection {
            debug!(
                variable = variable.variable_name(),
                entity_index,
                ?value,
                %reason,
                "Rejected variable change"
            );
            return Err(ChainForgeError::VariableChangeRejected {
                variable: variable.variable_name(),
                entity_index,
                reason,
            });
        }

        let old_value = variable.get_value(solution, entity_index);
        let descriptor_index = variable.descriptor_index();
        let variable_name = variable.variable_name();

        self.before_variable_changed(descriptor_index, entity_index, variable_name);
        variable.set_value(self.working_solution_mut(), entity_index, value);
        self.after_variable_changed(descriptor_index, entity_index, variable_name);

        let setter = variable.setter();
        self.register_undo(Box::new(move |s: &mut S| {
            setter(s, entity_index, old_value);
        }));

        trace!(
            variable = variable_name,
            entity_index,
            ?old_value,
            ?value,
            "Changed variable"
        );
        Ok(())
    }
}
