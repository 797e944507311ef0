//! Tests for the move module.

use super::*;
use chainforge_core::domain::{
    validate_chains, ChainedValue, ChainedVariableDescriptor, InverseSupply,
    ScanningInverseSupply, SolutionInverseSupply,
};
use chainforge_core::{ChainForgeError, SimpleScore};
use chainforge_scoring::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
use chainforge_test::route::{self, RouteSolution};


type RouteDirector = SimpleScoreDirector<RouteSolution, fn(&RouteSolution) -> SimpleScore>;

fn create_director(solution: RouteSolution) -> RouteDirector {
    SimpleScoreDirector::new(
        solution,
        route::calculate_distance as fn(&RouteSolution) -> SimpleScore,
    )
}

fn entity(idx: usize) -> Option<ChainedValue> {
    Some(ChainedValue::Entity(idx))
}

fn anchor(idx: usize) -> Option<ChainedValue> {
    Some(ChainedValue::Anchor(idx))
}

fn chained_move(
    entity_index: usize,
    to_value: Option<ChainedValue>,
) -> ChainedChangeMove<RouteSolution, SolutionInverseSupply<RouteSolution>> {
    ChainedChangeMove::new(
        entity_index,
        route::nullable_previous_variable(),
        route::next_visit_supply(),
        to_value,
    )
}

// Logs every primitive write as (entity index, value after the write).
struct WriteLogDirector {
    inner: RouteDirector,
    writes: Vec<(usize, Option<ChainedValue>)>,
}

impl WriteLogDirector {
    fn new(solution: RouteSolution) -> Self {
        Self {
            inner: create_director(solution),
            writes: Vec::new(),
        }
    }
}

impl ScoreDirector<RouteSolution> for WriteLogDirector {
    fn working_solution(&self) -> &RouteSolution {
        self.inner.working_solution()
    }

    fn working_solution_mut(&mut self) -> &mut RouteSolution {
        self.inner.working_solution_mut()
    }

    fn calculate_score(&mut self) -> SimpleScore {
        self.inner.calculate_score()
    }

    fn clone_working_solution(&self) -> RouteSolution {
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
        let value = route::get_previous(self.inner.working_solution(), entity_index);
        self.writes.push((entity_index, value));
    }
}
