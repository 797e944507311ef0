//! Move selector for chained change moves.

use std::cell::RefCell;
use std::fmt::Debug;

use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use chainforge_config::ChainedChangeMoveSelectorConfig;
use chainforge_core::domain::{
    ChainedValue, ChainedVariableDescriptor, PlanningSolution, SingletonInverseVariableSupply,
};
use chainforge_core::error::{ChainForgeError, Result};
use chainforge_scoring::ScoreDirector;

use super::{MoveSelector, SelectionOrder};
use crate::heuristic::r#move::ChainedChangeMove;

/// Generates a `ChainedChangeMove` for every entity and every candidate value.
///
/// Candidate values of an entity are all anchors, all other entities and,
/// when enabled and the variable allows it, unassigned. Moves are not filtered for
/// doability; the caller checks `is_doable` before applying.
///
/// In [`SelectionOrder::Shuffled`] mode all moves of the step are collected
/// and shuffled with Fisher-Yates. Uses interior mutability for the RNG
/// since `iter_moves` takes `&self`.
///
/// # Example
///
/// ```
/// use chainforge_scoring::SimpleScoreDirector;
/// use chainforge_solver::{ChainedChangeMoveSelector, MoveSelector};
/// use chainforge_test::route::{self, RouteSolution};
///
/// let solution = RouteSolution::from_chains(2, 3, &[&[0, 1], &[2]]);
/// let director = SimpleScoreDirector::new(solution, route::calculate_distance);
///
/// let selector = ChainedChangeMoveSelector::new(
///     route::previous_variable(),
///     route::next_visit_supply(),
/// );
/// // 3 visits x (2 vehicles + 2 other visits)
/// assert_eq!(selector.size(&director), 12);
/// assert_eq!(selector.iter_moves(&director).count(), 12);
/// ```
pub struct ChainedChangeMoveSelector<S, I> {
    variable: ChainedVariableDescriptor<S>,
    inverse: I,
    selection_order: SelectionOrder,
    allow_no_op_moves: bool,
    allow_unassigned: bool,
    rng: RefCell<StdRng>,
}

impl<S, I: Debug> Debug for ChainedChangeMoveSelector<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedChangeMoveSelector")
            .field("variable", &self.variable)
            .field("inverse", &self.inverse)
            .field("selection_order", &self.selection_order)
            .field("allow_no_op_moves", &self.allow_no_op_moves)
            .field("allow_unassigned", &self.allow_unassigned)
            .finish()
    }
}

impl<S, I> ChainedChangeMoveSelector<S, I> {
    /// Creates a selector in original order.
    ///
    /// Unassigning moves are generated iff the variable allows unassigned
    /// entities.
    pub fn new(variable: ChainedVariableDescriptor<S>, inverse: I) -> Self {
        Self {
            allow_unassigned: variable.allows_unassigned(),
            variable,
            inverse,
            selection_order: SelectionOrder::Original,
            allow_no_op_moves: false,
            rng: RefCell::new(StdRng::from_os_rng()),
        }
    }

    /// Creates a selector from configuration.
    pub fn from_config(
        variable: ChainedVariableDescriptor<S>,
        inverse: I,
        config: &ChainedChangeMoveSelectorConfig,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ChainForgeError::Config(e.to_string()))?;

        let allow_unassigned = config.allow_unassigned && variable.allows_unassigned();
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        debug!(
            variable = variable.variable_name(),
            selection_order = ?config.selection_order,
            allow_no_op_moves = config.allow_no_op_moves,
            allow_unassigned,
            random_seed = ?config.random_seed,
            "Created chained change move selector"
        );

        Ok(Self {
            variable,
            inverse,
            selection_order: config.selection_order.into(),
            allow_no_op_moves: config.allow_no_op_moves,
            allow_unassigned,
            rng: RefCell::new(rng),
        })
    }

    /// Sets the selection order.
    pub fn with_selection_order(mut self, selection_order: SelectionOrder) -> Self {
        self.selection_order = selection_order;
        self
    }

    /// Reseeds the RNG used in shuffled order.
    ///
    /// Use this for reproducible shuffling in tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = RefCell::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Makes the generated moves doable when the entity already trails the target.
    pub fn with_allow_no_op_moves(mut self, allow: bool) -> Self {
        self.allow_no_op_moves = allow;
        self
    }

    /// Enables unassigning moves. Has no effect when the variable requires
    /// every entity to be assigned.
    pub fn with_allow_unassigned(mut self, allow: bool) -> Self {
        self.allow_unassigned = allow && self.variable.allows_unassigned();
        self
    }

    /// Returns the variable descriptor.
    pub fn variable(&self) -> &ChainedVariableDescriptor<S> {
        &self.variable
    }

    /// Returns the selection order.
    pub fn selection_order(&self) -> SelectionOrder {
        self.selection_order
    }
}

impl<S, I> ChainedChangeMoveSelector<S, I>
where
    S: PlanningSolution,
    I: SingletonInverseVariableSupply<S> + Clone,
{
    fn candidate_moves<'a>(
        &'a self,
        solution: &S,
    ) -> impl Iterator<Item = ChainedChangeMove<S, I>> + 'a {
        let entity_count = self.variable.entity_count(solution);
        let anchor_count = self.variable.anchor_count(solution);
        let unassigned = self.allow_unassigned;

        (0..entity_count).flat_map(move |entity_index| {
            let anchors = (0..anchor_count).map(|idx| Some(ChainedValue::Anchor(idx)));
            let entities = (0..entity_count)
                .filter(move |&idx| idx != entity_index)
                .map(|idx| Some(ChainedValue::Entity(idx)));
            anchors
                .chain(entities)
                .chain(unassigned.then_some(None))
                .map(move |to_value| {
                    ChainedChangeMove::new(
                        entity_index,
                        self.variable,
                        self.inverse.clone(),
                        to_value,
                    )
                    .with_allow_no_op(self.allow_no_op_moves)
                })
        })
    }
}

impl<S, I> MoveSelector<S, ChainedChangeMove<S, I>> for ChainedChangeMoveSelector<S, I>
where
    S: PlanningSolution,
    I: SingletonInverseVariableSupply<S> + Clone,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> impl Iterator<Item = ChainedChangeMove<S, I>> + 'a {
        let solution = score_director.working_solution();

        let shuffled = if self.selection_order.is_random() {
            let mut moves: Vec<_> = self.candidate_moves(solution).collect();
            moves.shuffle(&mut *self.rng.borrow_mut());
            Some(moves.into_iter())
        } else {
            None
        };
        let original = if shuffled.is_some() {
            None
        } else {
            Some(self.candidate_moves(solution))
        };

        shuffled
            .into_iter()
            .flatten()
            .chain(original.into_iter().flatten())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        let solution = score_director.working_solution();
        let entity_count = self.variable.entity_count(solution);
        let anchor_count = self.variable.anchor_count(solution);
        let unassigned = usize::from(self.allow_unassigned);
        entity_count * (anchor_count + entity_count.saturating_sub(1) + unassigned)
    }
}
