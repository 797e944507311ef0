//! ChainedMove - a monomorphized union of ChangeMove and ChainedChangeMove.
//!
//! This lets a search loop hold both move types in one arena without
//! trait-object dispatch.

use std::fmt::Debug;

use chainforge_core::domain::{PlanningSolution, SingletonInverseVariableSupply};
use chainforge_core::error::Result;
use chainforge_scoring::ScoreDirector;

use super::{ChainedChangeMove, ChangeMove, Move};

/// A monomorphized union of `ChangeMove` and `ChainedChangeMove`.
///
/// Implements `Move<S>` by delegating to the inner variant.
pub enum ChainedMove<S, I> {
    Change(ChangeMove<S>),
    ChainedChange(ChainedChangeMove<S, I>),
}

impl<S, I: Clone> Clone for ChainedMove<S, I> {
    fn clone(&self) -> Self {
        match self {
            Self::Change(m) => Self::Change(*m),
            Self::ChainedChange(m) => Self::ChainedChange(m.clone()),
        }
    }
}

impl<S, I: Copy> Copy for ChainedMove<S, I> {}

impl<S, I: Debug> Debug for ChainedMove<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Change(m) => m.fmt(f),
            Self::ChainedChange(m) => m.fmt(f),
        }
    }
}

impl<S, I> From<ChangeMove<S>> for ChainedMove<S, I> {
    fn from(m: ChangeMove<S>) -> Self {
        Self::Change(m)
    }
}

impl<S, I> From<ChainedChangeMove<S, I>> for ChainedMove<S, I> {
    fn from(m: ChainedChangeMove<S, I>) -> Self {
        Self::ChainedChange(m)
    }
}

impl<S, I> ChainedMove<S, I> {
    /// Creates the undo move of the inner variant. Must be called before `do_move`.
    pub fn undo_move<D>(&self, score_director: &D) -> Self
    where
        S: PlanningSolution,
        D: ScoreDirector<S>,
        I: Clone,
    {
        match self {
            Self::Change(m) => Self::Change(m.undo_move(score_director)),
            Self::ChainedChange(m) => Self::ChainedChange(m.undo_move(score_director)),
        }
    }
}

impl<S, I> Move<S> for ChainedMove<S, I>
where
    S: PlanningSolution,
    I: SingletonInverseVariableSupply<S>,
{
    fn is_doable<D: ScoreDirector<S>>(&self, score_director: &D) -> bool {
        match self {
            Self::Change(m) => m.is_doable(score_director),
            Self::ChainedChange(m) => m.is_doable(score_director),
        }
    }

    fn do_move<D: ScoreDirector<S>>(&self, score_director: &mut D) -> Result<()> {
        match self {
            Self::Change(m) => m.do_move(score_director),
            Self::ChainedChange(m) => m.do_move(score_director),
        }
    }

    fn descriptor_index(&self) -> usize {
        match self {
            Self::Change(m) => m.descriptor_index(),
            Self::ChainedChange(m) => m.descriptor_index(),
        }
    }

    fn entity_indices(&self) -> &[usize] {
        match self {
            Self::Change(m) => m.entity_indices(),
            Self::ChainedChange(m) => m.entity_indices(),
        }
    }

    fn variable_name(&self) -> &str {
        match self {
            Self::Change(m) => m.variable_name(),
            Self::ChainedChange(m) => m.variable_name(),
        }
    }
}
