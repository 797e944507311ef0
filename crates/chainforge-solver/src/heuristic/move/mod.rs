//! Move system for modifying chained planning variables.
//!
//! # Architecture
//!
//! All moves are fully typed and store the variable descriptor inline:
//! - `ChangeMove<S>` - points one entity at a new value
//! - `ChainedChangeMove<S, I>` - relocates one entity and repairs both chains
//! - `ChainedMove<S, I>` - union of the two, dispatched without trait objects
//!
//! Every move mutates the solution only through
//! [`ScoreDirector::change_variable`](chainforge_scoring::ScoreDirector::change_variable).
//! Undo is available two ways: an explicit undo move captured before
//! `do_move`, or a `RecordingScoreDirector` replaying the registered undo
//! closures.

mod chained_change;
mod change;
mod either;
mod traits;

pub use chained_change::ChainedChangeMove;
pub use change::ChangeMove;
pub use either::ChainedMove;
pub use traits::Move;

#[cfg(test)]
mod tests;
