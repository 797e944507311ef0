//! Score directors for ChainForge.
//!
//! The score director is the only mutation sink for the working solution:
//! - [`ScoreDirector`] - the trait moves are written against, including the
//!   primitive `change_variable` used by every move
//! - [`SimpleScoreDirector`] - full recalculation with a cached score
//! - [`RecordingScoreDirector`] - wrapper that records undo closures

pub mod director;

pub use director::{RecordingScoreDirector, ScoreDirector, SimpleScoreDirector};
