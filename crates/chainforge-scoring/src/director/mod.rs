//! Score director implementations.
//!
//! # Score Director Types
//!
//! - [`SimpleScoreDirector`] - Full recalculation (baseline)
//! - [`RecordingScoreDirector`] - Automatic undo tracking wrapper

mod simple;
mod traits;

pub mod recording;

#[cfg(test)]
mod recording_tests;

pub use recording::RecordingScoreDirector;
pub use simple::SimpleScoreDirector;
pub use traits::ScoreDirector;
