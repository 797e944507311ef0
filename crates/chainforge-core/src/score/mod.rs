//! Score types for representing solution quality

mod simple;
mod traits;

pub use simple::SimpleScore;
pub use traits::Score;
