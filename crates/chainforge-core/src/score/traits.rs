//! Core Score trait definition

use std::fmt::{Debug, Display};
use std::ops::{Add, Neg, Sub};

/// Core trait for all score types in ChainForge.
///
/// Scores are immutable, totally ordered and cheap to copy. A higher score
/// is a better score.
pub trait Score:
    Copy
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Returns true if this score represents a feasible solution.
    fn is_feasible(&self) -> bool;

    /// Returns the zero score (identity element for addition).
    fn zero() -> Self;
}
