//! Inverse supplies for chained variables.
//!
//! A supply answers "which entity currently points at this value?" for a
//! chained variable. Moves receive the supply as an explicit capability
//! value; nothing is registered globally.
//!
//! # Implementations
//!
//! - [`InverseSupply`]: externalized index map, rebuilt between moves
//! - [`SolutionInverseSupply`]: reads an inverse index kept inside the solution
//! - [`ScanningInverseSupply`]: scans all entities, always consistent

mod inverse;

pub use inverse::InverseSupply;

use std::fmt;

use super::value::ChainedValue;
use super::variable::ChainedVariableDescriptor;

/// Singleton inverse lookup for a chained variable.
///
/// Given a value `v`, returns the index of the unique entity `e` with
/// `e.var == v`, or `None` when nothing trails `v`. Implementations must be
/// consistent with `solution` at the time of the call.
pub trait SingletonInverseVariableSupply<S>: Send + Sync + fmt::Debug {
    /// Returns the entity trailing `value`, if any.
    fn inverse_singleton(&self, solution: &S, value: ChainedValue) -> Option<usize>;
}

impl<S, T> SingletonInverseVariableSupply<S> for &T
where
    T: SingletonInverseVariableSupply<S> + ?Sized,
{
    #[inline]
    fn inverse_singleton(&self, solution: &S, value: ChainedValue) -> Option<usize> {
        (**self).inverse_singleton(solution, value)
    }
}

/// Inverse lookup backed by a shadow index stored in the solution.
///
/// The solution's setter keeps the index current, so lookups are O(1) and
/// reflect every write made through the score director.
pub struct SolutionInverseSupply<S> {
    lookup: fn(&S, ChainedValue) -> Option<usize>,
}

impl<S> SolutionInverseSupply<S> {
    /// Creates a supply from a typed lookup function pointer.
    pub fn new(lookup: fn(&S, ChainedValue) -> Option<usize>) -> Self {
        Self { lookup }
    }
}

impl<S> Clone for SolutionInverseSupply<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SolutionInverseSupply<S> {}

impl<S> fmt::Debug for SolutionInverseSupply<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionInverseSupply").finish_non_exhaustive()
    }
}

impl<S> SingletonInverseVariableSupply<S> for SolutionInverseSupply<S> {
    #[inline]
    fn inverse_singleton(&self, solution: &S, value: ChainedValue) -> Option<usize> {
        (self.lookup)(solution, value)
    }
}

/// Inverse lookup that scans every entity of the variable.
///
/// O(n) per lookup. Useful for small problems and as a reference when
/// checking other supplies.
pub struct ScanningInverseSupply<S> {
    variable: ChainedVariableDescriptor<S>,
}

impl<S> ScanningInverseSupply<S> {
    /// Creates a scanning supply for the given variable.
    pub fn new(variable: ChainedVariableDescriptor<S>) -> Self {
        Self { variable }
    }
}

impl<S> Clone for ScanningInverseSupply<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ScanningInverseSupply<S> {}

impl<S> fmt::Debug for ScanningInverseSupply<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanningInverseSupply")
            .field("variable", &self.variable.variable_name())
            .finish()
    }
}

impl<S> SingletonInverseVariableSupply<S> for ScanningInverseSupply<S> {
    fn inverse_singleton(&self, solution: &S, value: ChainedValue) -> Option<usize> {
        (0..self.variable.entity_count(solution))
            .find(|&idx| self.variable.get_value(solution, idx) == Some(value))
    }
}

#[cfg(test)]
mod tests;
