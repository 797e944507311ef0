//! Domain model for chained planning variables
//!
//! - `PlanningSolution`: The container for the complete problem and solution
//! - `ChainedValue`: What a chained variable can point at (anchor or entity)
//! - `ChainedVariableDescriptor`: Typed access to a chained variable
//! - `supply`: Inverse lookups ("which entity trails this value?")
//! - `chain`: Chain invariant checks and chain walking

mod chain;
mod traits;
mod value;
mod variable;
pub mod supply;

pub use chain::{chain_of, validate_chains};
pub use supply::{
    InverseSupply, ScanningInverseSupply, SingletonInverseVariableSupply, SolutionInverseSupply,
};
pub use traits::PlanningSolution;
pub use value::ChainedValue;
pub use variable::ChainedVariableDescriptor;
