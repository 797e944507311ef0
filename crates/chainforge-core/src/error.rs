//! Error types for ChainForge

use thiserror::Error;

/// Main error type for ChainForge operations
#[derive(Debug, Error)]
pub enum ChainForgeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error in domain model definition
    #[error("Domain model error: {0}")]
    DomainModel(String),

    /// The score director refused a primitive variable change.
    #[error("Change of variable '{variable}' on entity {entity_index} rejected: {reason}")]
    VariableChangeRejected {
        /// Name of the variable being changed.
        variable: &'static str,
        /// Index of the entity whose variable was being changed.
        entity_index: usize,
        /// Why the change was refused.
        reason: String,
    },

    /// The chain structure no longer satisfies the chain invariant.
    #[error("Chain corrupted: {0}")]
    ChainCorrupted(String),
}

/// Result type alias for ChainForge operations
pub type Result<T> = std::result::Result<T, ChainForgeError>;
