//! ChainForge Core - Core types and traits for chained planning variables
//!
//! This crate provides the fundamental abstractions for ChainForge:
//! - Score types for representing solution quality
//! - Domain traits for defining planning problems
//! - Chained variable descriptors and chain values
//! - Inverse supplies answering "who trails this value?"

pub mod domain;
pub mod error;
pub mod score;

pub use domain::{ChainedValue, ChainedVariableDescriptor, PlanningSolution};
pub use error::ChainForgeError;
pub use score::{Score, SimpleScore};
