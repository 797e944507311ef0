//! ChainForge Solver - moves and move selectors for chained variables
//!
//! This crate provides:
//! - The `Move` trait and the chained change move that repairs both chains
//! - `ChainedMove`, a monomorphized union of the chained move types
//! - Move selectors enumerating chained change moves

pub mod heuristic;

pub use heuristic::{
    ChainedChangeMove, ChainedChangeMoveSelector, ChainedMove, ChangeMove, Move, MoveSelector,
    SelectionOrder,
};
