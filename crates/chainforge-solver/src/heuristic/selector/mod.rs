//! Move selectors.
//!
//! Selectors enumerate the moves the solver considers when exploring the
//! solution space.

mod chained_change;
mod selection_order;
mod traits;

pub use chained_change::ChainedChangeMoveSelector;
pub use selection_order::SelectionOrder;
pub use traits::MoveSelector;
