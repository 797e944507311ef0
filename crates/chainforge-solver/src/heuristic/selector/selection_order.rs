//! Selection order for move selectors.

use chainforge_config::SelectionOrderConfig;

/// Defines the order in which moves are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionOrder {
    /// Moves in their original order: entity by entity, anchors before
    /// entities, unassigned last. Deterministic and reproducible.
    #[default]
    Original,

    /// Moves shuffled when a selection iterator is created.
    ///
    /// Each move is selected exactly once. Requires caching all moves of
    /// the step.
    Shuffled,
}

impl SelectionOrder {
    /// Returns `true` if this selection order implies random selection.
    pub fn is_random(&self) -> bool {
        matches!(self, SelectionOrder::Shuffled)
    }

    /// Returns `true` if this selection order requires caching.
    pub fn requires_caching(&self) -> bool {
        self.is_random()
    }
}

impl From<SelectionOrderConfig> for SelectionOrder {
    fn from(config: SelectionOrderConfig) -> Self {
        match config {
            SelectionOrderConfig::Original => SelectionOrder::Original,
            SelectionOrderConfig::Shuffled => SelectionOrder::Shuffled,
        }
    }
}
