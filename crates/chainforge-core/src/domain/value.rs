//! Values a chained variable can take.

use std::fmt;

/// The value of a chained planning variable.
///
/// Entities and anchors are addressed by stable indices into their
/// collections, so equality is identity: two values are equal exactly when
/// they denote the same anchor or the same entity. An unassigned variable is
/// represented as `Option::<ChainedValue>::None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChainedValue {
    /// A chain root. Anchors carry no chained variable themselves.
    Anchor(usize),
    /// Another planning entity of the same chained variable.
    Entity(usize),
}

impl ChainedValue {
    /// Returns true if this value is an anchor.
    #[inline]
    pub fn is_anchor(&self) -> bool {
        matches!(self, ChainedValue::Anchor(_))
    }

    /// Returns true if this value is a planning entity.
    #[inline]
    pub fn is_entity(&self) -> bool {
        matches!(self, ChainedValue::Entity(_))
    }

    /// Returns the entity index if this value is an entity.
    #[inline]
    pub fn entity_index(&self) -> Option<usize> {
        match self {
            ChainedValue::Entity(idx) => Some(*idx),
            ChainedValue::Anchor(_) => None,
        }
    }

    /// Returns the anchor index if this value is an anchor.
    #[inline]
    pub fn anchor_index(&self) -> Option<usize> {
        match self {
            ChainedValue::Anchor(idx) => Some(*idx),
            ChainedValue::Entity(_) => None,
        }
    }
}

impl fmt::Debug for ChainedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ChainedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainedValue::Anchor(idx) => write!(f, "anchor#{}", idx),
            ChainedValue::Entity(idx) => write!(f, "entity#{}", idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accessors() {
        let anchor = ChainedValue::Anchor(2);
        let entity = ChainedValue::Entity(5);

        assert!(anchor.is_anchor());
        assert!(!anchor.is_entity());
        assert_eq!(anchor.anchor_index(), Some(2));
        assert_eq!(anchor.entity_index(), None);

        assert!(entity.is_entity());
        assert_eq!(entity.entity_index(), Some(5));
        assert_eq!(entity.anchor_index(), None);
    }

    #[test]
    fn test_identity_equality() {
        // Same index, different kind: never equal.
        assert_ne!(ChainedValue::Anchor(1), ChainedValue::Entity(1));
        assert_eq!(ChainedValue::Entity(1), ChainedValue::Entity(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(ChainedValue::Anchor(0).to_string(), "anchor#0");
        assert_eq!(format!("{:?}", ChainedValue::Entity(3)), "entity#3");
    }
}
