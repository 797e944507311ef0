//! Chain invariant checks and chain walking.

use std::collections::HashMap;

use super::supply::SingletonInverseVariableSupply;
use super::value::ChainedValue;
use super::variable::ChainedVariableDescriptor;
use crate::error::{ChainForgeError, Result};

/// Checks that the chained variable forms well-formed chains.
///
/// Verifies that:
/// - every value is in range and no entity points at itself
/// - no two entities trail the same value
/// - every assigned entity reaches an anchor without revisiting an entity
/// - unassigned entities only occur when the variable allows them
///
/// Runs in O(n²) worst case; intended for tests and assertion modes.
pub fn validate_chains<S>(solution: &S, variable: &ChainedVariableDescriptor<S>) -> Result<()> {
    let entity_count = variable.entity_count(solution);
    let anchor_count = variable.anchor_count(solution);
    let mut trailing: HashMap<ChainedValue, usize> = HashMap::with_capacity(entity_count);

    for entity_idx in 0..entity_count {
        let Some(value) = variable.get_value(solution, entity_idx) else {
            if variable.allows_unassigned() {
                continue;
            }
            return Err(ChainForgeError::ChainCorrupted(format!(
                "entity {} is unassigned but variable '{}' requires a value",
                entity_idx,
                variable.variable_name()
            )));
        };

        match value {
            ChainedValue::Anchor(idx) if idx >= anchor_count => {
                return Err(ChainForgeError::DomainModel(format!(
                    "entity {} points at {} but only {} anchors exist",
                    entity_idx, value, anchor_count
                )));
            }
            ChainedValue::Entity(idx) if idx >= entity_count => {
                return Err(ChainForgeError::DomainModel(format!(
                    "entity {} points at {} but only {} entities exist",
                    entity_idx, value, entity_count
                )));
            }
            ChainedValue::Entity(idx) if idx == entity_idx => {
                return Err(ChainForgeError::ChainCorrupted(format!(
                    "entity {} points at itself",
                    entity_idx
                )));
            }
            _ => {}
        }

        if let Some(other) = trailing.insert(value, entity_idx) {
            return Err(ChainForgeError::ChainCorrupted(format!(
                "entities {} and {} both trail {}",
                other, entity_idx, value
            )));
        }
    }

    for entity_idx in 0..entity_count {
        let mut current = variable.get_value(solution, entity_idx);
        let mut steps = 0;
        loop {
            match current {
                None if steps == 0 => break,
                None => {
                    return Err(ChainForgeError::ChainCorrupted(format!(
                        "entity {} hangs off an unassigned entity",
                        entity_idx
                    )));
                }
                Some(ChainedValue::Anchor(_)) => break,
                Some(ChainedValue::Entity(idx)) => {
                    steps += 1;
                    if steps > entity_count {
                        return Err(ChainForgeError::ChainCorrupted(format!(
                            "entity {} is part of a cycle",
                            entity_idx
                        )));
                    }
                    current = variable.get_value(solution, idx);
                }
            }
        }
    }

    Ok(())
}

/// Returns the entities chained behind an anchor, head first.
///
/// Follows the inverse supply from `Anchor(anchor_index)` until nothing
/// trails the last entity.
pub fn chain_of<S, I>(
    solution: &S,
    variable: &ChainedVariableDescriptor<S>,
    inverse: &I,
    anchor_index: usize,
) -> Result<Vec<usize>>
where
    I: SingletonInverseVariableSupply<S> + ?Sized,
{
    let entity_count = variable.entity_count(solution);
    let mut chain = Vec::new();
    let mut current = ChainedValue::Anchor(anchor_index);
    while let Some(next) = inverse.inverse_singleton(solution, current) {
        if chain.len() >= entity_count {
            return Err(ChainForgeError::ChainCorrupted(format!(
                "chain of anchor {} does not terminate",
                anchor_index
            )));
        }
        chain.push(next);
        current = ChainedValue::Entity(next);
    }
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScanningInverseSupply;

    #[derive(Clone, Debug)]
    struct Line {
        anchors: usize,
        previous: Vec<Option<ChainedValue>>,
    }

    fn get_previous(s: &Line, i: usize) -> Option<ChainedValue> {
        s.previous.get(i).copied().flatten()
    }

    fn set_previous(s: &mut Line, i: usize, v: Option<ChainedValue>) {
        if let Some(slot) = s.previous.get_mut(i) {
            *slot = v;
        }
    }

    fn variable() -> ChainedVariableDescriptor<Line> {
        ChainedVariableDescriptor::new(
            "previous",
            0,
            get_previous,
            set_previous,
            |s: &Line| s.previous.len(),
            |s: &Line| s.anchors,
        )
    }

    use crate::domain::ChainedValue::{Anchor, Entity};

    #[test]
    fn test_valid_chains() {
        // A0 -> e0 -> e1 ; A1 -> e2
        let s = Line {
            anchors: 2,
            previous: vec![Some(Anchor(0)), Some(Entity(0)), Some(Anchor(1))],
        };
        assert!(validate_chains(&s, &variable()).is_ok());
    }

    #[test]
    fn test_duplicate_successor_rejected() {
        let s = Line {
            anchors: 1,
            previous: vec![Some(Anchor(0)), Some(Entity(0)), Some(Entity(0))],
        };
        let err = validate_chains(&s, &variable()).unwrap_err();
        assert!(matches!(err, ChainForgeError::ChainCorrupted(_)));
    }

    #[test]
    fn test_cycle_rejected() {
        // e1 -> e2 -> e1 never reaches an anchor.
        let s = Line {
            anchors: 1,
            previous: vec![Some(Anchor(0)), Some(Entity(2)), Some(Entity(1))],
        };
        assert!(validate_chains(&s, &variable()).is_err());
    }

    #[test]
    fn test_self_loop_rejected() {
        let s = Line {
            anchors: 1,
            previous: vec![Some(Entity(0))],
        };
        assert!(validate_chains(&s, &variable()).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let s = Line {
            anchors: 1,
            previous: vec![Some(Anchor(4))],
        };
        let err = validate_chains(&s, &variable()).unwrap_err();
        assert!(matches!(err, ChainForgeError::DomainModel(_)));
    }

    #[test]
    fn test_unassigned_entities() {
        let s = Line {
            anchors: 1,
            previous: vec![Some(Anchor(0)), None],
        };
        assert!(validate_chains(&s, &variable()).is_err());
        assert!(validate_chains(&s, &variable().with_allows_unassigned(true)).is_ok());

        // Nothing may hang off an unassigned entity.
        let dangling = Line {
            anchors: 1,
            previous: vec![Some(Anchor(0)), None, Some(Entity(1))],
        };
        assert!(validate_chains(&dangling, &variable().with_allows_unassigned(true)).is_err());
    }

    #[test]
    fn test_chain_of() {
        // A0 -> e2 -> e0 ; A1 -> e1
        let s = Line {
            anchors: 2,
            previous: vec![Some(Entity(2)), Some(Anchor(1)), Some(Anchor(0))],
        };
        let var = variable();
        let inverse = ScanningInverseSupply::new(var);

        assert_eq!(chain_of(&s, &var, &inverse, 0).unwrap(), vec![2, 0]);
        assert_eq!(chain_of(&s, &var, &inverse, 1).unwrap(), vec![1]);
    }

    #[test]
    fn test_chain_of_empty_anchor() {
        let s = Line {
            anchors: 2,
            previous: vec![Some(Anchor(0))],
        };
        let var = variable();
        let inverse = ScanningInverseSupply::new(var);

        assert!(chain_of(&s, &var, &inverse, 1).unwrap().is_empty());
    }
}
