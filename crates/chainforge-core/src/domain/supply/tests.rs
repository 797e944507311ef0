//! Tests for inverse supplies.

use super::*;
use crate::domain::ChainedValue::{Anchor, Entity};

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

// A0 -> e0 -> e1 -> e2 ; A1 -> e3
fn two_chains() -> Line {
    Line {
        anchors: 2,
        previous: vec![
            Some(Anchor(0)),
            Some(Entity(0)),
            Some(Entity(1)),
            Some(Anchor(1)),
        ],
    }
}

#[test]
fn test_insert_and_get() {
    let mut supply = InverseSupply::new();

    supply.insert(Anchor(0), 0);
    supply.insert(Entity(0), 1);

    assert_eq!(supply.get(&Anchor(0)), Some(0));
    assert_eq!(supply.get(&Entity(0)), Some(1));
    assert_eq!(supply.get(&Entity(1)), None);
}

#[test]
fn test_retract_only_own_mapping() {
    let mut supply = InverseSupply::new();
    supply.insert(Entity(0), 2);

    assert!(!supply.retract(&Entity(0), 1));
    assert_eq!(supply.get(&Entity(0)), Some(2));

    assert!(supply.retract(&Entity(0), 2));
    assert!(supply.is_empty());
}

#[test]
fn test_update_moves_mapping() {
    let mut supply = InverseSupply::new();
    supply.insert(Anchor(0), 0);

    supply.update(Some(Anchor(0)), Some(Anchor(1)), 0);

    assert_eq!(supply.get(&Anchor(0)), None);
    assert_eq!(supply.get(&Anchor(1)), Some(0));

    supply.update(Some(Anchor(1)), None, 0);
    assert!(supply.is_empty());
}

#[test]
fn test_rebuild_from_solution() {
    let s = two_chains();
    let supply = InverseSupply::from_solution(&s, &variable());

    assert_eq!(supply.len(), 4);
    assert_eq!(supply.get(&Anchor(0)), Some(0));
    assert_eq!(supply.get(&Entity(1)), Some(2));
    assert_eq!(supply.get(&Entity(2)), None);
    assert_eq!(supply.get(&Anchor(1)), Some(3));
}

#[test]
fn test_update_survives_transient_double_pointer() {
    // Relocate e1 behind e3 with the three-step repair:
    // e2 := e0, e1 := e3, (nothing trails e3).
    let mut s = two_chains();
    let var = variable();
    let mut supply = InverseSupply::from_solution(&s, &var);

    for (entity, value) in [(2, Entity(0)), (1, Entity(3))] {
        let old = var.get_value(&s, entity);
        var.set_value(&mut s, entity, Some(value));
        supply.update(old, Some(value), entity);
    }

    let rebuilt = InverseSupply::from_solution(&s, &var);
    let mut expected: Vec<_> = rebuilt.iter().map(|(&v, &e)| (v, e)).collect();
    let mut actual: Vec<_> = supply.iter().map(|(&v, &e)| (v, e)).collect();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_scanning_supply() {
    let s = two_chains();
    let supply = ScanningInverseSupply::new(variable());

    assert_eq!(supply.inverse_singleton(&s, Entity(0)), Some(1));
    assert_eq!(supply.inverse_singleton(&s, Entity(2)), None);
    assert_eq!(supply.inverse_singleton(&s, Anchor(1)), Some(3));
}

#[test]
fn test_solution_supply() {
    fn lookup(s: &Line, value: ChainedValue) -> Option<usize> {
        s.previous.iter().position(|p| *p == Some(value))
    }
    let s = two_chains();
    let supply = SolutionInverseSupply::new(lookup);

    assert_eq!(supply.inverse_singleton(&s, Entity(1)), Some(2));
    assert_eq!(supply.inverse_singleton(&s, Entity(3)), None);
}

#[test]
fn test_reference_is_a_supply() {
    fn trailing_of_anchor<I: SingletonInverseVariableSupply<Line>>(
        supply: I,
        s: &Line,
    ) -> Option<usize> {
        supply.inverse_singleton(s, Anchor(0))
    }
    let s = two_chains();
    let supply = InverseSupply::from_solution(&s, &variable());

    assert_eq!(trailing_of_anchor(&supply, &s), Some(0));
}
