//! Tests for RecordingScoreDirector.

use super::recording::RecordingScoreDirector;
use super::{ScoreDirector, SimpleScoreDirector};
use chainforge_core::domain::ChainedValue::{Anchor, Entity};
use chainforge_core::SimpleScore;
use chainforge_test::route::{
    calculate_distance, get_previous, next_visit, previous_variable, set_previous, RouteSolution,
};

fn create_director(
    solution: RouteSolution,
) -> SimpleScoreDirector<RouteSolution, fn(&RouteSolution) -> SimpleScore> {
    SimpleScoreDirector::new(solution, calculate_distance as fn(&RouteSolution) -> SimpleScore)
}

#[test]
fn test_recording_register_undo() {
    let mut inner = create_director(RouteSolution::from_chains(2, 1, &[&[0]]));

    {
        let mut recording = RecordingScoreDirector::new(&mut inner);

        let old_value = get_previous(recording.working_solution(), 0);
        set_previous(recording.working_solution_mut(), 0, Some(Anchor(1)));
        recording.register_undo(Box::new(move |s: &mut RouteSolution| {
            set_previous(s, 0, old_value);
        }));

        assert_eq!(recording.change_count(), 1);
        assert_eq!(get_previous(recording.working_solution(), 0), Some(Anchor(1)));

        recording.undo_changes();
        assert!(recording.is_empty());
    }

    assert_eq!(get_previous(inner.working_solution(), 0), Some(Anchor(0)));
}

#[test]
fn test_change_variable_is_recorded() {
    let mut inner = create_director(RouteSolution::from_chains(2, 3, &[&[0, 1, 2], &[]]));
    let variable = previous_variable();

    {
        let mut recording = RecordingScoreDirector::new(&mut inner);

        // Move visit 1 to vehicle 1 by hand: close the gap, then relocate.
        recording.change_variable(&variable, 2, Some(Entity(0))).unwrap();
        recording.change_variable(&variable, 1, Some(Anchor(1))).unwrap();
        assert_eq!(recording.change_count(), 2);
        assert_eq!(recording.working_solution().chains(), vec![vec![0, 2], vec![1]]);

        recording.undo_changes();
    }

    let solution = inner.working_solution();
    assert_eq!(solution.chains(), vec![vec![0, 1, 2], vec![]]);
    assert_eq!(next_visit(solution, Entity(1)), Some(2));
}

#[test]
fn test_rejected_change_is_not_recorded() {
    let mut inner = create_director(RouteSolution::from_chains(1, 1, &[&[0]]));

    let mut recording = RecordingScoreDirector::new(&mut inner);
    assert!(recording
        .change_variable(&previous_variable(), 0, Some(Anchor(3)))
        .is_err());
    assert!(recording.is_empty());
}

#[test]
fn test_recording_calculate_score() {
    let mut inner = create_director(RouteSolution::from_chains(2, 2, &[&[0, 1], &[]]));

    let mut recording = RecordingScoreDirector::new(&mut inner);
    assert_eq!(recording.calculate_score(), SimpleScore::of(-20));

    recording
        .change_variable(&previous_variable(), 1, Some(Anchor(1)))
        .unwrap();
    assert_eq!(recording.calculate_score(), SimpleScore::of(-30));

    recording.undo_changes();
    assert_eq!(recording.calculate_score(), SimpleScore::of(-20));
}

#[test]
fn test_recording_reset() {
    let mut inner = create_director(RouteSolution::from_chains(1, 1, &[&[0]]));

    let mut recording = RecordingScoreDirector::new(&mut inner);
    recording.register_undo(Box::new(|_: &mut RouteSolution| {}));
    assert_eq!(recording.change_count(), 1);

    recording.reset();
    assert!(recording.is_empty());
}
