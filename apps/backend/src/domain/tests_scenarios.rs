// Turn progression walkthroughs on an in-memory lane.

use crate::domain::state::{GameStatus, RollPosition, TurnState};
use crate::domain::test_lane::Lane;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

fn at(frame: u8, roll: u8, idx: u8) -> TurnState {
    TurnState {
        current_frame: frame,
        current_roll: roll,
        current_participant_index: idx,
        status: GameStatus::Active,
    }
}

/// Roll every frame before the tenth as gutter balls for each player.
fn gutter_to_tenth(lane: &mut Lane) {
    while lane.state.current_frame < 10 {
        lane.roll_current(0).unwrap();
    }
}

#[test]
fn strike_completes_normal_frame() {
    let mut lane = Lane::new(1);
    assert_eq!(lane.submit(1, 10).unwrap(), at(2, 1, 0));
    assert_eq!(lane.history.len(), 1);
}

#[test]
fn open_frame_completes_after_two_rolls() {
    let mut lane = Lane::new(1);
    assert_eq!(lane.submit(1, 4).unwrap(), at(1, 2, 0));
    assert_eq!(lane.submit(1, 5).unwrap(), at(2, 1, 0));
}

#[test]
fn two_players_rotate_within_frame() {
    let mut lane = Lane::new(2);
    let (a, b) = (1, 2);
    assert_eq!(lane.submit(a, 10).unwrap(), at(1, 1, 1));
    assert_eq!(lane.submit(b, 3).unwrap(), at(1, 2, 1));
    assert_eq!(lane.submit(b, 4).unwrap(), at(2, 1, 0));
}

#[test]
fn tenth_frame_three_strikes_ends_game() {
    let mut lane = Lane::new(1);
    gutter_to_tenth(&mut lane);
    let before = lane.history.len();

    assert_eq!(lane.submit(1, 10).unwrap(), at(10, 2, 0));
    assert_eq!(lane.submit(1, 10).unwrap(), at(10, 3, 0));
    let done = lane.submit(1, 10).unwrap();

    assert_eq!(lane.history.len() - before, 3);
    assert_eq!(done.status, GameStatus::Done);
    assert_eq!(done.current_frame, 11);
}

#[test]
fn tenth_frame_open_ends_after_two() {
    let mut lane = Lane::new(1);
    gutter_to_tenth(&mut lane);

    assert_eq!(lane.submit(1, 3).unwrap(), at(10, 2, 0));
    let done = lane.submit(1, 4).unwrap();
    assert!(done.is_done());
    assert_eq!(lane.frame_rolls(1, 10).len(), 2);
}

#[test]
fn tenth_frame_spare_requires_bonus_roll() {
    let mut lane = Lane::new(1);
    gutter_to_tenth(&mut lane);

    lane.submit(1, 5).unwrap();
    let after_spare = lane.submit(1, 5).unwrap();
    assert_eq!(after_spare, at(10, 3, 0));
    assert!(!after_spare.is_done());

    assert!(lane.submit(1, 7).unwrap().is_done());
}

#[test]
fn tenth_frame_passes_to_next_player_before_ending() {
    let mut lane = Lane::new(2);
    gutter_to_tenth(&mut lane);

    assert_eq!(lane.submit(1, 2).unwrap(), at(10, 2, 0));
    assert_eq!(lane.submit(1, 2).unwrap(), at(10, 1, 1));
    assert_eq!(lane.submit(2, 10).unwrap(), at(10, 2, 1));
    assert_eq!(lane.submit(2, 0).unwrap(), at(10, 3, 1));
    assert!(lane.submit(2, 10).unwrap().is_done());
}

#[test]
fn out_of_turn_leaves_state_untouched() {
    let mut lane = Lane::new(2);
    let err = lane.submit(2, 5).unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::OutOfTurn, _)));
    assert_eq!(lane.state, TurnState::initial());
    assert!(lane.history.is_empty());
}

#[test]
fn stranger_is_not_a_participant() {
    let mut lane = Lane::new(2);
    let err = lane.submit(42, 5).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Participant, _)));
}

#[test]
fn too_many_pins_on_second_roll() {
    let mut lane = Lane::new(1);
    lane.submit(1, 8).unwrap();
    let err = lane.submit(1, 3).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPinCount, _)
    ));
    assert_eq!(lane.state, at(1, 2, 0));
}

#[test]
fn pin_count_above_ten_rejected() {
    let mut lane = Lane::new(1);
    let err = lane.submit(1, 11).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPinCount, _)
    ));
}

#[test]
fn resubmitting_recorded_roll_is_duplicate() {
    let mut lane = Lane::new(1);
    lane.submit(1, 3).unwrap();
    let before = lane.state;

    let err = lane
        .submit_at(1, 3, Some(RollPosition { frame: 1, roll: 1 }))
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::DuplicateRoll, _)));
    assert_eq!(lane.state, before);
}

#[test]
fn replaying_last_roll_of_finished_game_is_duplicate() {
    let mut lane = Lane::new(1);
    gutter_to_tenth(&mut lane);
    lane.submit(1, 1).unwrap();
    lane.submit(1, 1).unwrap();
    assert!(lane.state.is_done());

    let err = lane
        .submit_at(1, 1, Some(RollPosition { frame: 10, roll: 2 }))
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::DuplicateRoll, _)));

    let err = lane.submit(1, 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::GameAlreadyCompleted, _)
    ));
}

#[test]
fn perfect_game_takes_twelve_rolls() {
    let mut lane = Lane::new(1);
    let mut rolls = 0;
    while !lane.state.is_done() {
        lane.submit(1, 10).unwrap();
        rolls += 1;
    }
    assert_eq!(rolls, 12);
}

#[test]
fn gutter_game_takes_twenty_rolls() {
    let mut lane = Lane::new(1);
    let mut rolls = 0;
    while !lane.state.is_done() {
        lane.submit(1, 0).unwrap();
        rolls += 1;
    }
    assert_eq!(rolls, 20);
}
