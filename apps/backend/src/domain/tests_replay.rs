// History replay: agreement with live play and rejection of corrupt histories.

use crate::domain::pins::PinCount;
use crate::domain::replay::{replay, HistoryRoll};
use crate::domain::state::TurnState;
use crate::domain::test_lane::Lane;

fn roll(player_id: i64, frame: u8, roll_index: u8, pins: u8) -> HistoryRoll {
    HistoryRoll {
        player_id,
        frame,
        roll_index,
        pin_count: PinCount::new(pins).unwrap(),
    }
}

#[test]
fn empty_history_is_initial_state() {
    assert_eq!(replay(&[1, 2], &[]).unwrap(), TurnState::initial());
}

#[test]
fn replay_matches_lane() {
    let mut lane = Lane::new(3);
    for raw in [10, 3, 4, 7, 3, 9, 0, 10, 2, 8, 5, 5, 1] {
        lane.roll_current(raw).unwrap();
    }
    assert_eq!(replay(&lane.rotation, &lane.history).unwrap(), lane.state);
}

#[test]
fn out_of_order_history_is_corrupt() {
    let history = [roll(2, 1, 1, 3)];
    assert!(replay(&[1, 2], &history)
        .unwrap_err()
        .is_invariant_violation());
}

#[test]
fn repeated_position_is_corrupt() {
    let history = [roll(1, 1, 1, 3), roll(1, 1, 1, 3)];
    assert!(replay(&[1], &history).unwrap_err().is_invariant_violation());
}

#[test]
fn overfull_frame_is_corrupt() {
    let history = [roll(1, 1, 1, 7), roll(1, 1, 2, 7)];
    assert!(replay(&[1], &history).unwrap_err().is_invariant_violation());
}

#[test]
fn roll_after_strike_in_same_frame_is_corrupt() {
    let history = [roll(1, 1, 1, 10), roll(1, 1, 2, 0)];
    assert!(replay(&[1], &history).unwrap_err().is_invariant_violation());
}
