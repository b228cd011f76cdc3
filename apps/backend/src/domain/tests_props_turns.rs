//! Property tests for turn progression (pure domain, no DB).
//!
//! Games are played to completion from generated pin counts that are always
//! legal, then the recorded history and visited states are checked.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::replay::replay;
use crate::domain::state::{GameStatus, RollPosition, TurnState};
use crate::domain::test_gens;
use crate::domain::test_lane::Lane;
use crate::domain::test_prelude;
use crate::errors::domain::{ConflictKind, DomainError};

/// Play a full game; returns the lane and the state observed before each roll.
fn play(players: usize, raws: &[u8]) -> (Lane, Vec<TurnState>) {
    let mut lane = Lane::new(players);
    let mut visited = Vec::new();
    for &raw in raws {
        if lane.state.is_done() {
            break;
        }
        visited.push(lane.state);
        lane.roll_current(raw).unwrap();
    }
    (lane, visited)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every generated game terminates within the supplied rolls.
    #[test]
    fn prop_games_finish((players, raws) in test_gens::game_plan()) {
        let (lane, _) = play(players, &raws);
        prop_assert!(lane.state.is_done());
        prop_assert_eq!(lane.state.current_frame, 11);
        prop_assert_eq!(lane.state.current_participant_index, 0);
    }

    /// Per participant: at most 2 rolls in frames 1..=9, at most 3 in frame 10.
    #[test]
    fn prop_roll_counts_bounded((players, raws) in test_gens::game_plan()) {
        let (lane, _) = play(players, &raws);
        let mut counts: HashMap<(i64, u8), usize> = HashMap::new();
        for r in &lane.history {
            *counts.entry((r.player_id, r.frame)).or_default() += 1;
        }
        for ((player, frame), n) in counts {
            let max = if frame == 10 { 3 } else { 2 };
            prop_assert!(n >= 1 && n <= max, "player {player} frame {frame} has {n} rolls");
        }
        // every participant bowled every frame
        for player in &lane.rotation {
            for frame in 1..=10u8 {
                prop_assert!(!lane.frame_rolls(*player, frame).is_empty());
            }
        }
    }

    /// Frames never go backwards and the game flips to done exactly once.
    #[test]
    fn prop_frame_monotonic_and_done_once((players, raws) in test_gens::game_plan()) {
        let (lane, mut visited) = play(players, &raws);
        visited.push(lane.state);

        for pair in visited.windows(2) {
            prop_assert!(pair[1].current_frame >= pair[0].current_frame);
        }
        let done_transitions = visited
            .windows(2)
            .filter(|w| w[0].status == GameStatus::Active && w[1].status == GameStatus::Done)
            .count();
        prop_assert_eq!(done_transitions, 1);
        prop_assert!(visited.iter().all(|s| s.is_consistent()));
        prop_assert!(visited[..visited.len() - 1].iter().all(|s| !s.is_done()));
    }

    /// Within a frame the participant index runs 0..N-1 exactly once, in order.
    #[test]
    fn prop_one_rotation_per_frame((players, raws) in test_gens::game_plan()) {
        let (_, visited) = play(players, &raws);
        let mut per_frame: HashMap<u8, Vec<u8>> = HashMap::new();
        for s in &visited {
            let seq = per_frame.entry(s.current_frame).or_default();
            if seq.last() != Some(&s.current_participant_index) {
                seq.push(s.current_participant_index);
            }
        }
        let expected: Vec<u8> = (0..players as u8).collect();
        for frame in 1..=10u8 {
            prop_assert_eq!(per_frame.get(&frame), Some(&expected), "frame {}", frame);
        }
    }

    /// Resubmitting any recorded position is a DuplicateRoll and changes nothing.
    #[test]
    fn prop_resubmission_is_duplicate(
        (players, raws) in test_gens::game_plan(),
        pick in any::<prop::sample::Index>(),
        stop in any::<prop::sample::Index>(),
    ) {
        let (full, _) = play(players, &raws);
        let cut = stop.index(full.history.len()) + 1;

        let mut lane = Lane::new(players);
        for r in &full.history[..cut] {
            lane.submit(r.player_id, r.pin_count.value()).unwrap();
        }
        let before_state = lane.state;
        let before_len = lane.history.len();

        let target = lane.history[pick.index(before_len)];
        let err = lane
            .submit_at(
                target.player_id,
                target.pin_count.value(),
                Some(RollPosition { frame: target.frame, roll: target.roll_index }),
            )
            .unwrap_err();

        prop_assert!(matches!(err, DomainError::Conflict(ConflictKind::DuplicateRoll, _)));
        prop_assert_eq!(lane.state, before_state);
        prop_assert_eq!(lane.history.len(), before_len);
    }

    /// Replaying the recorded history reproduces the live state at every prefix.
    #[test]
    fn prop_replay_matches_live_state(
        (players, raws) in test_gens::game_plan(),
        stop in any::<prop::sample::Index>(),
    ) {
        let (full, _) = play(players, &raws);
        let cut = stop.index(full.history.len() + 1);

        let mut lane = Lane::new(players);
        for r in &full.history[..cut] {
            lane.submit(r.player_id, r.pin_count.value()).unwrap();
        }
        prop_assert_eq!(replay(&lane.rotation, &lane.history).unwrap(), lane.state);
    }
}
