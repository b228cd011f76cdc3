//! Admission rules for a roll submission.
//!
//! `admit` decides whether a submission may be recorded and where; the caller
//! persists it and then calls `resolve_turn` with the participant's rolls for
//! the frame (existing plus the new one).

use crate::domain::frame_completion::{evaluate, pins_standing};
use crate::domain::pins::PinCount;
use crate::domain::rules::FrameKind;
use crate::domain::state::{GameStatus, RollPosition, TurnState};
use crate::domain::turn_mutator::advance;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// A participant's claim to the next roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSubmission {
    pub participant_id: i64,
    pub pin_count: PinCount,
    /// Position the caller believes it is filling, if it names one.
    pub expected_position: Option<RollPosition>,
}

/// What the gate needs to know about the game at submission time.
#[derive(Debug, Clone, Copy)]
pub struct GateView<'a> {
    pub state: TurnState,
    /// Player ids in turn order.
    pub rotation: &'a [i64],
    /// Rolls already stored for the current participant in the current frame, oldest first.
    pub current_frame_rolls: &'a [PinCount],
    /// The store already holds a roll for the submitter at `expected_position`.
    pub named_position_recorded: bool,
}

/// Check a submission against the game's turn state.
///
/// Returns the position the roll is recorded at.
pub fn admit(view: &GateView<'_>, submission: &RollSubmission) -> Result<RollPosition, DomainError> {
    let state = view.state;

    if let Some(named) = submission.expected_position {
        if view.named_position_recorded {
            return Err(duplicate(named));
        }
    }

    if state.status == GameStatus::Done {
        return Err(DomainError::validation(
            ValidationKind::GameAlreadyCompleted,
            "Game is already completed",
        ));
    }

    if !view.rotation.contains(&submission.participant_id) {
        return Err(DomainError::not_found(
            NotFoundKind::Participant,
            format!(
                "Player {} is not a participant in this game",
                submission.participant_id
            ),
        ));
    }

    let index = usize::from(state.current_participant_index);
    let current = view.rotation.get(index).copied().ok_or_else(|| {
        DomainError::invariant(format!(
            "participant index {index} outside rotation of {}",
            view.rotation.len()
        ))
    })?;
    if submission.participant_id != current {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("It is player {current}'s turn"),
        ));
    }

    let position = RollPosition {
        frame: state.current_frame,
        roll: state.current_roll,
    };
    if let Some(named) = submission.expected_position {
        if named != position {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!(
                    "Expected frame {} roll {}, got frame {} roll {}",
                    position.frame, position.roll, named.frame, named.roll
                ),
            ));
        }
    }

    let recorded = view.current_frame_rolls.len();
    let roll = usize::from(state.current_roll);
    if recorded >= roll {
        return Err(duplicate(position));
    }
    if recorded + 1 < roll {
        return Err(DomainError::invariant(format!(
            "frame {} is at roll {roll} but only {recorded} rolls are recorded",
            position.frame
        )));
    }

    let kind = FrameKind::of(position.frame).ok_or_else(|| {
        DomainError::invariant(format!("active game is in frame {}", position.frame))
    })?;
    if recorded >= usize::from(kind.max_rolls()) {
        return Err(DomainError::invariant(format!(
            "frame {} already has {recorded} rolls",
            position.frame
        )));
    }

    let standing = pins_standing(view.current_frame_rolls);
    if submission.pin_count.value() > standing {
        return Err(DomainError::validation(
            ValidationKind::InvalidPinCount,
            format!(
                "Only {standing} pins are standing, got {}",
                submission.pin_count.value()
            ),
        ));
    }

    Ok(position)
}

/// Next TurnState once the roll is recorded. `frame_rolls` includes the new roll.
pub fn resolve_turn(
    state: TurnState,
    rotation_size: usize,
    frame_rolls: &[PinCount],
) -> Result<TurnState, DomainError> {
    let progress = evaluate(state.current_frame, frame_rolls)?;
    advance(state, rotation_size, progress)
}

fn duplicate(position: RollPosition) -> DomainError {
    DomainError::conflict(
        ConflictKind::DuplicateRoll,
        format!(
            "Roll {} of frame {} is already recorded",
            position.roll, position.frame
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: i64 = 101;
    const B: i64 = 202;

    fn pins(v: &[u8]) -> Vec<PinCount> {
        v.iter().map(|&x| PinCount::new(x).unwrap()).collect()
    }

    fn state(frame: u8, roll: u8, idx: u8) -> TurnState {
        TurnState {
            current_frame: frame,
            current_roll: roll,
            current_participant_index: idx,
            status: GameStatus::Active,
        }
    }

    fn submit(player: i64, pins: u8) -> RollSubmission {
        RollSubmission {
            participant_id: player,
            pin_count: PinCount::new(pins).unwrap(),
            expected_position: None,
        }
    }

    #[test]
    fn admits_current_participant() {
        let rotation = [A, B];
        let view = GateView {
            state: state(1, 1, 0),
            rotation: &rotation,
            current_frame_rolls: &[],
            named_position_recorded: false,
        };
        let pos = admit(&view, &submit(A, 7)).unwrap();
        assert_eq!(pos, RollPosition { frame: 1, roll: 1 });
    }

    #[test]
    fn rejects_other_participant() {
        let rotation = [A, B];
        let view = GateView {
            state: state(1, 1, 0),
            rotation: &rotation,
            current_frame_rolls: &[],
            named_position_recorded: false,
        };
        let err = admit(&view, &submit(B, 7)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ValidationKind::OutOfTurn, _)));
    }

    #[test]
    fn rejects_non_participant() {
        let rotation = [A];
        let view = GateView {
            state: state(1, 1, 0),
            rotation: &rotation,
            current_frame_rolls: &[],
            named_position_recorded: false,
        };
        let err = admit(&view, &submit(999, 1)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(NotFoundKind::Participant, _)));
    }

    #[test]
    fn rejects_wrong_named_position() {
        let rotation = [A];
        let view = GateView {
            state: state(2, 1, 0),
            rotation: &rotation,
            current_frame_rolls: &[],
            named_position_recorded: false,
        };
        let mut sub = submit(A, 3);
        sub.expected_position = Some(RollPosition { frame: 3, roll: 1 });
        let err = admit(&view, &sub).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ValidationKind::OutOfTurn, _)));
    }

    #[test]
    fn duplicate_named_position_wins_over_completion() {
        let rotation = [A];
        let done = TurnState {
            current_frame: 11,
            current_roll: 1,
            current_participant_index: 0,
            status: GameStatus::Done,
        };
        let view = GateView {
            state: done,
            rotation: &rotation,
            current_frame_rolls: &[],
            named_position_recorded: true,
        };
        let mut sub = submit(A, 10);
        sub.expected_position = Some(RollPosition { frame: 10, roll: 3 });
        let err = admit(&view, &sub).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(ConflictKind::DuplicateRoll, _)));

        let view = GateView {
            named_position_recorded: false,
            ..view
        };
        let err = admit(&view, &submit(A, 10)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::GameAlreadyCompleted, _)
        ));
    }

    #[test]
    fn store_ahead_of_state_is_duplicate() {
        let rotation = [A];
        let recorded = pins(&[3]);
        let view = GateView {
            state: state(1, 1, 0),
            rotation: &rotation,
            current_frame_rolls: &recorded,
            named_position_recorded: false,
        };
        let err = admit(&view, &submit(A, 3)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(ConflictKind::DuplicateRoll, _)));
    }

    #[test]
    fn store_behind_state_is_corruption() {
        let rotation = [A];
        let view = GateView {
            state: state(1, 2, 0),
            rotation: &rotation,
            current_frame_rolls: &[],
            named_position_recorded: false,
        };
        assert!(admit(&view, &submit(A, 3))
            .unwrap_err()
            .is_invariant_violation());
    }

    #[test]
    fn second_roll_limited_by_standing_pins() {
        let rotation = [A];
        let first = pins(&[6]);
        let view = GateView {
            state: state(4, 2, 0),
            rotation: &rotation,
            current_frame_rolls: &first,
            named_position_recorded: false,
        };
        assert!(admit(&view, &submit(A, 4)).is_ok());
        let err = admit(&view, &submit(A, 5)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidPinCount, _)
        ));
    }

    #[test]
    fn final_frame_rack_resets_after_strike_or_spare() {
        let rotation = [A];

        let strike = pins(&[10]);
        let view = GateView {
            state: state(10, 2, 0),
            rotation: &rotation,
            current_frame_rolls: &strike,
            named_position_recorded: false,
        };
        assert!(admit(&view, &submit(A, 10)).is_ok());

        let spare = pins(&[4, 6]);
        let view = GateView {
            state: state(10, 3, 0),
            rotation: &rotation,
            current_frame_rolls: &spare,
            named_position_recorded: false,
        };
        assert!(admit(&view, &submit(A, 10)).is_ok());

        let partial = pins(&[10, 3]);
        let view = GateView {
            state: state(10, 3, 0),
            rotation: &rotation,
            current_frame_rolls: &partial,
            named_position_recorded: false,
        };
        assert!(admit(&view, &submit(A, 7)).is_ok());
        assert!(matches!(
            admit(&view, &submit(A, 8)).unwrap_err(),
            DomainError::Validation(ValidationKind::InvalidPinCount, _)
        ));
    }

    #[test]
    fn resolve_turn_runs_evaluator_then_mutator() {
        let next = resolve_turn(state(1, 1, 0), 2, &pins(&[10])).unwrap();
        assert_eq!(next, state(1, 1, 1));

        let next = resolve_turn(state(1, 1, 1), 2, &pins(&[4])).unwrap();
        assert_eq!(next, state(1, 2, 1));

        let next = resolve_turn(state(1, 2, 1), 2, &pins(&[4, 5])).unwrap();
        assert_eq!(next, state(2, 1, 0));
    }
}
