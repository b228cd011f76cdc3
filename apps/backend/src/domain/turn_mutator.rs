//! Computes the next TurnState after an accepted roll.

use crate::domain::frame_completion::FrameProgress;
use crate::domain::rules::{FrameKind, FRAMES};
use crate::domain::state::{GameStatus, TurnState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Advance `state` for a rotation of `rotation_size` participants.
pub fn advance(
    state: TurnState,
    rotation_size: usize,
    progress: FrameProgress,
) -> Result<TurnState, DomainError> {
    if rotation_size == 0 || rotation_size > usize::from(u8::MAX) {
        return Err(DomainError::invariant(format!(
            "rotation of {rotation_size} participants"
        )));
    }
    let index = usize::from(state.current_participant_index);
    if state.status == GameStatus::Active && index >= rotation_size {
        return Err(DomainError::invariant(format!(
            "participant index {index} outside rotation of {rotation_size}"
        )));
    }

    let kind = FrameKind::of(state.current_frame);

    match (state.status, progress, kind, state.current_roll) {
        (GameStatus::Done, _, _, _) => Err(DomainError::validation(
            ValidationKind::GameAlreadyCompleted,
            "Game is already completed",
        )),
        (GameStatus::Active, _, None, _) => Err(DomainError::invariant(format!(
            "active game is in frame {}",
            state.current_frame
        ))),
        (GameStatus::Active, FrameProgress::Complete, Some(_), _) => {
            Ok(rotate(state, index, rotation_size))
        }
        (GameStatus::Active, FrameProgress::Continue, Some(FrameKind::Normal), 1) => {
            Ok(TurnState {
                current_roll: 2,
                ..state
            })
        }
        (GameStatus::Active, FrameProgress::Continue, Some(FrameKind::Normal), roll) => {
            Err(DomainError::invariant(format!(
                "turn continues past roll {roll} of frame {}",
                state.current_frame
            )))
        }
        (GameStatus::Active, FrameProgress::Continue, Some(FrameKind::Final), roll @ (1 | 2)) => {
            Ok(TurnState {
                current_roll: roll + 1,
                ..state
            })
        }
        (GameStatus::Active, FrameProgress::Continue, Some(FrameKind::Final), roll) => {
            Err(DomainError::invariant(format!(
                "turn continues past roll {roll} of the final frame"
            )))
        }
    }
}

fn rotate(state: TurnState, index: usize, rotation_size: usize) -> TurnState {
    let last_in_rotation = index + 1 == rotation_size;
    let current_frame = if last_in_rotation {
        state.current_frame + 1
    } else {
        state.current_frame
    };
    let status = if current_frame > FRAMES {
        GameStatus::Done
    } else {
        GameStatus::Active
    };

    TurnState {
        current_frame,
        current_roll: 1,
        current_participant_index: ((index + 1) % rotation_size) as u8,
        status,
    }
}
