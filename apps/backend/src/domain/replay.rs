//! Rebuild a game's TurnState from its roll history.

use std::collections::HashMap;

use crate::domain::pins::PinCount;
use crate::domain::roll_gate::{admit, resolve_turn, GateView, RollSubmission};
use crate::domain::state::{RollPosition, TurnState};
use crate::errors::domain::DomainError;

/// One recorded roll, as the history stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRoll {
    pub player_id: i64,
    pub frame: u8,
    pub roll_index: u8,
    pub pin_count: PinCount,
}

/// Replay `history` (in insertion order) through the gate from the initial state.
///
/// Any record the gate would have refused means the history is corrupt.
pub fn replay(rotation: &[i64], history: &[HistoryRoll]) -> Result<TurnState, DomainError> {
    let mut state = TurnState::initial();
    let mut frames: HashMap<(i64, u8), Vec<PinCount>> = HashMap::new();

    for (n, record) in history.iter().enumerate() {
        let rolls = frames.entry((record.player_id, record.frame)).or_default();
        let submission = RollSubmission {
            participant_id: record.player_id,
            pin_count: record.pin_count,
            expected_position: Some(RollPosition {
                frame: record.frame,
                roll: record.roll_index,
            }),
        };
        let view = GateView {
            state,
            rotation,
            current_frame_rolls: rolls.as_slice(),
            named_position_recorded: rolls.len() >= usize::from(record.roll_index),
        };

        admit(&view, &submission).map_err(|e| {
            DomainError::invariant(format!(
                "history entry {n} (player {} frame {} roll {}) was not admissible: {e}",
                record.player_id, record.frame, record.roll_index
            ))
        })?;

        rolls.push(record.pin_count);
        state = resolve_turn(state, rotation.len(), rolls.as_slice())?;
    }

    Ok(state)
}
