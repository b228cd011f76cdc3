use serde::{Deserialize, Serialize};

use crate::domain::rules::FRAMES;

/// Lifecycle of a game's turn progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Done,
}

/// Position of the game in its turn sequence. One per game.
///
/// `current_frame == 11` only ever appears together with `status == Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// 1..=10 while active, 11 once done.
    pub current_frame: u8,
    /// 1-based roll index of the current participant within the frame.
    pub current_roll: u8,
    /// 0-based index into the rotation.
    pub current_participant_index: u8,
    pub status: GameStatus,
}

impl TurnState {
    /// State of a freshly started game.
    pub fn initial() -> Self {
        Self {
            current_frame: 1,
            current_roll: 1,
            current_participant_index: 0,
            status: GameStatus::Active,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == GameStatus::Done
    }

    /// The position the next accepted roll will fill, if the game is still active.
    pub fn next_position(&self) -> Option<RollPosition> {
        match self.status {
            GameStatus::Active => Some(RollPosition {
                frame: self.current_frame,
                roll: self.current_roll,
            }),
            GameStatus::Done => None,
        }
    }

    /// Frame/status pairing holds: active within 1..=10, done exactly past the last frame.
    pub fn is_consistent(&self) -> bool {
        match self.status {
            GameStatus::Active => (1..=FRAMES).contains(&self.current_frame),
            GameStatus::Done => self.current_frame == FRAMES + 1,
        }
    }
}

/// A (frame, roll index) slot for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollPosition {
    pub frame: u8,
    pub roll: u8,
}
