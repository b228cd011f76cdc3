//! DTOs for games_sea adapter.

use crate::entities::games::GameStatus;

/// DTO for creating a new game; the turn columns start at their initial values.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub name: String,
}

impl GameCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Turn-state write with optimistic locking.
///
/// `expected_version` must match the row's current `lock_version`.
#[derive(Debug, Clone)]
pub struct GameTurnUpdate {
    pub id: i64,
    pub current_frame: i16,
    pub current_roll: i16,
    pub current_participant_index: i16,
    pub status: GameStatus,
    pub expected_version: i32,
}

impl GameTurnUpdate {
    pub fn new(id: i64, expected_version: i32) -> Self {
        Self {
            id,
            current_frame: 1,
            current_roll: 1,
            current_participant_index: 0,
            status: GameStatus::Active,
            expected_version,
        }
    }

    pub fn with_frame(mut self, frame: i16) -> Self {
        self.current_frame = frame;
        self
    }

    pub fn with_roll(mut self, roll: i16) -> Self {
        self.current_roll = roll;
        self
    }

    pub fn with_participant_index(mut self, index: i16) -> Self {
        self.current_participant_index = index;
        self
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }
}
