//! Game flow service - runs the roll gate against persisted state.
//!
//! Callers hold the game's `GameLocks` entry and an open transaction; this
//! service reads the TurnState, admits the roll, appends it and writes the
//! next TurnState under the optimistic lock.

mod submit;
mod verify;

pub use submit::{RollOutcome, RollRequest};

/// Game flow service - generic over ConnectionTrait for transaction support.
#[derive(Default)]
pub struct GameFlowService;

impl GameFlowService {
    pub fn new() -> Self {
        Self
    }
}
