//! In-memory stand-in for the roll store, driving the gate exactly as the
//! game flow service does: admit, record, resolve.

use crate::domain::frame_completion::pins_standing;
use crate::domain::pins::PinCount;
use crate::domain::replay::HistoryRoll;
use crate::domain::roll_gate::{admit, resolve_turn, GateView, RollSubmission};
use crate::domain::state::{RollPosition, TurnState};
use crate::errors::domain::DomainError;

pub struct Lane {
    pub state: TurnState,
    pub rotation: Vec<i64>,
    pub history: Vec<HistoryRoll>,
}

impl Lane {
    /// Players get ids 1..=n in turn order.
    pub fn new(players: usize) -> Self {
        let players = i64::try_from(players).expect("player count fits in i64");
        Self {
            state: TurnState::initial(),
            rotation: (1..=players).collect(),
            history: Vec::new(),
        }
    }

    pub fn frame_rolls(&self, player: i64, frame: u8) -> Vec<PinCount> {
        self.history
            .iter()
            .filter(|r| r.player_id == player && r.frame == frame)
            .map(|r| r.pin_count)
            .collect()
    }

    pub fn current_player(&self) -> i64 {
        self.rotation[usize::from(self.state.current_participant_index)]
    }

    pub fn submit_at(
        &mut self,
        player: i64,
        pins: u8,
        expected: Option<RollPosition>,
    ) -> Result<TurnState, DomainError> {
        let pin_count = PinCount::new(pins)?;
        let named_position_recorded = expected.is_some_and(|pos| {
            self.history.iter().any(|r| {
                r.player_id == player && r.frame == pos.frame && r.roll_index == pos.roll
            })
        });
        let current = self.rotation
            [usize::from(self.state.current_participant_index) % self.rotation.len()];
        let existing = self.frame_rolls(current, self.state.current_frame);

        let view = GateView {
            state: self.state,
            rotation: &self.rotation,
            current_frame_rolls: &existing,
            named_position_recorded,
        };
        let submission = RollSubmission {
            participant_id: player,
            pin_count,
            expected_position: expected,
        };
        let position = admit(&view, &submission)?;

        self.history.push(HistoryRoll {
            player_id: player,
            frame: position.frame,
            roll_index: position.roll,
            pin_count,
        });
        let rolls = self.frame_rolls(player, position.frame);
        self.state = resolve_turn(self.state, self.rotation.len(), &rolls)?;
        Ok(self.state)
    }

    pub fn submit(&mut self, player: i64, pins: u8) -> Result<TurnState, DomainError> {
        self.submit_at(player, pins, None)
    }

    /// Roll for whoever is up, folding `raw` into the pins standing.
    pub fn roll_current(&mut self, raw: u8) -> Result<TurnState, DomainError> {
        let player = self.current_player();
        let standing = pins_standing(&self.frame_rolls(player, self.state.current_frame));
        self.submit(player, raw % (standing + 1))
    }
}
