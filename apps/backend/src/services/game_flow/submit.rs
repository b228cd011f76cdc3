use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::pins::PinCount;
use crate::domain::roll_gate::{admit, resolve_turn, GateView, RollSubmission};
use crate::domain::state::{RollPosition, TurnState};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::games::{self, Game};
use crate::repos::rolls::{self, Roll};
use crate::repos::participants;

/// A roll as the transport layer hands it over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    pub game_id: i64,
    pub player_id: i64,
    pub pin_count: PinCount,
    /// Position the caller believes it is filling.
    pub expected_position: Option<RollPosition>,
    /// Lock version from the caller's `If-Match`, if sent.
    pub expected_lock_version: Option<i32>,
}

/// Result of an accepted roll.
#[derive(Debug, Clone, PartialEq)]
pub struct RollOutcome {
    pub roll: Roll,
    pub game: Game,
}

impl RollOutcome {
    pub fn turn(&self) -> TurnState {
        self.game.turn
    }
}

impl GameFlowService {
    /// Admit, record and resolve one roll.
    ///
    /// Rejections leave the store untouched; the caller's transaction is
    /// rolled back on any error after the insert.
    pub async fn submit_roll<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        request: RollRequest,
    ) -> Result<RollOutcome, DomainError> {
        let RollRequest {
            game_id,
            player_id,
            pin_count,
            expected_position,
            expected_lock_version,
        } = request;

        let game = games::require_game(conn, game_id).await?;

        if let Some(expected) = expected_lock_version {
            if expected != game.lock_version {
                debug!(game_id, expected, actual = game.lock_version, "Stale If-Match on roll");
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game was modified concurrently (expected version {expected}, actual version {}). Please refresh and retry.",
                        game.lock_version
                    ),
                ));
            }
        }

        let rotation = participants::rotation(conn, game_id).await?;
        if rotation.is_empty() {
            return Err(DomainError::invariant(format!(
                "game {game_id} has no participants"
            )));
        }

        let named_position_recorded = match expected_position {
            Some(position) => rolls::is_recorded(conn, game_id, player_id, position).await?,
            None => false,
        };

        let state = game.turn;
        let current_frame_rolls = match rotation.get(usize::from(state.current_participant_index)) {
            Some(current) if !state.is_done() => {
                rolls::frame_pins(conn, game_id, *current, state.current_frame).await?
            }
            _ => Vec::new(),
        };

        let view = GateView {
            state,
            rotation: &rotation,
            current_frame_rolls: &current_frame_rolls,
            named_position_recorded,
        };
        let submission = RollSubmission {
            participant_id: player_id,
            pin_count,
            expected_position,
        };

        let position = admit(&view, &submission).map_err(|e| {
            debug!(game_id, player_id, pins = pin_count.value(), error = %e, "Roll rejected");
            e
        })?;

        let roll = rolls::record_roll(conn, game_id, player_id, position, pin_count).await?;

        let mut frame_rolls = current_frame_rolls;
        frame_rolls.push(pin_count);
        let next = resolve_turn(state, rotation.len(), &frame_rolls)?;

        let updated = games::save_turn(conn, game_id, game.lock_version, next).await?;

        info!(
            game_id,
            player_id,
            frame = position.frame,
            roll = position.roll,
            pins = pin_count.value(),
            next_frame = next.current_frame,
            next_roll = next.current_roll,
            next_participant_index = next.current_participant_index,
            done = next.is_done(),
            "Roll accepted"
        );

        Ok(RollOutcome {
            roll,
            game: updated,
        })
    }
}
