use sea_orm::ConnectionTrait;
use tracing::error;

use super::GameFlowService;
use crate::domain::replay::{replay, HistoryRoll};
use crate::domain::state::TurnState;
use crate::errors::domain::DomainError;
use crate::repos::{games, participants, rolls};

impl GameFlowService {
    /// Replay the game's roll history and check it reproduces the stored TurnState.
    pub async fn verify_turn_state<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<TurnState, DomainError> {
        let game = games::require_game(conn, game_id).await?;
        let rotation = participants::rotation(conn, game_id).await?;
        let history: Vec<HistoryRoll> = rolls::history(conn, game_id)
            .await?
            .iter()
            .map(|r| r.as_history())
            .collect();

        let replayed = replay(&rotation, &history)?;
        if replayed != game.turn {
            error!(game_id, stored = ?game.turn, replayed = ?replayed, "Stored turn state disagrees with roll history");
            return Err(DomainError::invariant(format!(
                "game {game_id} stores {:?} but its history replays to {:?}",
                game.turn, replayed
            )));
        }
        Ok(replayed)
    }
}
