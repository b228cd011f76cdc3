//! Player service: create and look up players.

use sea_orm::ConnectionTrait;
use tracing::info;

use super::normalize_name;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::players::{self, Player};

#[derive(Default)]
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Create a player. The name is trimmed and must be 1..=64 characters.
    pub async fn create_player<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Player, DomainError> {
        let name = normalize_name(name).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayerName,
                "Player name must be between 1 and 64 characters",
            )
        })?;
        let player = players::create_player(conn, &name).await?;
        info!(player_id = player.id, "Player created");
        Ok(player)
    }

    pub async fn get_player<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
    ) -> Result<Player, DomainError> {
        players::require_player(conn, player_id).await
    }
}
