//! Player repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: time::OffsetDateTime,
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Player, DomainError> {
    let model = players_adapter::create_player(conn, name).await?;
    Ok(Player::from(model))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let model = players_adapter::find_by_id(conn, player_id).await?;
    Ok(model.map(Player::from))
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    find_by_id(conn, player_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
    })
}

/// Load every id in `player_ids`, preserving order; the first missing id fails.
pub async fn require_many<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<Player>, DomainError> {
    let found = players_adapter::find_many(conn, player_ids).await?;
    player_ids
        .iter()
        .map(|id| {
            found
                .iter()
                .find(|p| p.id == *id)
                .cloned()
                .map(Player::from)
                .ok_or_else(|| {
                    DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
                })
        })
        .collect()
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}
