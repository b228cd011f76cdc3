//! SeaORM adapter for game participants - generic over ConnectionTrait.
//!
//! A game's rotation is its participants ordered by `turn_order`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{game_participants, players};

pub mod dto;

pub use dto::ParticipantCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ParticipantCreate,
) -> Result<game_participants::Model, sea_orm::DbErr> {
    let participant_active = game_participants::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        turn_order: Set(dto.turn_order),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    participant_active.insert(conn).await
}

/// Participants of a game in turn order, each paired with its player row.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<(game_participants::Model, Option<players::Model>)>, sea_orm::DbErr> {
    game_participants::Entity::find()
        .filter(game_participants::Column::GameId.eq(game_id))
        .order_by_asc(game_participants::Column::TurnOrder)
        .find_also_related(players::Entity)
        .all(conn)
        .await
}

/// Player ids of a game's rotation, in turn order.
pub async fn rotation_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let rows = game_participants::Entity::find()
        .filter(game_participants::Column::GameId.eq(game_id))
        .order_by_asc(game_participants::Column::TurnOrder)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|p| p.player_id).collect())
}
