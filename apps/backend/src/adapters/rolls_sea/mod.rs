//! SeaORM adapter for the roll history - generic over ConnectionTrait.
//!
//! Rolls are append-only. The unique index on
//! `(game_id, player_id, frame, roll_index)` backs duplicate detection.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::rolls;

pub mod dto;

pub use dto::RollCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_roll<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RollCreate,
) -> Result<rolls::Model, sea_orm::DbErr> {
    let roll_active = rolls::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        player_id: Set(dto.player_id),
        frame: Set(dto.frame),
        roll_index: Set(dto.roll_index),
        pin_count: Set(dto.pin_count),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    roll_active.insert(conn).await
}

/// Rolls one participant has in one frame, in roll order.
pub async fn find_for_frame<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
    frame: i16,
) -> Result<Vec<rolls::Model>, sea_orm::DbErr> {
    rolls::Entity::find()
        .filter(rolls::Column::GameId.eq(game_id))
        .filter(rolls::Column::PlayerId.eq(player_id))
        .filter(rolls::Column::Frame.eq(frame))
        .order_by_asc(rolls::Column::RollIndex)
        .all(conn)
        .await
}

pub async fn exists_at<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_id: i64,
    frame: i16,
    roll_index: i16,
) -> Result<bool, sea_orm::DbErr> {
    let count = rolls::Entity::find()
        .filter(rolls::Column::GameId.eq(game_id))
        .filter(rolls::Column::PlayerId.eq(player_id))
        .filter(rolls::Column::Frame.eq(frame))
        .filter(rolls::Column::RollIndex.eq(roll_index))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Full history of a game in the order rolls were accepted.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<rolls::Model>, sea_orm::DbErr> {
    rolls::Entity::find()
        .filter(rolls::Column::GameId.eq(game_id))
        .order_by_asc(rolls::Column::Id)
        .all(conn)
        .await
}
