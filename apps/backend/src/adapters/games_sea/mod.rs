//! SeaORM adapter for games - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameTurnUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or fail with a structured `GAME_NOT_FOUND:{id}` error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{game_id}")))
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let count = games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        status: Set(games::GameStatus::Active),
        current_frame: Set(1),
        current_roll: Set(1),
        current_participant_index: Set(0),
        lock_version: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
        ended_at: Set(None),
    };

    game_active.insert(conn).await
}

/// Write the turn columns if `lock_version` still matches, bumping it by one.
///
/// Zero rows affected means either the game is gone (`GAME_NOT_FOUND:{id}`) or
/// someone else wrote first (`OPTIMISTIC_LOCK:{json}`).
pub async fn update_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameTurnUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let ended_at = match dto.status {
        games::GameStatus::Done => Some(now),
        games::GameStatus::Active => None,
    };

    let result = games::Entity::update_many()
        .col_expr(games::Column::CurrentFrame, Expr::val(dto.current_frame).into())
        .col_expr(games::Column::CurrentRoll, Expr::val(dto.current_roll).into())
        .col_expr(
            games::Column::CurrentParticipantIndex,
            Expr::val(dto.current_participant_index).into(),
        )
        .col_expr(games::Column::Status, Expr::val(dto.status).into())
        .col_expr(games::Column::EndedAt, Expr::val(ended_at).into())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(dto.id))
        .filter(games::Column::LockVersion.eq(dto.expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_by_id(conn, dto.id).await? {
            Some(game) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                dto.expected_version, game.lock_version
            ))),
            None => Err(sea_orm::DbErr::Custom(format!("GAME_NOT_FOUND:{}", dto.id))),
        };
    }

    require_game(conn, dto.id).await
}
