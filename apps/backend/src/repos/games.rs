//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::domain::state::{GameStatus, TurnState};
use crate::entities::games;
use crate::errors::domain::DomainError;

/// Game domain model
///
/// Carries the persisted TurnState plus the bookkeeping columns the HTTP
/// layer needs (`lock_version` for ETags, timestamps for the view).
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub turn: TurnState,
    pub lock_version: i32,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
    pub ended_at: Option<time::OffsetDateTime>,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    match games_adapter::find_by_id(conn, game_id).await? {
        Some(model) => Ok(Some(Game::try_from(model)?)),
        None => Ok(None),
    }
}

/// Find game by ID or return `NotFound(Game)`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let model = games_adapter::require_game(conn, game_id).await?;
    Game::try_from(model)
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<bool, DomainError> {
    Ok(games_adapter::exists(conn, game_id).await?)
}

/// Insert a game at the initial TurnState.
pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Game, DomainError> {
    let model = games_adapter::create_game(conn, games_adapter::GameCreate::new(name)).await?;
    Game::try_from(model)
}

/// Persist a new TurnState with optimistic locking.
///
/// `expected_lock_version` must match the stored version; the write bumps it by one.
pub async fn save_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    expected_lock_version: i32,
    turn: TurnState,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameTurnUpdate::new(game_id, expected_lock_version)
        .with_frame(i16::from(turn.current_frame))
        .with_roll(i16::from(turn.current_roll))
        .with_participant_index(i16::from(turn.current_participant_index))
        .with_status(status_to_db(turn.status));
    let model = games_adapter::update_turn(conn, dto).await?;
    Game::try_from(model)
}

fn status_to_db(status: GameStatus) -> games::GameStatus {
    match status {
        GameStatus::Active => games::GameStatus::Active,
        GameStatus::Done => games::GameStatus::Done,
    }
}

fn status_from_db(status: games::GameStatus) -> GameStatus {
    match status {
        games::GameStatus::Active => GameStatus::Active,
        games::GameStatus::Done => GameStatus::Done,
    }
}

fn small_to_u8(column: &str, game_id: i64, value: i16) -> Result<u8, DomainError> {
    u8::try_from(value).map_err(|_| {
        DomainError::invariant(format!("game {game_id} has {column} = {value}"))
    })
}

// Conversions between SeaORM models and domain models

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, Self::Error> {
        let turn = TurnState {
            current_frame: small_to_u8("current_frame", model.id, model.current_frame)?,
            current_roll: small_to_u8("current_roll", model.id, model.current_roll)?,
            current_participant_index: small_to_u8(
                "current_participant_index",
                model.id,
                model.current_participant_index,
            )?,
            status: status_from_db(model.status),
        };
        if !turn.is_consistent() {
            return Err(DomainError::invariant(format!(
                "game {} is {:?} in frame {}",
                model.id, turn.status, turn.current_frame
            )));
        }

        Ok(Self {
            id: model.id,
            name: model.name,
            turn,
            lock_version: model.lock_version,
            created_at: model.created_at,
            updated_at: model.updated_at,
            ended_at: model.ended_at,
        })
    }
}
