//! Game routes: creation, the game view, roll history and roll submission.

use actix_web::http::header::ETAG;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use super::rfc3339;
use crate::db::txn::with_txn;
use crate::domain::pins::PinCount;
use crate::domain::state::{RollPosition, TurnState};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::extractors::{GameId, PlayerId, ValidatedJson};
use crate::http::etag::{expected_version_from_if_match, game_etag, if_none_match_hits};
use crate::repos::participants::Participant;
use crate::services::game_flow::{GameFlowService, RollRequest};
use crate::services::games::{GameService, GameView, RollEntry, Roster};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
    #[serde(default)]
    pub players: Option<Vec<String>>,
    #[serde(default)]
    pub player_ids: Option<Vec<i64>>,
}

impl CreateGameRequest {
    fn roster(&mut self) -> Result<Roster, DomainError> {
        match (self.players.take(), self.player_ids.take()) {
            (Some(names), None) => Ok(Roster::NewPlayers(names)),
            (None, Some(ids)) => Ok(Roster::Existing(ids)),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidRoster,
                "Provide exactly one of 'players' or 'player_ids'",
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitRollRequest {
    pub pin_count: i64,
    #[serde(default)]
    pub frame: Option<u8>,
    #[serde(default)]
    pub roll: Option<u8>,
}

impl SubmitRollRequest {
    fn expected_position(&self) -> Result<Option<RollPosition>, DomainError> {
        match (self.frame, self.roll) {
            (Some(frame), Some(roll)) => Ok(Some(RollPosition { frame, roll })),
            (None, None) => Ok(None),
            _ => Err(DomainError::validation_other(
                "'frame' and 'roll' must be given together",
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub player_id: i64,
    pub name: String,
    pub turn_order: u8,
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            player_id: p.player_id,
            name: p.name,
            turn_order: p.turn_order,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(flatten)]
    pub turn: TurnState,
    pub current_player_id: Option<i64>,
    pub participants: Vec<ParticipantResponse>,
    pub lock_version: i32,
}

impl From<GameView> for GameResponse {
    fn from(view: GameView) -> Self {
        let current_player_id = view.current_player_id();
        let GameView { game, participants } = view;
        Self {
            id: game.id,
            name: game.name,
            created_at: rfc3339(game.created_at),
            ended_at: game.ended_at.map(rfc3339),
            turn: game.turn,
            current_player_id,
            participants: participants.into_iter().map(Into::into).collect(),
            lock_version: game.lock_version,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RollResponse {
    pub id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub frame: u8,
    pub roll: u8,
    pub pin_count: PinCount,
    pub recorded_at: String,
}

impl From<RollEntry> for RollResponse {
    fn from(entry: RollEntry) -> Self {
        let RollEntry { roll, player_name } = entry;
        Self {
            id: roll.id,
            player_id: roll.player_id,
            player_name,
            frame: roll.frame,
            roll: roll.roll_index,
            pin_count: roll.pin_count,
            recorded_at: rfc3339(roll.created_at),
        }
    }
}

/// POST /api/games
async fn create_game(
    http_req: HttpRequest,
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let mut request = body.into_inner();
    let roster = request.roster()?;
    let name = request.name;

    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(GameService::new().create_game(txn, &name, roster).await?) })
    })
    .await?;

    let etag = game_etag(view.game.id, view.game.lock_version);
    Ok(HttpResponse::Created()
        .insert_header((ETAG, etag))
        .json(GameResponse::from(view)))
}

/// GET /api/games/{game_id}
///
/// Supports `If-None-Match`: a matching ETag gets `304 Not Modified`.
async fn get_game(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;

    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(GameService::new().game_view(txn, id).await?) })
    })
    .await?;

    let etag = game_etag(id, view.game.lock_version);
    if if_none_match_hits(&http_req, &etag) {
        return Ok(HttpResponse::NotModified()
            .insert_header((ETAG, etag))
            .finish());
    }

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, etag))
        .json(GameResponse::from(view)))
}

/// GET /api/games/{game_id}/rolls
async fn list_rolls(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<RollResponse>>, AppError> {
    let id = game_id.0;

    let history = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(GameService::new().roll_history(txn, id).await?) })
    })
    .await?;

    Ok(web::Json(history.into_iter().map(Into::into).collect()))
}

/// POST /api/games/{game_id}/rolls
///
/// Responds with the next TurnState and the game's new ETag. An `If-Match`
/// ETag, when sent, must name the current version.
async fn submit_roll(
    http_req: HttpRequest,
    player: PlayerId,
    game_id: GameId,
    body: ValidatedJson<SubmitRollRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;
    let expected_lock_version = expected_version_from_if_match(&http_req, id)?;
    let expected_position = body.expected_position()?;
    let pin_count = PinCount::try_from(body.pin_count)?;

    let request = RollRequest {
        game_id: id,
        player_id: player.0,
        pin_count,
        expected_position,
        expected_lock_version,
    };

    // held until after commit so the next submission sees this one
    let _game_guard = app_state.game_locks.acquire(id).await;

    let outcome = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(GameFlowService::new().submit_roll(txn, request).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, game_etag(id, outcome.game.lock_version)))
        .json(outcome.turn()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .route("/{game_id}", web::get().to(get_game))
        .route("/{game_id}/rolls", web::get().to(list_rolls))
        .route("/{game_id}/rolls", web::post().to(submit_roll));
}
