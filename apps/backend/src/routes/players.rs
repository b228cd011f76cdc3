//! Player routes: registration and "who am I".

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use super::rfc3339;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{CurrentPlayer, ValidatedJson};
use crate::repos::players::Player;
use crate::services::players::PlayerService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            created_at: rfc3339(player.created_at),
        }
    }
}

/// POST /api/players
async fn create_player(
    http_req: HttpRequest,
    body: ValidatedJson<CreatePlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CreatePlayerRequest { name } = body.into_inner();

    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(PlayerService::new().create_player(txn, &name).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(PlayerResponse::from(player)))
}

/// GET /api/me
async fn me(current: CurrentPlayer) -> Result<web::Json<PlayerResponse>, AppError> {
    Ok(web::Json(PlayerResponse::from(current.0)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/players", web::post().to(create_player))
        .route("/api/me", web::get().to(me));
}
