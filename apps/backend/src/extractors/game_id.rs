use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::games;
use crate::state::app_state::AppState;

/// Parse the `game_id` path segment into a positive id.
pub fn parse_game_id(raw: &str) -> Result<i64, AppError> {
    let game_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
    })?;
    if game_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Game id must be positive, got: {game_id}"),
        ));
    }
    Ok(game_id)
}

/// Game ID extracted from the route path parameter.
/// Validates that the game exists in the database.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let raw = req.match_info().get("game_id").ok_or_else(|| {
                AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
            })?;
            let game_id = parse_game_id(raw)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let exists = if let Some(shared_txn) = SharedTxn::from_req(&req) {
                games::exists(shared_txn.transaction(), game_id).await?
            } else {
                games::exists(require_db(app_state)?, game_id).await?
            };

            if !exists {
                return Err(AppError::not_found(
                    ErrorCode::GameNotFound,
                    format!("Game {game_id} not found"),
                ));
            }

            Ok(GameId(game_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_ids() {
        assert_eq!(parse_game_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_and_non_positive() {
        for raw in ["abc", "0", "-3", "1.5", ""] {
            let err = parse_game_id(raw).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidGameId, "{raw}");
            assert_eq!(err.status().as_u16(), 400);
        }
    }
}
