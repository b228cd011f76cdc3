use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use super::player_id::PlayerId;
use crate::db::require_db;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::repos::players::{self, Player};
use crate::state::app_state::AppState;

/// The player named by `player-id`, loaded from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPlayer(pub Player);

impl FromRequest for CurrentPlayer {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let PlayerId(player_id) = PlayerId::from_headers(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let player = if let Some(shared_txn) = SharedTxn::from_req(&req) {
                players::require_player(shared_txn.transaction(), player_id).await?
            } else {
                players::require_player(require_db(app_state)?, player_id).await?
            };

            Ok(CurrentPlayer(player))
        })
    }
}
