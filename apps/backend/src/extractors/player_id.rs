//! Caller identity from the `player-id` header.
//!
//! There is no authentication beyond this header: whoever names a player id
//! acts as that player.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const PLAYER_ID_HEADER: &str = "player-id";

/// Player id named by the caller. Existence is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn from_headers(req: &HttpRequest) -> Result<Self, AppError> {
        let value = req
            .headers()
            .get(PLAYER_ID_HEADER)
            .ok_or_else(|| AppError::unauthorized("Missing player-id header"))?;

        let raw = value.to_str().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidHeader, "player-id must be visible ASCII")
        })?;

        match raw.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(PlayerId(id)),
            _ => Err(AppError::bad_request(
                ErrorCode::InvalidHeader,
                format!("player-id must be a positive integer, got: {raw}"),
            )),
        }
    }
}

impl FromRequest for PlayerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req))
    }
}
