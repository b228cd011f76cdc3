//! ETag helpers for optimistic concurrency on games.
//!
//! A game's ETag encodes its `lock_version`, which every accepted roll bumps.
//! Clients send it back in `If-Match` when submitting a roll and in
//! `If-None-Match` when polling the game view.

use actix_web::http::header::{IF_MATCH, IF_NONE_MATCH};
use actix_web::HttpRequest;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Strong ETag for a game at `version`.
///
/// ```
/// # use scorelane::http::etag::game_etag;
/// assert_eq!(game_etag(123, 5), r#""game-123-v5""#);
/// ```
pub fn game_etag(id: i64, version: i32) -> String {
    format!(r#""game-{id}-v{version}""#)
}

/// Split a game ETag into `(id, version)`. Quotes and a weak `W/` prefix are tolerated.
pub fn parse_game_etag(raw: &str) -> Result<(i64, i32), AppError> {
    let s = raw.trim();
    let s = s.strip_prefix("W/").unwrap_or(s).trim_matches('"');

    let invalid = || {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag \"{s}\"; expected \"game-{{id}}-v{{version}}\""),
        )
    };

    let rest = s.strip_prefix("game-").ok_or_else(invalid)?;
    let (id, version) = rest.rsplit_once("-v").ok_or_else(invalid)?;
    let id = id.parse::<i64>().map_err(|_| invalid())?;
    let version = version.parse::<i32>().map_err(|_| invalid())?;
    Ok((id, version))
}

/// Lock version the caller expects, from `If-Match`.
///
/// Absent or `*` means "any version". An ETag for another game is rejected.
pub fn expected_version_from_if_match(
    req: &HttpRequest,
    game_id: i64,
) -> Result<Option<i32>, AppError> {
    let Some(value) = req.headers().get(IF_MATCH) else {
        return Ok(None);
    };
    let raw = value.to_str().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidHeader, "If-Match must be visible ASCII")
    })?;
    if raw.trim() == "*" {
        return Ok(None);
    }

    let (id, version) = parse_game_etag(raw)?;
    if id != game_id {
        return Err(AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("If-Match names game {id}, but the request is for game {game_id}"),
        ));
    }
    Ok(Some(version))
}

/// Whether `If-None-Match` already covers `etag` (so a 304 can be returned).
pub fn if_none_match_hits(req: &HttpRequest, etag: &str) -> bool {
    let Some(raw) = req
        .headers()
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let wanted = etag.trim_matches('"');
    raw.split(',').map(str::trim).any(|candidate| {
        candidate == "*"
            || candidate
                .strip_prefix("W/")
                .unwrap_or(candidate)
                .trim_matches('"')
                == wanted
    })
}
