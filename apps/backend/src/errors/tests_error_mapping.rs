// Unit tests for DomainError -> AppError mapping, no HTTP server or database involved.
use actix_web::body::to_bytes;
use actix_web::ResponseError;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_turn_rule_violations() {
    let app: AppError = DomainError::validation(ValidationKind::OutOfTurn, "not your turn").into();
    assert_eq!(app.code(), ErrorCode::OutOfTurn);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::validation(ValidationKind::GameAlreadyCompleted, "done").into();
    assert_eq!(app.code(), ErrorCode::GameAlreadyCompleted);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::validation(ValidationKind::InvalidPinCount, "too many pins").into();
    assert_eq!(app.code(), ErrorCode::InvalidPinCount);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_generic_validation_to_422() {
    let app: AppError = DomainError::validation_other("bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::DuplicateRoll, "dup").into();
    assert_eq!(app.code().as_str(), "DUPLICATE_ROLL");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::conflict(ConflictKind::OptimisticLock, "stale").into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("Unique".into()), "generic").into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let cases = [
        (NotFoundKind::Game, "GAME_NOT_FOUND"),
        (NotFoundKind::Player, "PLAYER_NOT_FOUND"),
        (NotFoundKind::Participant, "PARTICIPANT_NOT_FOUND"),
        (NotFoundKind::Other("Record".into()), "NOT_FOUND"),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::not_found(kind, "missing").into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 404);
    }
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::invariant("frame 12").into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError =
        DomainError::infra(InfraErrorKind::Other("DbErr".into()), "other").into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[actix_web::test]
async fn error_response_is_problem_json() {
    let app: AppError = DomainError::conflict(ConflictKind::DuplicateRoll, "roll taken").into();
    let resp = app.error_response();

    assert_eq!(resp.status().as_u16(), 409);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/problem+json"));
    assert_eq!(
        resp.headers()
            .get("x-trace-id")
            .and_then(|v| v.to_str().ok()),
        Some("unknown")
    );

    let body = to_bytes(resp.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "DUPLICATE_ROLL");
    assert_eq!(json["title"], "Duplicate Roll");
    assert_eq!(json["type"], "https://scorelane.app/errors/DUPLICATE_ROLL");
    assert_eq!(json["detail"], "roll taken");
    assert_eq!(json["status"], 409);
}

#[test]
fn unavailable_sets_retry_after() {
    let resp = AppError::db_unavailable().error_response();
    assert_eq!(resp.status().as_u16(), 503);
    assert!(resp.headers().get("retry-after").is_some());
}
