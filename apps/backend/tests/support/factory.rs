//! Request builders and seeding helpers shared by the route tests.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::{ETAG, IF_MATCH};
use actix_web::{test, Error};
use serde_json::{json, Value};

/// A game seeded through `POST /api/games`.
#[derive(Debug, Clone)]
pub struct SeededGame {
    pub game_id: i64,
    /// Player ids in turn order.
    pub player_ids: Vec<i64>,
    pub etag: String,
}

pub fn etag_of(resp: &ServiceResponse<BoxBody>) -> String {
    resp.headers()
        .get(ETAG)
        .and_then(|v| v.to_str().ok())
        .expect("response should carry an ETag")
        .to_string()
}

/// Create a game whose roster is new players named `names`.
pub async fn seed_game<S>(app: &S, names: &[&str]) -> SeededGame
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/games")
        .set_json(json!({ "name": "League night", "players": names }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "game creation should succeed");

    let etag = etag_of(&resp);
    let body: Value = test::read_body_json(resp).await;
    let game_id = body["id"].as_i64().expect("game id");
    let player_ids = body["participants"]
        .as_array()
        .expect("participants array")
        .iter()
        .map(|p| p["player_id"].as_i64().expect("player id"))
        .collect();

    SeededGame {
        game_id,
        player_ids,
        etag,
    }
}

/// Register a standalone player and return its id.
pub async fn seed_player<S>(app: &S, name: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": name }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "player creation should succeed");
    let body: Value = test::read_body_json(resp).await;
    body["id"].as_i64().expect("player id")
}

/// Build a roll submission; `body` is sent as-is.
pub fn roll_request(game_id: i64, player_id: i64, body: Value) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&format!("/api/games/{game_id}/rolls"))
        .insert_header(("player-id", player_id.to_string()))
        .set_json(body)
}

pub async fn submit_roll<S>(app: &S, game_id: i64, player_id: i64, pins: i64) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = roll_request(game_id, player_id, json!({ "pin_count": pins })).to_request();
    test::call_service(app, req).await
}

pub async fn submit_roll_if_match<S>(
    app: &S,
    game_id: i64,
    player_id: i64,
    pins: i64,
    etag: &str,
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = roll_request(game_id, player_id, json!({ "pin_count": pins }))
        .insert_header((IF_MATCH, etag.to_string()))
        .to_request();
    test::call_service(app, req).await
}

/// Submit a roll that must be accepted; returns the TurnState body.
pub async fn roll_ok<S>(app: &S, game_id: i64, player_id: i64, pins: i64) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = submit_roll(app, game_id, player_id, pins).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status.as_u16(),
        200,
        "roll of {pins} by player {player_id} should be accepted: {}",
        String::from_utf8_lossy(&body)
    );
    serde_json::from_slice(&body).expect("TurnState json")
}

/// Roll an open frame (`first`, then `second`) for every participant, frames 1..=9.
pub async fn play_open_frames<S>(app: &S, game: &SeededGame, first: i64, second: i64)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    for _frame in 1..=9 {
        for &player in &game.player_ids {
            roll_ok(app, game.game_id, player, first).await;
            roll_ok(app, game.game_id, player, second).await;
        }
    }
}

pub async fn get_game<S>(app: &S, game_id: i64) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{game_id}"))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    test::read_body_json(resp).await
}
