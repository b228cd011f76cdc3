use actix_web::web;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub mod games;
pub mod health;
pub mod players;

/// Register every route. `main.rs` and the test app builder share this.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Games: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));

    // Players: /api/players, /api/me
    cfg.configure(players::configure_routes);
}

pub(crate) fn rfc3339(t: OffsetDateTime) -> String {
    t.format(&Rfc3339).unwrap_or_else(|_| t.unix_timestamp().to_string())
}
