use actix_web::web;

pub mod health;
pub mod players;

/// Register every route. `main.rs` adds the middleware stack around this;
/// tests call it directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Roster: /games/{game_id}/players/**
    cfg.service(web::scope("/games/{game_id}/players").configure(players::configure_routes));
}
