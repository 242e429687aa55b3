//! DTOs for players_sea adapter. Fields mirror columns.

use crate::entities::game_players::PlayerStatus;

/// DTO for inserting a player row. Version starts at 1.
#[derive(Debug, Clone)]
pub struct PlayerCreate {
    pub game_id: i64,
    pub player_id: i64,
    pub symbol: String,
    pub position: i32,
    pub cash: i64,
    pub properties_json: String,
    pub status: PlayerStatus,
    pub in_jail: bool,
    pub jail_turns: i32,
}

/// Full-row overwrite guarded by the version the caller read.
#[derive(Debug, Clone)]
pub struct PlayerUpdate {
    pub game_id: i64,
    pub player_id: i64,
    pub current_lock_version: i32,
    pub symbol: String,
    pub position: i32,
    pub cash: i64,
    pub properties_json: String,
    pub status: PlayerStatus,
    pub in_jail: bool,
    pub jail_turns: i32,
}

/// Filters, ordering and window for a roster listing.
#[derive(Debug, Clone, Default)]
pub struct PlayerListQuery {
    pub status: Option<PlayerStatus>,
    pub in_jail: Option<bool>,
    pub descending: bool,
    pub offset: u64,
    pub limit: u64,
}
