//! Seed data for roster tests.

use sea_orm::ConnectionTrait;
use tycoon_backend::adapters::games_sea::GameCreate;
use tycoon_backend::domain::player::{Player, PlayerStatus};
use tycoon_backend::error::AppError;
use tycoon_backend::repos::{games, players};

pub const STARTING_CASH: i64 = 1500;

/// A fresh player on GO with starting cash and no holdings.
pub fn player(game_id: i64, player_id: i64) -> Player {
    Player {
        game_id,
        player_id,
        symbol: format!("token-{player_id}"),
        position: 0,
        cash: STARTING_CASH,
        properties: Vec::new(),
        status: PlayerStatus::Active,
        in_jail: false,
        jail_turns: 0,
        lock_version: 0,
    }
}

pub async fn seed_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<(), AppError> {
    games::create_game(
        conn,
        GameCreate::new()
            .with_id(game_id)
            .with_name(format!("game-{game_id}")),
    )
    .await?;
    Ok(())
}

pub async fn seed_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player: &Player,
) -> Result<Player, AppError> {
    Ok(players::create(conn, player).await?)
}

/// Seed a game with default players for each id.
pub async fn seed_roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    player_ids: &[i64],
) -> Result<Vec<Player>, AppError> {
    seed_game(conn, game_id).await?;
    let mut seeded = Vec::with_capacity(player_ids.len());
    for &player_id in player_ids {
        seeded.push(seed_player(conn, &player(game_id, player_id)).await?);
    }
    Ok(seeded)
}
