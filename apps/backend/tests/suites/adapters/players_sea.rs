//! SeaORM player adapter against a migrated database.

use tycoon_backend::adapters::players_sea::{self, PlayerListQuery, PlayerUpdate};
use tycoon_backend::db::require_db;
use tycoon_backend::entities::game_players::PlayerStatus;
use tycoon_backend::error::AppError;

use crate::support::factory::seed_roster;
use crate::support::test_state::build_test_state;

fn window(offset: u64, limit: u64) -> PlayerListQuery {
    PlayerListQuery {
        status: None,
        in_jail: None,
        descending: false,
        offset,
        limit,
    }
}

#[actix_web::test]
async fn list_page_windows_rows_and_counts_all() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[10, 20, 30, 40]).await?;

    let (rows, total) = players_sea::list_page(db, 1, &window(1, 2)).await?;

    assert_eq!(total, 4);
    let ids: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
    assert_eq!(ids, vec![20, 30]);
    Ok(())
}

#[actix_web::test]
async fn list_page_applies_status_filter_to_total() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[1, 2]).await?;

    let query = PlayerListQuery {
        status: Some(PlayerStatus::Eliminated),
        ..window(0, 10)
    };
    let (rows, total) = players_sea::list_page(db, 1, &query).await?;

    assert!(rows.is_empty());
    assert_eq!(total, 0);
    Ok(())
}

#[actix_web::test]
async fn properties_are_stored_as_json_text() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[1]).await?;

    let row = players_sea::find(db, 1, 1)
        .await?
        .expect("seeded player should exist");
    assert_eq!(row.properties, "[]");
    assert_eq!(row.lock_version, 1);
    Ok(())
}

#[actix_web::test]
async fn update_with_stale_version_reports_both_versions() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[1]).await?;

    let dto = PlayerUpdate {
        game_id: 1,
        player_id: 1,
        current_lock_version: 7,
        symbol: "boot".to_string(),
        position: 3,
        cash: 10,
        properties_json: "[3]".to_string(),
        status: PlayerStatus::Active,
        in_jail: false,
        jail_turns: 0,
    };
    let err = players_sea::update_player(db, dto).await.unwrap_err();

    match err {
        sea_orm::DbErr::Custom(msg) => {
            assert_eq!(msg, "OPTIMISTIC_LOCK:{\"expected\":7,\"actual\":1}");
        }
        other => panic!("expected an optimistic lock payload, got {other:?}"),
    }
    Ok(())
}

#[actix_web::test]
async fn update_bumps_version_and_writes_columns() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[1]).await?;

    let dto = PlayerUpdate {
        game_id: 1,
        player_id: 1,
        current_lock_version: 1,
        symbol: "boot".to_string(),
        position: 3,
        cash: 10,
        properties_json: "[3]".to_string(),
        status: PlayerStatus::Eliminated,
        in_jail: true,
        jail_turns: 2,
    };
    let row = players_sea::update_player(db, dto).await?;

    assert_eq!(row.lock_version, 2);
    assert_eq!(row.symbol, "boot");
    assert_eq!(row.properties, "[3]");
    assert_eq!(row.status, PlayerStatus::Eliminated);
    assert!(row.in_jail);
    Ok(())
}
