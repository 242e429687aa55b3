//! Version-checked saves and racing updates.

use tycoon_backend::config::roster::RosterConfig;
use tycoon_backend::db::require_db;
use tycoon_backend::domain::player::PlayerPatch;
use tycoon_backend::error::AppError;
use tycoon_backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use tycoon_backend::repos::players;

use crate::support::factory::{player, seed_game, seed_roster};
use crate::support::test_state::{build_test_state, build_test_state_with};

#[actix_web::test]
async fn save_with_a_stale_version_conflicts() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[1]).await?;

    let snapshot = players::get(db, 1, 1).await?;

    let mut first = snapshot.clone();
    first.cash = 100;
    let saved = players::save(db, &first).await?;
    assert_eq!(saved.lock_version, snapshot.lock_version + 1);

    let mut second = snapshot;
    second.position = 9;
    let err = players::save(db, &second).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::OptimisticLock, _)
    ));

    let stored = players::get(db, 1, 1).await?;
    assert_eq!((stored.cash, stored.position), (100, 0));
    Ok(())
}

#[actix_web::test]
async fn save_of_a_missing_player_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_game(db, 1).await?;

    let err = players::save(db, &player(1, 42)).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
    Ok(())
}

#[actix_web::test]
async fn racing_disjoint_updates_are_both_applied() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[7]).await?;
    let service = state.player_service();

    let cash = PlayerPatch {
        cash: Some(320),
        ..Default::default()
    };
    let position = PlayerPatch {
        position: Some(30),
        ..Default::default()
    };

    let (a, b) = tokio::join!(
        service.update(db, 1, 7, &cash, false),
        service.update(db, 1, 7, &position, false),
    );
    a?;
    b?;

    let stored = players::get(db, 1, 7).await?;
    assert_eq!((stored.cash, stored.position), (320, 30));
    assert_eq!(stored.lock_version, 3);
    Ok(())
}

#[actix_web::test]
async fn racing_updates_without_retries_left_conflict() -> Result<(), AppError> {
    let state = build_test_state_with(RosterConfig {
        update_max_attempts: 1,
        ..RosterConfig::default()
    })
    .await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[7]).await?;
    let service = state.player_service();

    let cash = PlayerPatch {
        cash: Some(320),
        ..Default::default()
    };
    let position = PlayerPatch {
        position: Some(30),
        ..Default::default()
    };

    let (a, b) = tokio::join!(
        service.update(db, 1, 7, &cash, false),
        service.update(db, 1, 7, &position, false),
    );

    let (saved, lost) = match (a, b) {
        (Ok(saved), Err(lost)) | (Err(lost), Ok(saved)) => (saved, lost),
        other => panic!("expected exactly one update to lose the race, got {other:?}"),
    };
    assert!(lost.is_optimistic_lock(), "unexpected error: {lost:?}");

    let stored = players::get(db, 1, 7).await?;
    assert_eq!(stored.lock_version, saved.lock_version);
    assert_eq!(stored.lock_version, 2);
    assert_eq!(
        AppError::from(lost).status(),
        actix_web::http::StatusCode::CONFLICT
    );
    Ok(())
}
