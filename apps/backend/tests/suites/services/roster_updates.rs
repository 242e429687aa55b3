//! Policy-checked partial updates through the player service.

use tycoon_backend::db::require_db;
use tycoon_backend::domain::player::{PlayerField, PlayerPatch, PlayerStatus};
use tycoon_backend::error::AppError;
use tycoon_backend::errors::domain::{ArgumentKind, DomainError, NotFoundKind, ViolationReason};
use tycoon_backend::repos::players;

use crate::support::factory::{seed_roster, STARTING_CASH};
use crate::support::test_state::build_test_state;

fn cash(value: i64) -> PlayerPatch {
    PlayerPatch {
        cash: Some(value),
        ..Default::default()
    }
}

fn violation(err: DomainError) -> (PlayerField, ViolationReason) {
    match err {
        DomainError::InvalidOperation(v) => (v.field, v.reason),
        other => panic!("expected a field violation, got {other:?}"),
    }
}

#[actix_web::test]
async fn negative_cash_is_refused_for_normal_callers() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[5]).await?;

    let err = state
        .player_service()
        .update(db, 1, 5, &cash(-50), false)
        .await
        .unwrap_err();

    assert_eq!(
        violation(err),
        (PlayerField::Cash, ViolationReason::Invariant)
    );
    let stored = players::get(db, 1, 5).await?;
    assert_eq!(stored.cash, STARTING_CASH);
    assert_eq!(stored.lock_version, 1);
    Ok(())
}

#[actix_web::test]
async fn admin_may_set_negative_cash() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[5]).await?;

    let updated = state
        .player_service()
        .update(db, 1, 5, &cash(-50), true)
        .await?;

    assert_eq!(updated.cash, -50);
    assert_eq!(updated.lock_version, 2);
    assert_eq!(players::get(db, 1, 5).await?.cash, -50);
    Ok(())
}

#[actix_web::test]
async fn engine_fields_need_admin() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[2]).await?;
    let service = state.player_service();

    let patch = PlayerPatch {
        status: Some(PlayerStatus::Eliminated),
        ..Default::default()
    };

    let err = service.update(db, 1, 2, &patch, false).await.unwrap_err();
    assert_eq!(
        violation(err),
        (PlayerField::Status, ViolationReason::NotWritable)
    );

    let updated = service.update(db, 1, 2, &patch, true).await?;
    assert_eq!(updated.status, PlayerStatus::Eliminated);
    Ok(())
}

#[actix_web::test]
async fn structural_limits_bind_admins_too() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[2]).await?;

    let patch = PlayerPatch {
        position: Some(40),
        ..Default::default()
    };
    let err = state
        .player_service()
        .update(db, 1, 2, &patch, true)
        .await
        .unwrap_err();

    assert_eq!(
        violation(err),
        (PlayerField::Position, ViolationReason::OutOfRange)
    );
    Ok(())
}

#[actix_web::test]
async fn a_bad_field_rejects_the_whole_patch() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[2]).await?;

    let patch = PlayerPatch {
        position: Some(12),
        cash: Some(-1),
        ..Default::default()
    };
    let err = state
        .player_service()
        .update(db, 1, 2, &patch, false)
        .await
        .unwrap_err();

    assert_eq!(violation(err).0, PlayerField::Cash);
    let stored = players::get(db, 1, 2).await?;
    assert_eq!(stored.position, 0);
    assert_eq!(stored.lock_version, 1);
    Ok(())
}

#[actix_web::test]
async fn untouched_fields_keep_their_values() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let seeded = seed_roster(db, 1, &[3]).await?.remove(0);

    let patch = PlayerPatch {
        position: Some(24),
        properties: Some(vec![39, 1, 39]),
        ..Default::default()
    };
    let updated = state
        .player_service()
        .update(db, 1, 3, &patch, false)
        .await?;

    assert_eq!(updated.position, 24);
    assert_eq!(updated.properties, vec![1, 39]);
    assert_eq!(updated.symbol, seeded.symbol);
    assert_eq!(updated.cash, seeded.cash);
    assert_eq!(updated.status, seeded.status);
    Ok(())
}

#[actix_web::test]
async fn repeating_a_patch_changes_nothing_but_the_version() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[3]).await?;
    let service = state.player_service();

    let patch = PlayerPatch {
        symbol: Some("  top hat ".to_string()),
        cash: Some(900),
        ..Default::default()
    };
    let first = service.update(db, 1, 3, &patch, false).await?;
    let second = service.update(db, 1, 3, &patch, false).await?;

    assert_eq!(first.symbol, "top hat");
    assert_eq!(
        (second.symbol.as_str(), second.cash),
        (first.symbol.as_str(), first.cash)
    );
    assert_eq!(second.lock_version, first.lock_version + 1);
    Ok(())
}

#[actix_web::test]
async fn sequential_disjoint_updates_both_survive() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[3]).await?;
    let service = state.player_service();

    service.update(db, 1, 3, &cash(250), false).await?;
    service
        .update(
            db,
            1,
            3,
            &PlayerPatch {
                position: Some(11),
                ..Default::default()
            },
            false,
        )
        .await?;

    let stored = players::get(db, 1, 3).await?;
    assert_eq!((stored.cash, stored.position), (250, 11));
    assert_eq!(stored.lock_version, 3);
    Ok(())
}

#[actix_web::test]
async fn missing_player_wins_over_patch_validation() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[1]).await?;
    let service = state.player_service();

    let err = service.update(db, 1, 99, &cash(-50), false).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));

    let err = service.update(db, 77, 1, &cash(10), false).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
    Ok(())
}

#[actix_web::test]
async fn empty_patch_is_an_invalid_argument() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_roster(db, 1, &[1]).await?;

    let err = state
        .player_service()
        .update(db, 1, 1, &PlayerPatch::default(), true)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::InvalidArgument(ArgumentKind::Patch, _)
    ));
    Ok(())
}
