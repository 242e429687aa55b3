//! with_txn under the commit-on-ok policy.

use actix_web::test::TestRequest;
use actix_web::HttpMessage;
use tycoon_backend::db::require_db;
use tycoon_backend::db::txn::{with_txn, SharedTxn};
use tycoon_backend::db::txn_policy::{current, TxnPolicy};
use tycoon_backend::error::AppError;
use tycoon_backend::errors::ErrorCode;
use tycoon_backend::repos::games;

use crate::support::factory::seed_game;
use crate::support::test_state::build_test_state;

#[test]
fn binary_runs_with_commit_policy() {
    assert_eq!(current(), TxnPolicy::CommitOnOk);
}

#[actix_web::test]
async fn ok_body_is_committed() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            seed_game(txn, 10).await?;
            Ok::<_, AppError>(())
        })
    })
    .await?;

    assert!(games::exists(require_db(&state)?, 10).await?);
    Ok(())
}

#[actix_web::test]
async fn err_body_is_rolled_back_and_error_kept() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let result: Result<(), AppError> = with_txn(None, &state, |txn| {
        Box::pin(async move {
            seed_game(txn, 11).await?;
            Err(AppError::conflict(ErrorCode::Conflict, "forced failure"))
        })
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Conflict);
    assert!(!games::exists(require_db(&state)?, 11).await?);
    Ok(())
}

#[actix_web::test]
async fn shared_txn_in_request_is_used_and_left_open() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let shared = SharedTxn::open(require_db(&state)?).await?;

    let req = TestRequest::default().to_http_request();
    req.extensions_mut().insert(shared.clone());

    with_txn(Some(&req), &state, |txn| {
        Box::pin(async move {
            seed_game(txn, 12).await?;
            Ok::<_, AppError>(())
        })
    })
    .await?;

    // Still visible inside the shared transaction.
    assert!(games::exists(shared.transaction(), 12).await?);

    req.extensions_mut().remove::<SharedTxn>();
    drop(req);
    shared.rollback().await?;

    assert!(!games::exists(require_db(&state)?, 12).await?);
    Ok(())
}

#[actix_web::test]
async fn missing_database_is_unavailable() {
    let state = tycoon_backend::infra::state::build_state()
        .build()
        .await
        .expect("state without db should build");

    let err = with_txn(None, &state, |_txn| Box::pin(async move { Ok::<_, AppError>(()) }))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::DbUnavailable);
}
