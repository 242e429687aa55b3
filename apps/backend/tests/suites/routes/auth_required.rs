//! Bearer token handling on the update route.

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;
use tycoon_backend::db::require_db;
use tycoon_backend::error::AppError;
use tycoon_backend::state::security_config::SecurityConfig;

use crate::common::assert_problem;
use crate::support::app_builder::create_test_app;
use crate::support::auth::{expired_bearer, player_bearer};
use crate::support::factory::seed_roster;
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn missing_or_malformed_header_is_401() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_roster(require_db(&state)?, 1, &[5]).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::patch()
        .uri("/games/1/players/5")
        .set_json(json!({ "cash": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(
        resp,
        "UNAUTHORIZED_MISSING_BEARER",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;

    for header in ["Basic abc", "Bearer", "Bearer a b"] {
        let req = test::TestRequest::patch()
            .uri("/games/1/players/5")
            .insert_header(("Authorization", header))
            .set_json(json!({ "cash": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem(
            resp,
            "UNAUTHORIZED_MISSING_BEARER",
            StatusCode::UNAUTHORIZED,
            None,
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn token_signed_with_another_secret_is_401() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_roster(require_db(&state)?, 1, &[5]).await?;
    let foreign = SecurityConfig::new("some-other-secret".as_bytes());
    let bearer = player_bearer("player-5", &foreign);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::patch()
        .uri("/games/1/players/5")
        .insert_header(("Authorization", bearer))
        .set_json(json!({ "cash": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(
        resp,
        "UNAUTHORIZED_INVALID_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn expired_token_is_401() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_roster(require_db(&state)?, 1, &[5]).await?;
    let bearer = expired_bearer("ops", &state.security);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::patch()
        .uri("/games/1/players/5")
        .insert_header(("Authorization", bearer))
        .set_json(json!({ "cash": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(
        resp,
        "UNAUTHORIZED_EXPIRED_JWT",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn listing_needs_no_token() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_roster(require_db(&state)?, 1, &[5]).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/games/1/players")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}
