//! GET /games/{game_id}/players

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;
use tycoon_backend::db::require_db;
use tycoon_backend::error::AppError;

use crate::common::{assert_problem, item_ids};
use crate::support::app_builder::create_test_app;
use crate::support::factory::seed_roster;
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn lists_the_first_page() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_roster(require_db(&state)?, 1, &[1, 2, 3]).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/games/1/players?page_size=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(item_ids(&body), vec![1, 2]);
    assert_eq!(body["page"], 0);
    assert_eq!(body["page_size"], 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["has_next"], true);

    let first = &body["items"][0];
    assert_eq!(first["game_id"], 1);
    assert_eq!(first["symbol"], "token-1");
    assert_eq!(first["status"], "active");
    assert_eq!(first["version"], 1);
    Ok(())
}

#[actix_web::test]
async fn honours_order_and_filters() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_roster(require_db(&state)?, 1, &[1, 2, 3]).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/games/1/players?order=desc&status=active&in_jail=false&page=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(item_ids(&body), vec![3, 2, 1]);
    Ok(())
}

#[actix_web::test]
async fn unknown_game_is_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/games/12/players")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, "GAME_NOT_FOUND", StatusCode::NOT_FOUND, Some("12")).await;
    Ok(())
}

#[actix_web::test]
async fn oversized_page_is_400() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_roster(require_db(&state)?, 1, &[1]).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/games/1/players?page_size=1000")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(
        resp,
        "INVALID_PAGINATION",
        StatusCode::BAD_REQUEST,
        Some("page_size"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn unknown_query_parameter_is_400() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_roster(require_db(&state)?, 1, &[1]).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get()
        .uri("/games/1/players?limit=5")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, "INVALID_QUERY", StatusCode::BAD_REQUEST, Some("limit")).await;
    Ok(())
}

#[actix_web::test]
async fn non_numeric_game_id_is_400() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for uri in ["/games/abc/players", "/games/0/players"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem(resp, "INVALID_GAME_ID", StatusCode::BAD_REQUEST, None).await;
    }
    Ok(())
}
