//! Assertions over the backend's RFC 7807 error responses.
//!
//! Deliberately free of backend types so every test binary can share them.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use serde::Deserialize;

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";
pub const ERROR_TYPE_PREFIX: &str = "https://tycoon.app/errors/";

/// Mirror of the backend's problem+json body.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .unwrap_or_else(|| panic!("{name} header should be present"))
        .to_str()
        .unwrap_or_else(|_| panic!("{name} header should be valid UTF-8"))
}

/// Check status, content type, code, type URI, and that `trace_id` matches
/// `x-trace-id`. `detail_contains` is a substring check.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let content_type = header(headers, CONTENT_TYPE.as_str());
    assert!(
        content_type.starts_with(PROBLEM_CONTENT_TYPE),
        "content-type should be {PROBLEM_CONTENT_TYPE}, got {content_type}"
    );

    let problem: ProblemDetailsLike = serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "body should be problem details ({e}): {}",
            String::from_utf8_lossy(body)
        )
    });

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("{ERROR_TYPE_PREFIX}{expected_code}"));
    assert_eq!(
        problem.trace_id,
        header(headers, "x-trace-id"),
        "trace_id in body should match x-trace-id"
    );
    if let Some(fragment) = detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "detail should contain {fragment:?}, got {:?}",
            problem.detail
        );
    }

    problem
}

/// [`assert_problem_details_from_parts`] over a test service response.
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        detail_contains,
    )
}
