use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Largest body accepted. A full player patch is well under 1 KiB.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// JSON body extractor that turns every failure into a 400 problem
/// details response.
///
/// Malformed JSON reports `BAD_REQUEST`; well-formed bodies with wrong types
/// or unknown fields report `VALIDATION_ERROR` and name the field.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

async fn read_body(mut payload: Payload) -> Result<BytesMut, AppError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(error = %e, "request body read failed");
            AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(AppError::bad_request(
                ErrorCode::BadRequest,
                format!("Request body exceeds {MAX_BODY_BYTES} bytes"),
            ));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Deserialize `body`, mapping serde's error category to an error code.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice::<T>(body).map_err(|e| {
        debug!(body_size = body.len(), category = ?e.classify(), "request body rejected");
        match e.classify() {
            Category::Data => AppError::bad_request(
                ErrorCode::ValidationError,
                format!("Invalid request body: {}", without_position(&e.to_string())),
            ),
            Category::Syntax => AppError::bad_request(
                ErrorCode::BadRequest,
                format!("Invalid JSON at line {} column {}", e.line(), e.column()),
            ),
            Category::Eof if body.is_empty() => {
                AppError::bad_request(ErrorCode::BadRequest, "Request body is empty")
            }
            Category::Eof => AppError::bad_request(
                ErrorCode::BadRequest,
                "Invalid JSON: unexpected end of input",
            ),
            Category::Io => AppError::bad_request(ErrorCode::BadRequest, "Invalid JSON"),
        }
    })
}

/// serde appends " at line L column C"; clients only need the field.
fn without_position(message: &str) -> &str {
    message
        .rfind(" at line ")
        .map_or(message, |idx| &message[..idx])
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(_req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let payload = payload.take();
        Box::pin(async move {
            let body = read_body(payload).await?;
            parse_body::<T>(&body).map(ValidatedJson)
        })
    }
}
