use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Query-string extractor with problem-details errors.
///
/// Pair with `#[serde(deny_unknown_fields)]` so stray parameters are
/// rejected instead of ignored.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> ValidatedQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = web::Query::<T>::from_query(req.query_string())
            .map(|q| ValidatedQuery(q.into_inner()))
            .map_err(|e| {
                let cause = match &e {
                    actix_web::error::QueryPayloadError::Deserialize(inner) => inner.to_string(),
                    other => other.to_string(),
                };
                AppError::bad_request(
                    ErrorCode::InvalidQuery,
                    format!("Invalid query string: {cause}"),
                )
            });
        ready(result)
    }
}
