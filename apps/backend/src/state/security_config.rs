use std::env;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Shortest HS256 secret accepted from the environment.
pub const MIN_SECRET_LEN: usize = 16;

/// Bearer token verification settings.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read `BACKEND_JWT_SECRET`; there is no default outside tests.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        match lookup("BACKEND_JWT_SECRET") {
            Some(secret) if secret.len() >= MIN_SECRET_LEN => Ok(Self::new(secret.into_bytes())),
            Some(_) => Err(AppError::config(format!(
                "BACKEND_JWT_SECRET must be at least {MIN_SECRET_LEN} bytes"
            ))),
            None => Err(AppError::config("BACKEND_JWT_SECRET must be set")),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
