//! Error codes for the Tycoon backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

/// Centralized error codes for the Tycoon backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,

    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Invalid player ID provided
    InvalidPlayerId,
    /// Page or page size outside the configured bounds
    InvalidPagination,
    /// Unknown or malformed query parameter
    InvalidQuery,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Patch rules
    /// Field may not be written by this caller
    FieldNotWritable,
    /// Field value outside its allowed range
    FieldOutOfRange,
    /// Field value breaks a game rule
    InvariantViolation,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        Self::UnauthorizedMissingBearer,
        Self::UnauthorizedInvalidJwt,
        Self::UnauthorizedExpiredJwt,
        Self::InvalidGameId,
        Self::InvalidPlayerId,
        Self::InvalidPagination,
        Self::InvalidQuery,
        Self::ValidationError,
        Self::BadRequest,
        Self::FieldNotWritable,
        Self::FieldOutOfRange,
        Self::InvariantViolation,
        Self::GameNotFound,
        Self::PlayerNotFound,
        Self::NotFound,
        Self::OptimisticLock,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::Internal,
        Self::ConfigError,
        Self::DataCorruption,
    ];

    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPlayerId => "INVALID_PLAYER_ID",
            Self::InvalidPagination => "INVALID_PAGINATION",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::FieldNotWritable => "FIELD_NOT_WRITABLE",
            Self::FieldOutOfRange => "FIELD_OUT_OF_RANGE",
            Self::InvariantViolation => "INVARIANT_VIOLATION",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
