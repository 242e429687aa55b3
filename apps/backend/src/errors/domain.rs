//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::player::PlayerField;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Player,
    Other(String),
}

/// Which part of a request carried the bad argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    Pagination,
    Patch,
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
    Other(String),
}

/// Why a patch field was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationReason {
    /// The caller's write policy does not allow this field at all.
    NotWritable,
    /// The value is outside the field's type/range domain (checked for every caller).
    OutOfRange,
    /// The value breaks a game rule enforced on the normal write path.
    Invariant,
}

/// A single rejected patch field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: PlayerField,
    pub reason: ViolationReason,
    pub detail: String,
}

impl FieldViolation {
    pub fn new(field: PlayerField, reason: ViolationReason, detail: impl Into<String>) -> Self {
        Self {
            field,
            reason,
            detail: detail.into(),
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed request parameters (pagination, empty patch, ...)
    InvalidArgument(ArgumentKind, String),
    /// Patch refused by the field rules for the caller's privilege level
    InvalidOperation(FieldViolation),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidArgument(kind, d) => write!(f, "invalid argument {kind:?}: {d}"),
            DomainError::InvalidOperation(v) => {
                write!(f, "invalid operation on {}: {}", v.field.as_str(), v.detail)
            }
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_argument(kind: ArgumentKind, detail: impl Into<String>) -> Self {
        Self::InvalidArgument(kind, detail.into())
    }
    pub fn invalid_operation(violation: FieldViolation) -> Self {
        Self::InvalidOperation(violation)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn is_optimistic_lock(&self) -> bool {
        matches!(self, DomainError::Conflict(ConflictKind::OptimisticLock, _))
    }
}

/// Adapters return `DbErr`; repos map it here.
///
/// `RecordNotFound` keeps its message, the `OPTIMISTIC_LOCK:` payload produced
/// by the compare-and-write becomes a conflict, a pool-acquire timeout is a
/// timeout and other connection problems are reported as unavailability.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(msg) => {
                DomainError::not_found(NotFoundKind::Other("record".to_string()), msg)
            }
            sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
                DomainError::conflict(ConflictKind::OptimisticLock, msg)
            }
            sea_orm::DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::Timeout) => {
                DomainError::infra(
                    InfraErrorKind::Timeout,
                    "timed out waiting for a database connection",
                )
            }
            sea_orm::DbErr::ConnectionAcquire(err) => DomainError::infra(
                InfraErrorKind::DbUnavailable,
                format!("connection acquire failed: {err}"),
            ),
            sea_orm::DbErr::Conn(err) => {
                DomainError::infra(InfraErrorKind::DbUnavailable, err.to_string())
            }
            other => DomainError::infra(
                InfraErrorKind::Other("Database error".to_string()),
                other.to_string(),
            ),
        }
    }
}
