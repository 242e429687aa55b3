//! Error handling for the Tycoon backend.

pub mod domain;
pub mod error_code;

pub use domain::{
    ArgumentKind, ConflictKind, DomainError, FieldViolation, InfraErrorKind, NotFoundKind,
    ViolationReason,
};
pub use error_code::ErrorCode;
