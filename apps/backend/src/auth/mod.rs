//! Bearer-token verification and caller identity.

pub mod claims;
pub mod jwt;
