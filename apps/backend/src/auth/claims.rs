//! Caller identity derived from verified JWT claims.

use super::jwt::Claims;

/// Privilege level of a caller. Only the exact role string `admin` elevates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerRole {
    Player,
    Admin,
}

impl CallerRole {
    pub fn from_claim(role: Option<&str>) -> Self {
        match role {
            Some("admin") => CallerRole::Admin,
            _ => CallerRole::Player,
        }
    }
}

/// Who is making the request. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// External subject identifier from the token
    pub sub: String,
    pub role: CallerRole,
}

impl CallerIdentity {
    pub fn is_admin(&self) -> bool {
        self.role == CallerRole::Admin
    }
}

impl From<Claims> for CallerIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            role: CallerRole::from_claim(claims.role.as_deref()),
            sub: claims.sub,
        }
    }
}
