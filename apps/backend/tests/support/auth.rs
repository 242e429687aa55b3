//! JWT helpers for tests

use std::time::{Duration, SystemTime};

use tycoon_backend::auth::jwt::mint_access_token;
use tycoon_backend::state::security_config::SecurityConfig;

/// Bearer header value for a regular player.
pub fn player_bearer(sub: &str, sec: &SecurityConfig) -> String {
    format!(
        "Bearer {}",
        mint_access_token(sub, None, SystemTime::now(), sec).expect("should mint token")
    )
}

/// Bearer header value carrying the admin role.
pub fn admin_bearer(sub: &str, sec: &SecurityConfig) -> String {
    format!(
        "Bearer {}",
        mint_access_token(sub, Some("admin"), SystemTime::now(), sec).expect("should mint token")
    )
}

/// Bearer header value whose token expired an hour ago.
pub fn expired_bearer(sub: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now()
        .checked_sub(Duration::from_secs(7200))
        .expect("clock should be past the epoch");
    format!(
        "Bearer {}",
        mint_access_token(sub, Some("admin"), issued, sec).expect("should mint token")
    )
}
