use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::config::roster::RosterConfig;
use crate::services::players::PlayerService;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent only in tests that never touch the store)
    db: Option<DatabaseConnection>,
    /// JWT settings
    pub security: SecurityConfig,
    /// Paging bounds and update retry budget
    pub roster: RosterConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig, roster: RosterConfig) -> Self {
        Self {
            db: Some(db),
            security,
            roster,
        }
    }

    pub fn new_without_db(security: SecurityConfig, roster: RosterConfig) -> Self {
        Self {
            db: None,
            security,
            roster,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn player_service(&self) -> PlayerService {
        PlayerService::new(&self.roster)
    }
}
