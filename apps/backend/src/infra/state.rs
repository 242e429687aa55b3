use crate::config::db::{DbKind, RuntimeEnv};
use crate::config::roster::RosterConfig;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    roster_config: RosterConfig,
    runtime_env: RuntimeEnv,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            roster_config: RosterConfig::default(),
            runtime_env: RuntimeEnv::Prod,
            db_kind: None,
        }
    }

    pub fn with_env(mut self, runtime_env: RuntimeEnv) -> Self {
        self.runtime_env = runtime_env;
        self
    }

    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_roster(mut self, roster_config: RosterConfig) -> Self {
        self.roster_config = roster_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        self.roster_config.validate()?;
        if let Some(db_kind) = self.db_kind {
            // single entrypoint: connect + migrate
            let conn = bootstrap_db(self.runtime_env, &db_kind).await?;
            Ok(AppState::new(conn, self.security_config, self.roster_config))
        } else {
            Ok(AppState::new_without_db(
                self.security_config,
                self.roster_config,
            ))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
