//! Roster service: paginated reads and policy-checked partial updates.

use sea_orm::ConnectionTrait;
use tracing::{debug, info, warn};

use crate::config::roster::RosterConfig;
use crate::domain::pagination::{Page, PageLimits, PageRequest, PlayerQuery};
use crate::domain::player::{Player, PlayerPatch};
use crate::domain::write_policy::select_policy;
use crate::errors::domain::{ArgumentKind, DomainError};
use crate::repos::{games, players};

/// Player roster service.
pub struct PlayerService {
    limits: PageLimits,
    max_attempts: u32,
}

impl PlayerService {
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            limits: config.page_limits(),
            max_attempts: config.update_max_attempts.max(1),
        }
    }

    /// One page of the players of `game_id`, ordered by player id.
    ///
    /// An unknown game is `NotFound(Game)`; a page past the end is an empty page.
    pub async fn find_players_by_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        query: &PlayerQuery,
    ) -> Result<Page<Player>, DomainError> {
        let request = PageRequest::from_query(query, &self.limits)?;
        games::require_game(conn, game_id).await?;

        let page = players::list(conn, game_id, &request).await?;
        debug!(
            game_id,
            page = page.page,
            page_size = page.page_size,
            returned = page.items.len(),
            total = page.total,
            "roster.page_served"
        );
        Ok(page)
    }

    /// Apply `patch` to one player under the write policy for `is_admin`.
    ///
    /// The whole patch is checked before anything is written. A save that
    /// loses a version race is re-read and re-merged, up to the configured
    /// number of attempts.
    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
        player_id: i64,
        patch: &PlayerPatch,
        is_admin: bool,
    ) -> Result<Player, DomainError> {
        games::require_game(conn, game_id).await?;
        let mut current = players::get(conn, game_id, player_id).await?;

        if patch.is_empty() {
            return Err(DomainError::invalid_argument(
                ArgumentKind::Patch,
                "patch must contain at least one field",
            ));
        }

        let policy = select_policy(is_admin);
        if let Err(violation) = policy.validate(patch) {
            info!(
                game_id,
                player_id,
                policy = policy.name(),
                field = violation.field.as_str(),
                reason = ?violation.reason,
                "roster.update_rejected"
            );
            return Err(DomainError::invalid_operation(violation));
        }

        let mut attempt = 1;
        loop {
            let merged = patch.apply_to(&current);
            match players::save(conn, &merged).await {
                Ok(saved) => {
                    info!(
                        game_id,
                        player_id,
                        policy = policy.name(),
                        fields = ?patch.fields().iter().map(|f| f.as_str()).collect::<Vec<_>>(),
                        version = saved.lock_version,
                        attempt,
                        "roster.player_updated"
                    );
                    return Ok(saved);
                }
                Err(e) if e.is_optimistic_lock() && attempt < self.max_attempts => {
                    warn!(game_id, player_id, attempt, "roster.update_retry");
                    attempt += 1;
                    current = players::get(conn, game_id, player_id).await?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
