//! Domain layer: player records, write rules and paging. No DB or HTTP here.

pub mod pagination;
pub mod player;
pub mod rules;
pub mod write_policy;

#[cfg(test)]
mod tests_props_write_policy;

pub use pagination::{Page, PageLimits, PageRequest, PlayerQuery, SortOrder};
pub use player::{Player, PlayerField, PlayerPatch, PlayerStatus};
pub use write_policy::{select_policy, WritePolicy};
