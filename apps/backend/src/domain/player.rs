//! Player record and partial updates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a player is still in the game. Elimination is a flag, never a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Active,
    Eliminated,
}

impl PlayerStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Eliminated => "eliminated",
        }
    }
}

impl FromStr for PlayerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(PlayerStatus::Active),
            "eliminated" => Ok(PlayerStatus::Eliminated),
            other => Err(format!("unknown player status '{other}'")),
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One participant's state within one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub game_id: i64,
    pub player_id: i64,
    pub symbol: String,
    pub position: i32,
    pub cash: i64,
    /// Owned board squares, ascending and unique.
    pub properties: Vec<i32>,
    pub status: PlayerStatus,
    pub in_jail: bool,
    pub jail_turns: i32,
    /// Store-managed version used for compare-and-write.
    #[serde(rename = "version")]
    pub lock_version: i32,
}

/// The mutable fields of a player, in field-rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    Symbol,
    Position,
    Cash,
    Properties,
    Status,
    InJail,
    JailTurns,
}

impl PlayerField {
    pub const ALL: [PlayerField; 7] = [
        PlayerField::Symbol,
        PlayerField::Position,
        PlayerField::Cash,
        PlayerField::Properties,
        PlayerField::Status,
        PlayerField::InJail,
        PlayerField::JailTurns,
    ];

    /// Wire name of the field, as it appears in request bodies.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlayerField::Symbol => "symbol",
            PlayerField::Position => "position",
            PlayerField::Cash => "cash",
            PlayerField::Properties => "properties",
            PlayerField::Status => "status",
            PlayerField::InJail => "in_jail",
            PlayerField::JailTurns => "jail_turns",
        }
    }
}

/// A partial update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerPatch {
    pub symbol: Option<String>,
    pub position: Option<i32>,
    pub cash: Option<i64>,
    pub properties: Option<Vec<i32>>,
    pub status: Option<PlayerStatus>,
    pub in_jail: Option<bool>,
    pub jail_turns: Option<i32>,
}

impl PlayerPatch {
    pub fn has(&self, field: PlayerField) -> bool {
        match field {
            PlayerField::Symbol => self.symbol.is_some(),
            PlayerField::Position => self.position.is_some(),
            PlayerField::Cash => self.cash.is_some(),
            PlayerField::Properties => self.properties.is_some(),
            PlayerField::Status => self.status.is_some(),
            PlayerField::InJail => self.in_jail.is_some(),
            PlayerField::JailTurns => self.jail_turns.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !PlayerField::ALL.iter().any(|f| self.has(*f))
    }

    /// Fields carried by this patch, in field-rule order.
    pub fn fields(&self) -> Vec<PlayerField> {
        PlayerField::ALL
            .iter()
            .copied()
            .filter(|f| self.has(*f))
            .collect()
    }

    /// Field-level merge onto `player`. Identity and version are never touched.
    pub fn apply_to(&self, player: &Player) -> Player {
        let mut merged = player.clone();
        if let Some(symbol) = &self.symbol {
            merged.symbol = symbol.trim().to_string();
        }
        if let Some(position) = self.position {
            merged.position = position;
        }
        if let Some(cash) = self.cash {
            merged.cash = cash;
        }
        if let Some(properties) = &self.properties {
            merged.properties = normalize_properties(properties);
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(in_jail) = self.in_jail {
            merged.in_jail = in_jail;
        }
        if let Some(jail_turns) = self.jail_turns {
            merged.jail_turns = jail_turns;
        }
        merged
    }
}

/// Properties are a set: sorted, duplicates collapsed.
pub fn normalize_properties(properties: &[i32]) -> Vec<i32> {
    let mut out = properties.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}
