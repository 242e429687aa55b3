//! Field write rules and the two write policies built on them.
//!
//! Every mutable player field has one row in [`FIELD_RULES`]. A row says
//! which callers may write the field, what shape a value must have for
//! anyone (structural), and which game rule a normal caller must also
//! respect (invariant). Admin writes skip invariants but never structure.

use crate::domain::player::{PlayerField, PlayerPatch};
use crate::domain::rules::{is_on_board, BOARD_SIZE, MAX_JAIL_TURNS, MAX_SYMBOL_LEN};
use crate::errors::domain::{FieldViolation, ViolationReason};

/// Checks one field of a patch. Only called when the field is present.
pub type FieldCheck = fn(&PlayerPatch) -> Result<(), String>;

pub struct FieldRule {
    pub field: PlayerField,
    pub normal_writable: bool,
    pub admin_writable: bool,
    pub structural: Option<FieldCheck>,
    pub invariant: Option<FieldCheck>,
}

pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: PlayerField::Symbol,
        normal_writable: true,
        admin_writable: true,
        structural: Some(check_symbol),
        invariant: None,
    },
    FieldRule {
        field: PlayerField::Position,
        normal_writable: true,
        admin_writable: true,
        structural: Some(check_position),
        invariant: None,
    },
    FieldRule {
        field: PlayerField::Cash,
        normal_writable: true,
        admin_writable: true,
        structural: None,
        invariant: Some(check_cash_not_negative),
    },
    FieldRule {
        field: PlayerField::Properties,
        normal_writable: true,
        admin_writable: true,
        structural: Some(check_properties),
        invariant: None,
    },
    // Engine-computed state: only an admin may override it.
    FieldRule {
        field: PlayerField::Status,
        normal_writable: false,
        admin_writable: true,
        structural: None,
        invariant: None,
    },
    FieldRule {
        field: PlayerField::InJail,
        normal_writable: false,
        admin_writable: true,
        structural: None,
        invariant: None,
    },
    FieldRule {
        field: PlayerField::JailTurns,
        normal_writable: false,
        admin_writable: true,
        structural: Some(check_jail_turns),
        invariant: None,
    },
];

pub fn rule_for(field: PlayerField) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| rule.field == field)
}

fn check_symbol(patch: &PlayerPatch) -> Result<(), String> {
    match patch.symbol.as_deref().map(str::trim) {
        Some("") => Err("symbol must not be blank".to_string()),
        Some(s) if s.chars().count() > MAX_SYMBOL_LEN => Err(format!(
            "symbol must be at most {MAX_SYMBOL_LEN} characters"
        )),
        _ => Ok(()),
    }
}

fn check_position(patch: &PlayerPatch) -> Result<(), String> {
    match patch.position {
        Some(p) if !is_on_board(p) => Err(format!(
            "position {p} is off the board (expected 0..{BOARD_SIZE})"
        )),
        _ => Ok(()),
    }
}

fn check_properties(patch: &PlayerPatch) -> Result<(), String> {
    let Some(properties) = &patch.properties else {
        return Ok(());
    };
    match properties.iter().find(|sq| !is_on_board(**sq)) {
        Some(sq) => Err(format!(
            "property {sq} is off the board (expected 0..{BOARD_SIZE})"
        )),
        None => Ok(()),
    }
}

fn check_jail_turns(patch: &PlayerPatch) -> Result<(), String> {
    match patch.jail_turns {
        Some(t) if !(0..=MAX_JAIL_TURNS).contains(&t) => Err(format!(
            "jail_turns {t} must be between 0 and {MAX_JAIL_TURNS}"
        )),
        _ => Ok(()),
    }
}

fn check_cash_not_negative(patch: &PlayerPatch) -> Result<(), String> {
    match patch.cash {
        Some(c) if c < 0 => Err(format!("cash {c} must not be negative")),
        _ => Ok(()),
    }
}

/// Decides which fields a caller may write and which rules apply to them.
pub trait WritePolicy: Send + Sync {
    fn name(&self) -> &'static str;

    fn allows(&self, rule: &FieldRule) -> bool;

    fn enforces_invariants(&self) -> bool;

    /// Validates the whole patch before anything is written.
    ///
    /// Returns the first violation in rule-table order.
    fn validate(&self, patch: &PlayerPatch) -> Result<(), FieldViolation> {
        for rule in FIELD_RULES.iter().filter(|r| patch.has(r.field)) {
            if !self.allows(rule) {
                return Err(FieldViolation::new(
                    rule.field,
                    ViolationReason::NotWritable,
                    format!("field '{}' is not writable", rule.field.as_str()),
                ));
            }
            if let Some(check) = rule.structural {
                check(patch).map_err(|detail| {
                    FieldViolation::new(rule.field, ViolationReason::OutOfRange, detail)
                })?;
            }
            if self.enforces_invariants() {
                if let Some(check) = rule.invariant {
                    check(patch).map_err(|detail| {
                        FieldViolation::new(rule.field, ViolationReason::Invariant, detail)
                    })?;
                }
            }
        }
        Ok(())
    }
}

pub struct NormalWritePolicy;

impl WritePolicy for NormalWritePolicy {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn allows(&self, rule: &FieldRule) -> bool {
        rule.normal_writable
    }

    fn enforces_invariants(&self) -> bool {
        true
    }
}

pub struct AdminWritePolicy;

impl WritePolicy for AdminWritePolicy {
    fn name(&self) -> &'static str {
        "admin"
    }

    fn allows(&self, rule: &FieldRule) -> bool {
        rule.admin_writable
    }

    fn enforces_invariants(&self) -> bool {
        false
    }
}

pub fn select_policy(is_admin: bool) -> &'static dyn WritePolicy {
    if is_admin {
        &AdminWritePolicy
    } else {
        &NormalWritePolicy
    }
}
