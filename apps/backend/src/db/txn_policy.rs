//! What `with_txn` does with a transaction whose body succeeded.
//!
//! The policy is fixed once per process. Servers never set it and get
//! [`TxnPolicy::CommitOnOk`]; test binaries pick one from a `ctor`.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnPolicy {
    #[default]
    CommitOnOk,
    /// Roll back even on success, so a test leaves no rows behind.
    RollbackOnOk,
}

impl TxnPolicy {
    /// Parse `commit` / `rollback` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "commit" => Some(Self::CommitOnOk),
            "rollback" => Some(Self::RollbackOnOk),
            _ => None,
        }
    }
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or_default()
}

/// First call wins; later calls are ignored.
pub fn set_txn_policy(policy: TxnPolicy) {
    if POLICY.set(policy).is_err() && current() != policy {
        tracing::debug!(?policy, kept = ?current(), "txn policy already set");
    }
}
