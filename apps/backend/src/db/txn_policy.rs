use std::sync::OnceLock;

/// Whether `with_txn` commits or rolls back when the closure succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Commit the transaction when the operation succeeds (default behavior)
    CommitOnOk,
    /// Rollback the transaction when the operation succeeds (for testing)
    RollbackOnOk,
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Get the current transaction policy.
///
/// Returns `CommitOnOk` if no policy has been set.
pub fn current() -> TxnPolicy {
    POLICY.get().copied().unwrap_or(TxnPolicy::CommitOnOk)
}

/// Set the transaction policy for the process.
///
/// Only the first call has any effect.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}

/// Parse the `SCORELANE_TXN_POLICY` value used by test harnesses.
pub fn policy_from_env_value(value: Option<&str>) -> TxnPolicy {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if v == "commit" => TxnPolicy::CommitOnOk,
        Some(_) => TxnPolicy::RollbackOnOk,
        None => TxnPolicy::RollbackOnOk,
    }
}
