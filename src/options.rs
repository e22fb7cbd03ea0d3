//! The options record describing how a generated reproducer is built and run.
//!
//! Field declaration order is part of the stored text format: new fields may
//! only ever be appended after `repro`.
use serde::{Deserialize, Serialize};

pub const SANDBOX_EMPTY: &str = "";
pub const SANDBOX_NONE: &str = "none";
pub const SANDBOX_SETUID: &str = "setuid";
pub const SANDBOX_NAMESPACE: &str = "namespace";

/// Every sandbox value the validator accepts.
pub const SANDBOXES: &[&str] = &[
    SANDBOX_EMPTY,
    SANDBOX_NONE,
    SANDBOX_SETUID,
    SANDBOX_NAMESPACE,
];

/// Sentinel for `fault_call` when no call is targeted.
pub const FAULT_CALL_UNSET: i64 = -1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct Options {
    pub threaded: bool,
    pub collide: bool,
    pub repeat: bool,
    pub procs: i64,
    pub sandbox: String,
    pub fault: bool,
    pub fault_call: i64,
    pub fault_nth: i64,
    pub enable_tun: bool,
    pub use_tmp_dir: bool,
    pub handle_segv: bool,
    pub wait_repeat: bool,
    pub debug: bool,
    pub repro: bool,
}

impl Options {
    /// Whether the record is valid per [`crate::check`].
    pub fn is_valid(&self) -> bool {
        crate::check::check(self).is_ok()
    }
}
