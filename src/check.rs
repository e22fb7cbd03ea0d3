//! Semantic validation of an [`Options`] record.
//!
//! Domain rules come from the field descriptor table; cross-field rules are
//! listed in [`check`]. Validation never modifies the record.
use crate::fields::{Domain, FieldValue, FIELDS};
use crate::options::{Options, SANDBOX_NAMESPACE};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("{field} {value:?} is not one of {allowed:?}")]
    UnknownChoice {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("{field} {value} is below the minimum of {min}")]
    BelowMinimum {
        field: &'static str,
        value: i64,
        min: i64,
    },
    #[error("Collide without Threaded")]
    CollideWithoutThreaded,
    #[error("Procs {procs} without Repeat")]
    ProcsWithoutRepeat { procs: i64 },
    #[error("Sandbox=namespace without UseTmpDir")]
    NamespaceWithoutTmpDir,
    #[error("Fault without FaultCall")]
    FaultWithoutCall,
}

impl CheckError {
    /// Stable reason code for reports and logs.
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::UnknownChoice { field: "Sandbox", .. } => "unknown_sandbox",
            CheckError::UnknownChoice { .. } => "unknown_choice",
            CheckError::BelowMinimum { .. } => "below_minimum",
            CheckError::CollideWithoutThreaded => "collide_without_threaded",
            CheckError::ProcsWithoutRepeat { .. } => "procs_without_repeat",
            CheckError::NamespaceWithoutTmpDir => "namespace_without_tmp_dir",
            CheckError::FaultWithoutCall => "fault_without_call",
        }
    }
}

/// Validate `opts`, returning the first violated rule.
///
/// Rules, in evaluation order:
/// - every field lies in its declared domain
/// - `Collide` requires `Threaded`
/// - `Procs > 1` requires `Repeat`
/// - the namespace sandbox requires `UseTmpDir`
/// - `Fault` requires a target call (`FaultCall >= 0`)
pub fn check(opts: &Options) -> Result<(), CheckError> {
    for desc in &FIELDS {
        let value = opts.get(desc.id);
        if desc.domain.admits(&value) {
            continue;
        }
        return Err(match (desc.domain, value) {
            (Domain::Choice(allowed), FieldValue::Str(value)) => CheckError::UnknownChoice {
                field: desc.name,
                value,
                allowed,
            },
            (domain, FieldValue::Int(value)) => CheckError::BelowMinimum {
                field: desc.name,
                value,
                min: domain.min().unwrap_or(value),
            },
            // Flags admit every boolean and `get` always returns the
            // declared kind.
            (_, value) => CheckError::UnknownChoice {
                field: desc.name,
                value: value.to_string(),
                allowed: &[],
            },
        });
    }

    if opts.collide && !opts.threaded {
        return Err(CheckError::CollideWithoutThreaded);
    }
    if opts.procs > 1 && !opts.repeat {
        return Err(CheckError::ProcsWithoutRepeat { procs: opts.procs });
    }
    if opts.sandbox == SANDBOX_NAMESPACE && !opts.use_tmp_dir {
        return Err(CheckError::NamespaceWithoutTmpDir);
    }
    if opts.fault && opts.fault_call < 0 {
        return Err(CheckError::FaultWithoutCall);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{FAULT_CALL_UNSET, SANDBOXES, SANDBOX_NONE};

    fn canned() -> Options {
        Options {
            threaded: true,
            collide: true,
            repeat: true,
            procs: 1,
            sandbox: SANDBOX_NONE.to_string(),
            fault_call: FAULT_CALL_UNSET,
            enable_tun: true,
            use_tmp_dir: true,
            handle_segv: true,
            wait_repeat: true,
            ..Default::default()
        }
    }

    #[test]
    fn zero_value_record_is_valid() {
        assert_eq!(check(&Options::default()), Ok(()));
    }

    #[test]
    fn canned_records_are_valid() {
        assert_eq!(check(&canned()), Ok(()));
        let empty_sandbox = Options {
            sandbox: String::new(),
            ..canned()
        };
        assert_eq!(check(&empty_sandbox), Ok(()));
    }

    #[test]
    fn every_known_sandbox_is_accepted() {
        for sandbox in SANDBOXES {
            let opts = Options {
                sandbox: sandbox.to_string(),
                ..canned()
            };
            assert_eq!(check(&opts), Ok(()), "{sandbox:?}");
        }
    }

    #[test]
    fn rejects_unknown_sandbox() {
        for sandbox in ["android", "None", " none", "setuid "] {
            let opts = Options {
                sandbox: sandbox.to_string(),
                ..canned()
            };
            let err = check(&opts).expect_err("unknown sandbox");
            assert_eq!(err.code(), "unknown_sandbox", "{sandbox:?}");
        }
    }

    #[test]
    fn rejects_negative_counts_and_indices() {
        let procs = Options {
            procs: -1,
            ..canned()
        };
        assert_eq!(
            check(&procs),
            Err(CheckError::BelowMinimum {
                field: "Procs",
                value: -1,
                min: 0,
            })
        );
        let fault_call = Options {
            fault_call: -2,
            ..canned()
        };
        assert_eq!(check(&fault_call).map_err(|e| e.code()), Err("below_minimum"));
        let fault_nth = Options {
            fault_nth: -1,
            ..canned()
        };
        assert_eq!(check(&fault_nth).map_err(|e| e.code()), Err("below_minimum"));
    }

    #[test]
    fn collide_requires_threaded() {
        let opts = Options {
            threaded: false,
            ..canned()
        };
        assert_eq!(check(&opts), Err(CheckError::CollideWithoutThreaded));
    }

    #[test]
    fn multiple_procs_require_repeat() {
        let opts = Options {
            repeat: false,
            procs: 4,
            ..canned()
        };
        assert_eq!(check(&opts), Err(CheckError::ProcsWithoutRepeat { procs: 4 }));
        let single = Options {
            repeat: false,
            ..canned()
        };
        assert_eq!(check(&single), Ok(()));
    }

    #[test]
    fn namespace_requires_tmp_dir() {
        let opts = Options {
            sandbox: SANDBOX_NAMESPACE.to_string(),
            use_tmp_dir: false,
            ..canned()
        };
        assert_eq!(check(&opts), Err(CheckError::NamespaceWithoutTmpDir));
    }

    #[test]
    fn fault_requires_target_call() {
        let opts = Options {
            fault: true,
            ..canned()
        };
        assert_eq!(check(&opts), Err(CheckError::FaultWithoutCall));
        let targeted = Options {
            fault: true,
            fault_call: 3,
            fault_nth: 2,
            ..canned()
        };
        assert_eq!(check(&targeted), Ok(()));
    }

    #[test]
    fn check_does_not_modify_record() {
        let opts = Options {
            sandbox: "bogus".to_string(),
            ..canned()
        };
        let before = opts.clone();
        let _ = check(&opts);
        assert_eq!(opts, before);
    }
}
