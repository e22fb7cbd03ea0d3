//! Field descriptor table for [`Options`].
//!
//! The table lists every field in declaration order with its kind and legal
//! domain. The serializer and parser walk it positionally, the validator reads
//! domains from it, and the enumerator derives candidate values from it, so the
//! four never disagree about the record's shape.
use crate::options::{Options, SANDBOXES};
use std::fmt;
use thiserror::Error;

/// Identifies one field of [`Options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Threaded,
    Collide,
    Repeat,
    Procs,
    Sandbox,
    Fault,
    FaultCall,
    FaultNth,
    EnableTun,
    UseTmpDir,
    HandleSegv,
    WaitRepeat,
    Debug,
    Repro,
}

/// Value kind as it appears in the canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Str,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::Str => "string",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Legal values of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Any boolean.
    Flag,
    /// A count bounded below; `samples` are the representative values to
    /// enumerate.
    Count {
        min: i64,
        samples: &'static [i64],
    },
    /// An index bounded below with an effectively unbounded range. Not
    /// enumerated; the baseline value is kept.
    Index { min: i64 },
    /// One of a fixed set of strings.
    Choice(&'static [&'static str]),
}

impl Domain {
    pub fn kind(&self) -> FieldKind {
        match self {
            Domain::Flag => FieldKind::Bool,
            Domain::Count { .. } | Domain::Index { .. } => FieldKind::Int,
            Domain::Choice(_) => FieldKind::Str,
        }
    }

    /// Lower bound for integer domains.
    pub fn min(&self) -> Option<i64> {
        match self {
            Domain::Count { min, .. } | Domain::Index { min } => Some(*min),
            Domain::Flag | Domain::Choice(_) => None,
        }
    }

    /// Representative values to enumerate, or `None` when the field keeps its
    /// baseline value.
    pub fn samples(&self) -> Option<Vec<FieldValue>> {
        match self {
            Domain::Flag => Some(vec![FieldValue::Bool(false), FieldValue::Bool(true)]),
            Domain::Count { samples, .. } => {
                Some(samples.iter().copied().map(FieldValue::Int).collect())
            }
            Domain::Index { .. } => None,
            Domain::Choice(choices) => Some(
                choices
                    .iter()
                    .map(|choice| FieldValue::Str(choice.to_string()))
                    .collect(),
            ),
        }
    }

    /// Whether `value` lies inside this domain. Values of the wrong kind never do.
    pub fn admits(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Domain::Flag, FieldValue::Bool(_)) => true,
            (Domain::Count { min, .. }, FieldValue::Int(v))
            | (Domain::Index { min }, FieldValue::Int(v)) => v >= min,
            (Domain::Choice(choices), FieldValue::Str(v)) => choices.contains(&v.as_str()),
            _ => false,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Flag => f.write_str("false|true"),
            Domain::Count { min, samples } => write!(f, ">= {min} (samples {samples:?})"),
            Domain::Index { min } => write!(f, ">= {min}"),
            Domain::Choice(choices) => write!(f, "{choices:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDesc {
    pub id: FieldId,
    /// Name used in the canonical text.
    pub name: &'static str,
    pub domain: Domain,
}

impl FieldDesc {
    pub fn kind(&self) -> FieldKind {
        self.domain.kind()
    }
}

/// All fields in declaration order. Append only.
pub static FIELDS: [FieldDesc; 14] = [
    FieldDesc {
        id: FieldId::Threaded,
        name: "Threaded",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::Collide,
        name: "Collide",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::Repeat,
        name: "Repeat",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::Procs,
        name: "Procs",
        domain: Domain::Count {
            min: 0,
            samples: &[1, 4],
        },
    },
    FieldDesc {
        id: FieldId::Sandbox,
        name: "Sandbox",
        domain: Domain::Choice(SANDBOXES),
    },
    FieldDesc {
        id: FieldId::Fault,
        name: "Fault",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::FaultCall,
        name: "FaultCall",
        domain: Domain::Index { min: -1 },
    },
    FieldDesc {
        id: FieldId::FaultNth,
        name: "FaultNth",
        domain: Domain::Index { min: 0 },
    },
    FieldDesc {
        id: FieldId::EnableTun,
        name: "EnableTun",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::UseTmpDir,
        name: "UseTmpDir",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::HandleSegv,
        name: "HandleSegv",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::WaitRepeat,
        name: "WaitRepeat",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::Debug,
        name: "Debug",
        domain: Domain::Flag,
    },
    FieldDesc {
        id: FieldId::Repro,
        name: "Repro",
        domain: Domain::Flag,
    },
];

/// Look up a descriptor by its canonical name.
pub fn field(name: &str) -> Option<&'static FieldDesc> {
    FIELDS.iter().find(|desc| desc.name == name)
}

/// A single field's value, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Str(_) => FieldKind::Str,
        }
    }
}

/// Renders the value exactly as it appears after `Name:` in the canonical text.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Str(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field {field} holds a {expected} value, got {found}")]
    KindMismatch {
        field: &'static str,
        expected: FieldKind,
        found: FieldKind,
    },
}

impl Options {
    pub fn get(&self, id: FieldId) -> FieldValue {
        match id {
            FieldId::Threaded => FieldValue::Bool(self.threaded),
            FieldId::Collide => FieldValue::Bool(self.collide),
            FieldId::Repeat => FieldValue::Bool(self.repeat),
            FieldId::Procs => FieldValue::Int(self.procs),
            FieldId::Sandbox => FieldValue::Str(self.sandbox.clone()),
            FieldId::Fault => FieldValue::Bool(self.fault),
            FieldId::FaultCall => FieldValue::Int(self.fault_call),
            FieldId::FaultNth => FieldValue::Int(self.fault_nth),
            FieldId::EnableTun => FieldValue::Bool(self.enable_tun),
            FieldId::UseTmpDir => FieldValue::Bool(self.use_tmp_dir),
            FieldId::HandleSegv => FieldValue::Bool(self.handle_segv),
            FieldId::WaitRepeat => FieldValue::Bool(self.wait_repeat),
            FieldId::Debug => FieldValue::Bool(self.debug),
            FieldId::Repro => FieldValue::Bool(self.repro),
        }
    }

    /// Assign a field by id. The record is left untouched when the value's
    /// kind does not match the field.
    pub fn set(&mut self, id: FieldId, value: FieldValue) -> Result<(), FieldError> {
        match (id, value) {
            (FieldId::Threaded, FieldValue::Bool(v)) => self.threaded = v,
            (FieldId::Collide, FieldValue::Bool(v)) => self.collide = v,
            (FieldId::Repeat, FieldValue::Bool(v)) => self.repeat = v,
            (FieldId::Procs, FieldValue::Int(v)) => self.procs = v,
            (FieldId::Sandbox, FieldValue::Str(v)) => self.sandbox = v,
            (FieldId::Fault, FieldValue::Bool(v)) => self.fault = v,
            (FieldId::FaultCall, FieldValue::Int(v)) => self.fault_call = v,
            (FieldId::FaultNth, FieldValue::Int(v)) => self.fault_nth = v,
            (FieldId::EnableTun, FieldValue::Bool(v)) => self.enable_tun = v,
            (FieldId::UseTmpDir, FieldValue::Bool(v)) => self.use_tmp_dir = v,
            (FieldId::HandleSegv, FieldValue::Bool(v)) => self.handle_segv = v,
            (FieldId::WaitRepeat, FieldValue::Bool(v)) => self.wait_repeat = v,
            (FieldId::Debug, FieldValue::Bool(v)) => self.debug = v,
            (FieldId::Repro, FieldValue::Bool(v)) => self.repro = v,
            (id, value) => {
                let desc = descriptor(id);
                return Err(FieldError::KindMismatch {
                    field: desc.name,
                    expected: desc.kind(),
                    found: value.kind(),
                });
            }
        }
        Ok(())
    }
}

/// Descriptor for `id`. Every id has exactly one table entry.
pub fn descriptor(id: FieldId) -> &'static FieldDesc {
    &FIELDS[id as usize]
}
