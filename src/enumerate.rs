//! Generators for valid option records, used to drive round-trip coverage.
//!
//! Candidate values come from each field's [`Domain::samples`]; index fields
//! keep their baseline value.
use crate::check::check;
use crate::fields::{Domain, FieldDesc, FIELDS};
use crate::options::Options;

/// Every valid record reachable from `base` by changing only `desc`.
pub fn enumerate_field(base: &Options, desc: &FieldDesc) -> Vec<Options> {
    candidates(base, desc)
        .into_iter()
        .filter(|opts| check(opts).is_ok())
        .collect()
}

/// Single-field variation from the zero-value record, over every field.
pub fn all_options_single() -> Vec<Options> {
    let base = Options::default();
    let opts: Vec<Options> = FIELDS
        .iter()
        .flat_map(|desc| enumerate_field(&base, desc))
        .collect();
    tracing::debug!(count = opts.len(), "enumerated single-field options");
    opts
}

/// Full cross product of every field's domain, keeping only valid records.
///
/// Filtering happens once at the end: a value that is only legal together
/// with a later field (namespace sandbox with `UseTmpDir`) must survive until
/// that field is set.
pub fn all_options_permutations() -> Vec<Options> {
    let mut opts = vec![Options::default()];
    for desc in &FIELDS {
        opts = opts
            .iter()
            .flat_map(|base| candidates(base, desc))
            .collect();
    }
    let total = opts.len();
    opts.retain(|opts| check(opts).is_ok());
    tracing::debug!(total, valid = opts.len(), "enumerated option permutations");
    opts
}

fn candidates(base: &Options, desc: &FieldDesc) -> Vec<Options> {
    let Some(values) = desc.domain.samples() else {
        return vec![base.clone()];
    };
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let mut opts = base.clone();
        if opts.set(desc.id, value).is_ok() {
            out.push(opts);
        }
    }
    out
}

/// Number of values the enumerator tries for `domain`.
pub fn sample_count(domain: &Domain) -> usize {
    domain.samples().map_or(1, |values| values.len())
}
