//! Reproducer program options: canonical text encoding, parser, validator,
//! and enumerators for exhaustive round-trip testing.
//!
//! Stored option strings must stay parseable forever, so the text layout is
//! positional and new fields are only ever appended.
pub mod check;
pub mod enumerate;
pub mod fields;
pub mod options;
pub mod parse;
pub mod serialize;

pub use check::{check, CheckError};
pub use enumerate::{all_options_permutations, all_options_single, enumerate_field};
pub use fields::{field, FieldDesc, FieldError, FieldId, FieldKind, FieldValue, FIELDS};
pub use options::Options;
pub use parse::{parse, ParseError};
pub use serialize::serialize;
