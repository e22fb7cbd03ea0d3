//! Decoder for the canonical options text, including legacy encodings.
//!
//! Decoding is positional: the parser walks [`FIELDS`] in declaration order and
//! expects exactly `Name:value` for each entry, separated by single spaces.
//! Key order is never relaxed, because stored legacy strings rely on it.
//!
//! Two encodings of an empty string value are accepted:
//! - `Sandbox: Fault:false` (canonical, value is empty before the separator)
//! - `Sandbox:Fault:false` (legacy, next field follows without a separator)
use crate::fields::{FieldDesc, FieldError, FieldKind, FieldValue, FIELDS};
use crate::options::Options;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("options text must start with '{{'")]
    MissingOpenBrace,
    #[error("options text must end with '}}'")]
    MissingCloseBrace,
    #[error("options text contains a nested or stray brace")]
    UnbalancedBraces,
    #[error("field {field} is missing")]
    MissingField { field: &'static str },
    #[error("expected field {expected}, found {found:?}")]
    UnexpectedField {
        expected: &'static str,
        found: String,
    },
    #[error("expected a single space before field {field}")]
    MissingSeparator { field: &'static str },
    #[error("field {field}: expected true or false, found {token:?}")]
    InvalidBool { field: &'static str, token: String },
    #[error("field {field}: invalid integer {token:?}")]
    InvalidInt {
        field: &'static str,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Parse canonical or legacy options text.
///
/// String fields are not checked against their domain here; run
/// [`crate::check`] on the result before trusting its semantics.
pub fn parse(text: &str) -> Result<Options, ParseError> {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
    let body = trimmed
        .strip_prefix('{')
        .ok_or(ParseError::MissingOpenBrace)?;
    let body = body
        .strip_suffix('}')
        .ok_or(ParseError::MissingCloseBrace)?;
    if body.contains(['{', '}']) {
        return Err(ParseError::UnbalancedBraces);
    }

    let mut opts = Options::default();
    let mut rest = body;
    let mut glued = false;
    for (idx, desc) in FIELDS.iter().enumerate() {
        if rest.is_empty() {
            return Err(ParseError::MissingField { field: desc.name });
        }
        if idx > 0 && !glued {
            rest = rest
                .strip_prefix(' ')
                .ok_or(ParseError::MissingSeparator { field: desc.name })?;
        }
        rest = expect_name(rest, desc)?;

        let (token, tail) = split_token(rest);
        let value = match desc.kind() {
            FieldKind::Bool => parse_bool(desc, token)?,
            FieldKind::Int => parse_int(desc, token)?,
            FieldKind::Str => {
                glued = FIELDS
                    .get(idx + 1)
                    .is_some_and(|next| starts_with_field(token, next));
                if glued {
                    tracing::trace!(field = desc.name, "legacy empty value without separator");
                    opts.set(desc.id, FieldValue::Str(String::new()))?;
                    continue;
                }
                FieldValue::Str(token.to_string())
            }
        };
        opts.set(desc.id, value)?;
        rest = tail;
        glued = false;
    }

    if !rest.is_empty() {
        return Err(ParseError::TrailingInput(rest.to_string()));
    }
    Ok(opts)
}

impl FromStr for Options {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}

fn expect_name<'a>(rest: &'a str, desc: &FieldDesc) -> Result<&'a str, ParseError> {
    if let Some(after) = rest
        .strip_prefix(desc.name)
        .and_then(|after| after.strip_prefix(':'))
    {
        return Ok(after);
    }
    let found = rest.split([':', ' ']).next().unwrap_or_default();
    Err(ParseError::UnexpectedField {
        expected: desc.name,
        found: found.to_string(),
    })
}

fn starts_with_field(token: &str, desc: &FieldDesc) -> bool {
    token
        .strip_prefix(desc.name)
        .is_some_and(|after| after.starts_with(':'))
}

/// Split off the value token, which runs to the next space or end of body.
fn split_token(rest: &str) -> (&str, &str) {
    match rest.find(' ') {
        Some(end) => rest.split_at(end),
        None => (rest, ""),
    }
}

fn parse_bool(desc: &FieldDesc, token: &str) -> Result<FieldValue, ParseError> {
    match token {
        "true" => Ok(FieldValue::Bool(true)),
        "false" => Ok(FieldValue::Bool(false)),
        _ => Err(ParseError::InvalidBool {
            field: desc.name,
            token: token.to_string(),
        }),
    }
}

fn parse_int(desc: &FieldDesc, token: &str) -> Result<FieldValue, ParseError> {
    token
        .parse::<i64>()
        .map(FieldValue::Int)
        .map_err(|source| ParseError::InvalidInt {
            field: desc.name,
            token: token.to_string(),
            source,
        })
}
