//! Canonical text encoding: `{Name:value Name:value ...}` in declaration order.
use crate::fields::FIELDS;
use crate::options::Options;
use std::fmt;

pub fn serialize(opts: &Options) -> String {
    opts.to_string()
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, desc) in FIELDS.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", desc.name, self.get(desc.id))?;
        }
        f.write_str("}")
    }
}
