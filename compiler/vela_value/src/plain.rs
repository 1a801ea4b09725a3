//! Host-neutral data tree.
//!
//! `PlainData` serves two roles:
//! - the payload of `Dynamic` values, which carry untyped host data that is
//!   never validated against a declared element type;
//! - the output of projection, consumed by any `serde` encoder.
//!
//! Empty sequences and mappings serialize as `[]` and `{}`; nothing is ever
//! skipped.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Self-describing recursive value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlainData {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<PlainData>),
    Map(BTreeMap<String, PlainData>),
}

impl PlainData {
    /// Short name of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PlainData::Null => "null",
            PlainData::Bool(_) => "bool",
            PlainData::Int(_) => "int",
            PlainData::Float(_) => "float",
            PlainData::Str(_) => "string",
            PlainData::List(_) => "sequence",
            PlainData::Map(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PlainData::Null)
    }
}

impl From<bool> for PlainData {
    fn from(b: bool) -> Self {
        PlainData::Bool(b)
    }
}

impl From<i64> for PlainData {
    fn from(n: i64) -> Self {
        PlainData::Int(n)
    }
}

impl From<f64> for PlainData {
    fn from(f: f64) -> Self {
        PlainData::Float(f)
    }
}

impl From<&str> for PlainData {
    fn from(s: &str) -> Self {
        PlainData::Str(s.to_owned())
    }
}

impl From<String> for PlainData {
    fn from(s: String) -> Self {
        PlainData::Str(s)
    }
}

impl From<Vec<PlainData>> for PlainData {
    fn from(items: Vec<PlainData>) -> Self {
        PlainData::List(items)
    }
}

impl From<BTreeMap<String, PlainData>> for PlainData {
    fn from(entries: BTreeMap<String, PlainData>) -> Self {
        PlainData::Map(entries)
    }
}

/// JSON-like rendering for user output.
impl fmt::Display for PlainData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlainData::Null => f.write_str("null"),
            PlainData::Bool(b) => write!(f, "{b}"),
            PlainData::Int(n) => write!(f, "{n}"),
            PlainData::Float(x) => write!(f, "{x}"),
            PlainData::Str(s) => write!(f, "{s:?}"),
            PlainData::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            PlainData::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests;
