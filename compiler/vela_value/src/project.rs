//! Projection of values to host-neutral data.
//!
//! Functions project as their type's rendered signature rather than any
//! callable state. Lists, maps and structs project child by child. Every
//! other kind projects its raw payload. Map entries keep their canonical key
//! strings. Empty collections project to explicit empty sequences and
//! mappings.

use vela_stack::ensure_sufficient_stack;

use crate::kind::Kind;
use crate::plain::PlainData;
use crate::value::{Payload, Value};

impl Value {
    /// Convert this value tree to plain data for serialization.
    pub fn project(&self) -> PlainData {
        ensure_sufficient_stack(|| match self.kind() {
            Kind::Function => PlainData::Str(self.type_name().to_owned()),
            Kind::List
            | Kind::Map
            | Kind::Struct
            | Kind::Unknown
            | Kind::Void
            | Kind::Str
            | Kind::Int
            | Kind::Float
            | Kind::Bool
            | Kind::Maybe
            | Kind::Result
            | Kind::Enum
            | Kind::Dynamic => project_payload(&self.payload),
        })
    }

    /// Serialize the projection as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.project())
    }
}

fn project_payload(payload: &Payload) -> PlainData {
    match payload {
        Payload::Absent => PlainData::Null,
        Payload::Bool(b) => PlainData::Bool(*b),
        Payload::Int(n) => PlainData::Int(*n),
        Payload::Float(x) => PlainData::Float(*x),
        Payload::Str(s) => PlainData::Str(s.to_string()),
        Payload::List(items) => PlainData::List(items.iter().map(Value::project).collect()),
        Payload::Map(entries) => PlainData::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), value.project()))
                .collect(),
        ),
        // Kind/payload mismatch; no signature to render.
        Payload::Function(closure) => PlainData::Str(closure.name().unwrap_or("fn").to_owned()),
        Payload::Dynamic(data) => data.clone(),
    }
}

#[cfg(test)]
mod tests;
