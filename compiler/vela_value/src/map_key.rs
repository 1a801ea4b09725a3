//! Canonical map-key encoding.
//!
//! Map entries are stored under a string form of the key value, chosen by
//! the map's declared key type:
//!
//! | Key type | Encoding |
//! |---|---|
//! | `Str` | the string itself |
//! | `Int` | decimal, e.g. `42`, `-7` |
//! | `Bool` | `true` / `false` |
//! | `Float` | shortest text that parses back to the same `f64`; `-0.0` is stored as `0` |
//! | `Dynamic` | JSON of the host data in tagged form, e.g. `{"List":[{"Int":1}]}` |
//!
//! Keys that compare equal encode identically. Dynamic keys are tagged and
//! carry floats as text because plain JSON cannot tell `NaN` or `inf` apart
//! from `null`.
//!
//! Every stored key was produced by [`encode_key`], so a key that fails to
//! decode means the map was corrupted; [`decode_key`] treats that as an
//! internal-consistency fault. The host boundary, which decodes keys it did
//! not encode, uses [`try_decode_key`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vela_stack::ensure_sufficient_stack;
use vela_types::{Type, TypeData};

use crate::errors::{consistency_fault, MapKeyError};
use crate::plain::PlainData;
use crate::value::{Payload, Value};

/// Encode `key` for a map whose declared key type is `key_ty`.
#[track_caller]
pub fn encode_key(key: &Value, key_ty: &Type) -> String {
    match (key_ty.data(), key.payload()) {
        (TypeData::Str, Payload::Str(s)) => s.to_string(),
        (TypeData::Int, Payload::Int(n)) => n.to_string(),
        (TypeData::Bool, Payload::Bool(b)) => b.to_string(),
        (TypeData::Float, Payload::Float(x)) => float_text(*x),
        (TypeData::Dynamic, Payload::Dynamic(data)) => {
            match serde_json::to_string(&KeyNode::from(data)) {
                Ok(text) => text,
                Err(err) => {
                    tracing::error!(%err, "dynamic map key is not encodable");
                    consistency_fault("JSON-encodable dynamic key", key.ty())
                }
            }
        }
        (TypeData::Str | TypeData::Int | TypeData::Bool | TypeData::Float | TypeData::Dynamic, _) => {
            consistency_fault(&format!("key of type `{key_ty}`"), key.ty())
        }
        _ => consistency_fault("Str, Int, Bool, Float or Dynamic key type", key_ty),
    }
}

/// Decode a key for a map whose declared key type is `key_ty`.
pub fn try_decode_key(encoded: &str, key_ty: &Type) -> Result<Value, MapKeyError> {
    let malformed = || MapKeyError::Malformed {
        encoded: encoded.to_owned(),
        key_type: key_ty.name().to_owned(),
    };
    match key_ty.data() {
        TypeData::Str => Ok(Value::str(encoded)),
        TypeData::Int => encoded.parse().map(Value::int).map_err(|_| malformed()),
        TypeData::Bool => match encoded {
            "true" => Ok(Value::bool(true)),
            "false" => Ok(Value::bool(false)),
            _ => Err(malformed()),
        },
        TypeData::Float => encoded.parse().map(Value::float).map_err(|_| malformed()),
        TypeData::Dynamic => serde_json::from_str::<KeyNode>(encoded)
            .ok()
            .and_then(KeyNode::into_plain)
            .map(Value::dynamic)
            .ok_or_else(malformed),
        _ => Err(MapKeyError::UnsupportedKeyType {
            key_type: key_ty.name().to_owned(),
        }),
    }
}

/// Decode a key this layer encoded. Faults if it does not decode.
#[track_caller]
pub fn decode_key(encoded: &str, key_ty: &Type) -> Value {
    match try_decode_key(encoded, key_ty) {
        Ok(key) => key,
        Err(err) => {
            tracing::error!(%err, "stored map key does not decode");
            consistency_fault(&format!("map key {encoded:?} decodable as `{key_ty}`"), key_ty)
        }
    }
}

/// Float text with both zeroes folded onto `0`.
fn float_text(x: f64) -> String {
    if x == 0.0 {
        "0".to_owned()
    } else {
        x.to_string()
    }
}

/// Tagged mirror of [`PlainData`] for Dynamic keys.
#[derive(Serialize, Deserialize)]
enum KeyNode {
    Null,
    Bool(bool),
    Int(i64),
    Float(String),
    Str(String),
    List(Vec<KeyNode>),
    Map(BTreeMap<String, KeyNode>),
}

impl From<&PlainData> for KeyNode {
    fn from(data: &PlainData) -> Self {
        ensure_sufficient_stack(|| match data {
            PlainData::Null => KeyNode::Null,
            PlainData::Bool(b) => KeyNode::Bool(*b),
            PlainData::Int(n) => KeyNode::Int(*n),
            PlainData::Float(x) => KeyNode::Float(float_text(*x)),
            PlainData::Str(s) => KeyNode::Str(s.clone()),
            PlainData::List(items) => KeyNode::List(items.iter().map(KeyNode::from).collect()),
            PlainData::Map(entries) => KeyNode::Map(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), KeyNode::from(value)))
                    .collect(),
            ),
        })
    }
}

impl KeyNode {
    /// `None` if a float does not parse.
    fn into_plain(self) -> Option<PlainData> {
        ensure_sufficient_stack(|| {
            Some(match self {
                KeyNode::Null => PlainData::Null,
                KeyNode::Bool(b) => PlainData::Bool(b),
                KeyNode::Int(n) => PlainData::Int(n),
                KeyNode::Float(text) => PlainData::Float(text.parse().ok()?),
                KeyNode::Str(s) => PlainData::Str(s),
                KeyNode::List(items) => PlainData::List(
                    items
                        .into_iter()
                        .map(KeyNode::into_plain)
                        .collect::<Option<_>>()?,
                ),
                KeyNode::Map(entries) => PlainData::Map(
                    entries
                        .into_iter()
                        .map(|(key, value)| Some((key, value.into_plain()?)))
                        .collect::<Option<_>>()?,
                ),
            })
        })
    }
}
