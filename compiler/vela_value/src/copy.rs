//! Copy engine.
//!
//! [`Value::copy`] produces a value whose mutations are invisible to the
//! original and vice versa. The policy is chosen per kind:
//!
//! | Kind | Policy |
//! |---|---|
//! | struct, list, map | copy every child recursively |
//! | maybe | copy the payload if filled; nothing to copy if empty |
//! | result | copy the payload of the arm |
//! | enum | shallow: the payload is an immutable discriminant |
//! | function | shared: closures are immutable to aliases |
//! | dynamic | structural copy of the host tree |
//! | void, str, int, float, bool | shallow: scalars are immutable |
//! | unknown | recursive, since the payload shape is not known |
//!
//! Variant flags and the retained result origin travel with the copy.

use std::sync::Arc;

use vela_stack::ensure_sufficient_stack;

use crate::kind::Kind;
use crate::value::{Payload, Value};

impl Value {
    /// Duplicate this value for a second owner.
    pub fn copy(&self) -> Value {
        let payload = match self.kind() {
            Kind::Struct | Kind::List | Kind::Map => self.payload_copy(),
            Kind::Maybe => {
                if self.is_none() {
                    Payload::Absent
                } else {
                    self.payload_copy()
                }
            }
            Kind::Result | Kind::Dynamic | Kind::Unknown => self.payload_copy(),
            Kind::Enum | Kind::Function => self.payload_share(),
            Kind::Void | Kind::Str | Kind::Int | Kind::Float | Kind::Bool => self.payload_share(),
        };
        let mut copy = Value::with_type(self.ty().clone(), payload);
        copy.flags = self.flags;
        copy.origin.clone_from(&self.origin);
        copy
    }

    /// Payload with every child value copied.
    pub(crate) fn payload_copy(&self) -> Payload {
        ensure_sufficient_stack(|| match &self.payload {
            Payload::List(items) => Payload::List(items.iter().map(Value::copy).collect()),
            Payload::Map(entries) => Payload::Map(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.copy()))
                    .collect(),
            ),
            Payload::Dynamic(data) => Payload::Dynamic(data.clone()),
            Payload::Absent
            | Payload::Bool(_)
            | Payload::Int(_)
            | Payload::Float(_)
            | Payload::Str(_)
            | Payload::Function(_) => self.payload_share(),
        })
    }

    /// Payload sharing immutable data with this value.
    ///
    /// Owned children cannot be shared, so a container payload reached here
    /// (a kind/payload disagreement) still gets a full copy rather than an
    /// alias.
    fn payload_share(&self) -> Payload {
        match &self.payload {
            Payload::Absent => Payload::Absent,
            Payload::Bool(b) => Payload::Bool(*b),
            Payload::Int(n) => Payload::Int(*n),
            Payload::Float(x) => Payload::Float(*x),
            Payload::Str(s) => Payload::Str(Arc::clone(s)),
            Payload::Function(closure) => Payload::Function(Arc::clone(closure)),
            Payload::List(_) | Payload::Map(_) | Payload::Dynamic(_) => self.payload_copy(),
        }
    }
}

impl Clone for Value {
    /// Same as [`Value::copy`].
    fn clone(&self) -> Self {
        self.copy()
    }
}
