//! Value equality.
//!
//! Operands are assumed comparable (the checker already rejected comparing a
//! `Str` with an `Int`). Scalars compare by value. Containers and closures
//! compare by payload identity, so two separately built lists with equal
//! elements are *not* equal here; deep structural equality is decided above
//! this layer. Host data compares structurally and enum members compare by
//! discriminant, since both are immutable.

use std::sync::Arc;

use vela_stack::ensure_sufficient_stack;

use crate::kind::Kind;
use crate::plain::PlainData;
use crate::value::{Payload, Value};

impl Value {
    /// Check whether `self` and `other` are the same value.
    ///
    /// `NaN` equals itself so that equality stays reflexive.
    pub fn equals(&self, other: &Value) -> bool {
        match self.kind() {
            Kind::Void | Kind::Str | Kind::Int | Kind::Float | Kind::Bool | Kind::Enum => {
                scalar_eq(&self.payload, &other.payload)
            }
            Kind::Dynamic => match (&self.payload, &other.payload) {
                (Payload::Dynamic(a), Payload::Dynamic(b)) => plain_eq(a, b),
                _ => false,
            },
            Kind::Function => match (&self.payload, &other.payload) {
                (Payload::Function(a), Payload::Function(b)) => Arc::ptr_eq(a, b),
                _ => false,
            },
            Kind::Maybe => {
                if self.is_none() || other.is_none() {
                    self.is_none() == other.is_none()
                } else {
                    payload_identity(self, other)
                }
            }
            Kind::List | Kind::Map | Kind::Struct | Kind::Result | Kind::Unknown => {
                payload_identity(self, other)
            }
        }
    }
}

fn scalar_eq(a: &Payload, b: &Payload) -> bool {
    match (a, b) {
        (Payload::Absent, Payload::Absent) => true,
        (Payload::Bool(a), Payload::Bool(b)) => a == b,
        (Payload::Int(a), Payload::Int(b)) => a == b,
        (Payload::Float(a), Payload::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
        (Payload::Str(a), Payload::Str(b)) => a == b,
        _ => false,
    }
}

/// Structural equality of host data, with `NaN` equal to itself at any depth.
fn plain_eq(a: &PlainData, b: &PlainData) -> bool {
    ensure_sufficient_stack(|| match (a, b) {
        (PlainData::Float(x), PlainData::Float(y)) => x == y || (x.is_nan() && y.is_nan()),
        (PlainData::List(xs), PlainData::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| plain_eq(x, y))
        }
        (PlainData::Map(xs), PlainData::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|((kx, vx), (ky, vy))| kx == ky && plain_eq(vx, vy))
        }
        _ => a == b,
    })
}

/// Identity of the underlying payload. A `Some` maybe stores its element's
/// payload directly, so scalars inside it still compare by value.
fn payload_identity(a: &Value, b: &Value) -> bool {
    match (&a.payload, &b.payload) {
        (Payload::List(_) | Payload::Map(_), _) => std::ptr::eq(&a.payload, &b.payload),
        (Payload::Function(x), Payload::Function(y)) => Arc::ptr_eq(x, y),
        (Payload::Dynamic(x), Payload::Dynamic(y)) => plain_eq(x, y),
        (x, y) => scalar_eq(x, y),
    }
}

#[cfg(test)]
mod tests;
