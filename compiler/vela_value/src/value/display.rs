//! User-facing rendering of values.
//!
//! `Display` writes what a program would print (`[1, 2]`, `Some(3)`,
//! `Point { x: 1 }`, `Color::Red`). `Debug` adds the recorded type, kind and
//! flags.

use std::fmt;

use vela_stack::ensure_sufficient_stack;
use vela_types::{Type, TypeData};

use super::{Payload, Value};
use crate::kind::Kind;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            f.write_str("Ok(")?;
            write_payload(f, &self.payload, &self.ty)?;
            return f.write_str(")");
        }
        if self.is_err() {
            f.write_str("Err(")?;
            write_payload(f, &self.payload, &self.ty)?;
            return f.write_str(")");
        }
        write_payload(f, &self.payload, &self.ty)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("ty", &self.type_name())
            .field("kind", &self.kind)
            .field("flags", &self.flags)
            .field("payload", &self.payload)
            .finish()
    }
}

/// Write `payload` as a value of type `ty`.
///
/// Children are values with their own types; `ty` only decides how this
/// level is framed (maybe wrapper, struct name, enum member).
fn write_payload(f: &mut fmt::Formatter<'_>, payload: &Payload, ty: &Type) -> fmt::Result {
    ensure_sufficient_stack(|| match (ty.data(), payload) {
        (TypeData::Maybe(_), Payload::Absent) => f.write_str("None"),
        (TypeData::Maybe(inner), payload) => {
            f.write_str("Some(")?;
            write_payload(f, payload, inner)?;
            f.write_str(")")
        }
        (TypeData::Enum(def), Payload::Int(d)) => match def.variant_name(*d) {
            Some(member) => write!(f, "{}::{member}", def.name),
            None => write!(f, "{}({d})", def.name),
        },
        (TypeData::Struct(def), Payload::Map(fields)) => {
            write!(f, "{} {{", def.name)?;
            // Declared fields first, in declaration order.
            let declared = def.fields.iter().map(|(name, _)| &**name);
            let extra = fields
                .keys()
                .map(String::as_str)
                .filter(|name| def.field(name).is_none());
            let mut first = true;
            for name in declared.chain(extra) {
                if let Some(value) = fields.get(name) {
                    f.write_str(if first { " " } else { ", " })?;
                    first = false;
                    write!(f, "{name}: {value}")?;
                }
            }
            f.write_str(if first { "}" } else { " }" })
        }
        (_, Payload::Absent) => {
            f.write_str(if Kind::for_type(ty) == Kind::Void { "void" } else { "<absent>" })
        }
        (_, Payload::Bool(b)) => write!(f, "{b}"),
        (_, Payload::Int(n)) => write!(f, "{n}"),
        (_, Payload::Float(x)) => write!(f, "{x}"),
        (_, Payload::Str(s)) => f.write_str(s),
        (_, Payload::List(items)) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str("]")
        }
        (_, Payload::Map(entries)) => {
            f.write_str("{")?;
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: {value}")?;
            }
            f.write_str("}")
        }
        (_, Payload::Function(_)) => write!(f, "<{ty}>"),
        (_, Payload::Dynamic(data)) => write!(f, "{data}"),
    })
}
