//! Host-boundary decoding.
//!
//! [`Value::decode`] builds a value of a declared type from [`PlainData`]
//! handed over by the host (parsed JSON, command-line arguments, ...). This
//! is the one place where the input has not been through the checker, so
//! mismatches are reported as [`DecodeError`] instead of faulting.
//!
//! Accepted shapes:
//! - `Str`, `Int`, `Bool` from the matching scalar; `Float` from a float or
//!   an integer.
//! - `Dynamic` from anything, kept as is.
//! - lists from sequences; maps from mappings whose keys decode under the
//!   key type.
//! - `T?` from `null` (None) or anything `T` accepts (Some).
//! - `T!E` from a single-entry mapping `{"Ok": ..}` or `{"Err": ..}`,
//!   producing a narrowed arm that keeps the result type.
//! - structs from mappings with exactly the declared fields.
//! - enums from a member name or a declared discriminant.
//!
//! Void, functions and open type variables have no host representation.

use vela_stack::ensure_sufficient_stack;
use vela_types::{Type, TypeData};

use crate::errors::DecodeError;
use crate::map_key;
use crate::plain::PlainData;
use crate::value::Value;

impl Value {
    /// Build a value of type `ty` from host data.
    pub fn decode(data: &PlainData, ty: &Type) -> Result<Value, DecodeError> {
        decode_value(data, ty).inspect_err(|err| {
            tracing::debug!(ty = %ty, %err, "host data rejected");
        })
    }
}

fn decode_value(data: &PlainData, ty: &Type) -> Result<Value, DecodeError> {
    ensure_sufficient_stack(|| match (ty.data(), data) {
        (TypeData::Str, PlainData::Str(s)) => Ok(Value::str(s.as_str())),
        (TypeData::Int, PlainData::Int(n)) => Ok(Value::int(*n)),
        (TypeData::Bool, PlainData::Bool(b)) => Ok(Value::bool(*b)),
        (TypeData::Float, PlainData::Float(x)) => Ok(Value::float(*x)),
        (TypeData::Float, PlainData::Int(n)) => Ok(Value::float(widen(*n))),
        (TypeData::Dynamic, data) => Ok(Value::dynamic(data.clone())),

        (TypeData::List(elem), PlainData::List(items)) => {
            let items = items
                .iter()
                .map(|item| decode_value(item, elem))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::list(ty.clone(), items))
        }
        (TypeData::Map { key, value }, PlainData::Map(entries)) => {
            let mut map = Value::map(ty.clone());
            for (encoded, item) in entries {
                let key_value = map_key::try_decode_key(encoded, key)?;
                map.insert(&key_value, decode_value(item, value)?);
            }
            Ok(map)
        }

        (TypeData::Maybe(_), PlainData::Null) => Ok(Value::none_of(ty.clone())),
        (TypeData::Maybe(inner), data) => {
            let some = decode_value(data, inner)?;
            Ok(Value::none_of(ty.clone()).to_some(some))
        }

        (TypeData::Result { ok, err }, PlainData::Map(entries)) if entries.len() == 1 => {
            if let Some(data) = entries.get("Ok") {
                Ok(Value::make_ok_in(decode_value(data, ok)?, ty.clone()))
            } else if let Some(data) = entries.get("Err") {
                Ok(Value::make_err_in(decode_value(data, err)?, ty.clone()))
            } else {
                Err(DecodeError::mismatch(ty, data))
            }
        }

        (TypeData::Struct(def), PlainData::Map(entries)) => {
            if let Some(unknown) = entries.keys().find(|name| def.field(name).is_none()) {
                return Err(DecodeError::UnknownField {
                    struct_name: def.name.to_string(),
                    field: unknown.clone(),
                });
            }
            let mut fields = Vec::with_capacity(def.fields.len());
            for (name, field_ty) in def.fields.iter() {
                let Some(data) = entries.get(&**name) else {
                    return Err(DecodeError::MissingField {
                        struct_name: def.name.to_string(),
                        field: name.to_string(),
                    });
                };
                fields.push((name.to_string(), decode_value(data, field_ty)?));
            }
            Ok(Value::structure(ty.clone(), fields))
        }

        (TypeData::Enum(def), PlainData::Str(member)) => match def.discriminant(member) {
            Some(d) => Ok(Value::enum_member(ty.clone(), d)),
            None => Err(DecodeError::UnknownMember {
                enum_name: def.name.to_string(),
                member: format!("`{member}`"),
            }),
        },
        (TypeData::Enum(def), PlainData::Int(d)) => match def.variant_name(*d) {
            Some(_) => Ok(Value::enum_member(ty.clone(), *d)),
            None => Err(DecodeError::UnknownMember {
                enum_name: def.name.to_string(),
                member: d.to_string(),
            }),
        },

        (TypeData::Void | TypeData::Function(_) | TypeData::Var(_), _) => {
            Err(DecodeError::Unsupported {
                ty: ty.name().to_owned(),
            })
        }

        (
            TypeData::Str
            | TypeData::Int
            | TypeData::Bool
            | TypeData::Float
            | TypeData::List(_)
            | TypeData::Map { .. }
            | TypeData::Result { .. }
            | TypeData::Struct(_)
            | TypeData::Enum(_),
            _,
        ) => Err(DecodeError::mismatch(ty, data)),
    })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integer literals widen to Float like in source programs"
)]
fn widen(n: i64) -> f64 {
    n as f64
}
