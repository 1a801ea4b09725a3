//! Error types for the value layer.
//!
//! Two tiers:
//! - **Internal-consistency faults.** Reaching one means an upstream
//!   invariant already broke (the checker let a type error through, or a map
//!   key was not encoded by this layer). They are reported through
//!   [`consistency_fault`], which panics with the expected and the actual
//!   type. They are never turned into recoverable errors.
//! - **Recoverable errors.** [`MapKeyError`] from the fallible key decoder
//!   and [`DecodeError`] from host-boundary decoding, where the input is
//!   untrusted host data rather than something this layer produced.

use thiserror::Error;
use vela_types::Type;

/// Abort on a broken invariant, naming what was expected and what was found.
#[cold]
#[track_caller]
pub(crate) fn consistency_fault(expected: &str, actual: &Type) -> ! {
    tracing::error!(expected, actual = %actual, "value layer invariant violated");
    panic!("internal consistency fault: expected {expected}, found `{actual}`")
}

/// Failure to decode a canonical map key.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapKeyError {
    /// The key type cannot index a map.
    #[error("`{key_type}` cannot be used as a map key")]
    UnsupportedKeyType { key_type: String },
    /// The encoded text does not parse under the key type.
    #[error("map key {encoded:?} is not a valid `{key_type}`")]
    Malformed { encoded: String, key_type: String },
}

/// Failure to build a value from host-neutral data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected `{expected}`, found {found}")]
    TypeMismatch {
        expected: String,
        found: &'static str,
    },
    #[error("missing field `{field}` for struct `{struct_name}`")]
    MissingField { struct_name: String, field: String },
    #[error("struct `{struct_name}` has no field `{field}`")]
    UnknownField { struct_name: String, field: String },
    #[error("enum `{enum_name}` has no member {member}")]
    UnknownMember { enum_name: String, member: String },
    #[error("values of type `{ty}` cannot be decoded from host data")]
    Unsupported { ty: String },
    #[error(transparent)]
    Key(#[from] MapKeyError),
}

impl DecodeError {
    pub(crate) fn mismatch(expected: &Type, found: &crate::PlainData) -> Self {
        DecodeError::TypeMismatch {
            expected: expected.name().to_owned(),
            found: found.kind_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_types() {
        let err = MapKeyError::Malformed {
            encoded: "x1".to_owned(),
            key_type: "Int".to_owned(),
        };
        assert_eq!(err.to_string(), "map key \"x1\" is not a valid `Int`");

        let err = DecodeError::from(err);
        assert!(matches!(err, DecodeError::Key(_)));
        assert_eq!(err.to_string(), "map key \"x1\" is not a valid `Int`");

        let err = DecodeError::mismatch(&Type::bool(), &crate::PlainData::Int(1));
        assert_eq!(err.to_string(), "expected `Bool`, found int");
    }

    #[test]
    #[should_panic(expected = "internal consistency fault: expected list, found `Int`")]
    fn faults_panic_with_both_types() {
        consistency_fault("list", &Type::int());
    }
}
