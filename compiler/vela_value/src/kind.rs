//! Runtime kind tag derived from a `Type`.
//!
//! `Kind` is the closed set every per-value operation dispatches on. It is a
//! pure function of the value's `Type`: a `Value` never stores a kind that
//! disagrees with its type, and any operation that replaces the type
//! re-derives the kind in the same step.
//!
//! Adding a `TypeData` variant forces a new arm in [`Kind::for_type`], and a
//! new `Kind` forces new arms in copy, projection and equality; none of those
//! matches has a wildcard arm.

use std::fmt;

use vela_types::{Type, TypeData};

/// Coarse runtime category of a value.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    /// No type, or an unresolved generic parameter.
    Unknown,
    Void,
    Str,
    Int,
    Float,
    Bool,
    List,
    Map,
    /// Optional value that has not been unwrapped.
    Maybe,
    /// Result whose arm is not narrowed into the value's type yet.
    Result,
    Struct,
    Enum,
    Function,
    /// Untyped host data.
    Dynamic,
}

impl Kind {
    /// Derive the kind of `ty`. Total and O(1).
    pub fn for_type(ty: &Type) -> Kind {
        match ty.data() {
            TypeData::Void => Kind::Void,
            TypeData::Str => Kind::Str,
            TypeData::Int => Kind::Int,
            TypeData::Float => Kind::Float,
            TypeData::Bool => Kind::Bool,
            TypeData::Dynamic => Kind::Dynamic,
            TypeData::List(_) => Kind::List,
            TypeData::Map { .. } => Kind::Map,
            TypeData::Maybe(_) => Kind::Maybe,
            TypeData::Result { .. } => Kind::Result,
            TypeData::Struct(_) => Kind::Struct,
            TypeData::Enum(_) => Kind::Enum,
            TypeData::Function(_) => Kind::Function,
            TypeData::Var(_) => Kind::Unknown,
        }
    }

    /// Like [`Kind::for_type`], with an absent type mapping to `Unknown`.
    pub fn for_optional_type(ty: Option<&Type>) -> Kind {
        ty.map_or(Kind::Unknown, Kind::for_type)
    }

    /// Scalar kinds whose values are immutable and compared by value.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Kind::Void | Kind::Str | Kind::Int | Kind::Float | Kind::Bool
        )
    }

    /// Kinds whose payload owns child values.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, Kind::List | Kind::Map | Kind::Struct)
    }

    /// Kinds the evaluator may mutate in place.
    #[inline]
    pub const fn is_mutable(self) -> bool {
        matches!(self, Kind::List | Kind::Map | Kind::Struct | Kind::Dynamic)
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Unknown => "unknown",
            Kind::Void => "void",
            Kind::Str => "str",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Maybe => "maybe",
            Kind::Result => "result",
            Kind::Struct => "struct",
            Kind::Enum => "enum",
            Kind::Function => "function",
            Kind::Dynamic => "dynamic",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind::{}", self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Kind>() == 1);

#[cfg(test)]
mod tests;
