//! Type properties computed once when a `Type` is built.
//!
//! Substitution and refinement ask "does this type still contain a type
//! variable?" on every call; the answer is cached here instead of walking
//! the type graph each time.

use bitflags::bitflags;

use crate::data::TypeData;
use crate::Type;

bitflags! {
    /// Cached type properties.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u16 {
        // === Presence ===
        /// Contains an unresolved type variable somewhere inside.
        const HAS_VAR = 1 << 0;

        // === Category ===
        /// One of the primitive singletons.
        const IS_PRIMITIVE = 1 << 8;
        /// List, map, maybe or result.
        const IS_CONTAINER = 1 << 9;
        /// Function signature.
        const IS_FUNCTION = 1 << 10;
        /// Struct or enum declaration.
        const IS_COMPOSITE = 1 << 11;
    }
}

impl TypeFlags {
    /// Flags inherited by a parent from its children.
    pub const PROPAGATE_MASK: Self = Self::HAS_VAR;

    /// Restrict child flags to the ones that propagate upward.
    #[inline]
    pub fn propagate_from(child: Self) -> Self {
        child & Self::PROPAGATE_MASK
    }

    /// Check for any unresolved type variable.
    #[inline]
    pub fn has_var(self) -> bool {
        self.contains(Self::HAS_VAR)
    }

    /// Union of the propagating flags of `children`.
    fn inherit<'a>(children: impl IntoIterator<Item = &'a Type>) -> Self {
        children
            .into_iter()
            .fold(Self::empty(), |acc, ty| acc | Self::propagate_from(ty.flags()))
    }

    /// Compute the flags of `data` from its own category and its children.
    pub fn compute(data: &TypeData) -> Self {
        match data {
            TypeData::Void
            | TypeData::Str
            | TypeData::Int
            | TypeData::Float
            | TypeData::Bool
            | TypeData::Dynamic => Self::IS_PRIMITIVE,
            TypeData::List(elem) | TypeData::Maybe(elem) => {
                Self::IS_CONTAINER | Self::propagate_from(elem.flags())
            }
            TypeData::Map { key, value } => Self::IS_CONTAINER | Self::inherit([key, value]),
            TypeData::Result { ok, err } => Self::IS_CONTAINER | Self::inherit([ok, err]),
            TypeData::Struct(def) => {
                Self::IS_COMPOSITE
                    | Self::inherit(def.type_args.iter().chain(def.fields.iter().map(|(_, ty)| ty)))
            }
            TypeData::Enum(_) => Self::IS_COMPOSITE,
            TypeData::Function(def) => {
                Self::IS_FUNCTION
                    | Self::inherit(
                        def.params
                            .iter()
                            .map(|p| &p.ty)
                            .chain(std::iter::once(&def.ret)),
                    )
            }
            TypeData::Var(_) => Self::HAS_VAR,
        }
    }
}
