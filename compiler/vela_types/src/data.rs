//! Structural type data behind a [`Type`](crate::Type) handle.
//!
//! `TypeData` is what the interner deduplicates on. Children are `Type`
//! handles, so equality of two `TypeData` values only compares one level of
//! structure plus handle identity below it.

use std::sync::Arc;

use crate::Type;

/// Open generic parameter, rendered as `$name`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeVar {
    pub name: Arc<str>,
}

impl TypeVar {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        TypeVar { name: name.into() }
    }
}

/// Which arm of a `Result` a narrowed value came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResultBranch {
    Ok,
    Err,
}

/// A function parameter as declared.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Arc<str>,
    pub ty: Type,
    /// Declared `mut`: the callee may mutate the argument in place.
    pub mutable: bool,
}

impl Param {
    pub fn new(name: impl Into<Arc<str>>, ty: Type) -> Self {
        Param {
            name: name.into(),
            ty,
            mutable: false,
        }
    }

    pub fn mutable(name: impl Into<Arc<str>>, ty: Type) -> Self {
        Param {
            name: name.into(),
            ty,
            mutable: true,
        }
    }
}

/// User-defined struct.
///
/// Fields are kept in declaration order. `type_args` holds the arguments of
/// a generic struct (`Box<$T>` before instantiation, `Box<Int>` after) and
/// only affects rendering.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructDef {
    pub name: Arc<str>,
    pub type_args: Box<[Type]>,
    pub fields: Box<[(Arc<str>, Type)]>,
}

impl StructDef {
    /// Type of the named field, if the struct declares it.
    pub fn field(&self, name: &str) -> Option<&Type> {
        self.fields
            .iter()
            .find(|(field, _)| &**field == name)
            .map(|(_, ty)| ty)
    }
}

/// User-defined enum: named members with integer discriminants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumDef {
    pub name: Arc<str>,
    pub variants: Box<[(Arc<str>, i64)]>,
}

impl EnumDef {
    /// Member name for a discriminant.
    pub fn variant_name(&self, discriminant: i64) -> Option<&str> {
        self.variants
            .iter()
            .find(|(_, d)| *d == discriminant)
            .map(|(name, _)| &**name)
    }

    /// Discriminant of a named member.
    pub fn discriminant(&self, name: &str) -> Option<i64> {
        self.variants
            .iter()
            .find(|(variant, _)| &**variant == name)
            .map(|(_, d)| *d)
    }
}

/// Function signature. Named functions keep their name for rendering.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDef {
    pub name: Option<Arc<str>>,
    pub params: Box<[Param]>,
    pub ret: Type,
}

/// Every type the runtime can observe.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    // Primitives (process-wide singletons)
    Void,
    Str,
    Int,
    Float,
    Bool,
    /// Untyped host data.
    Dynamic,

    // Containers
    /// `[T]`
    List(Type),
    /// `[K:V]`
    Map { key: Type, value: Type },
    /// `T?`
    Maybe(Type),
    /// `T!E`
    Result { ok: Type, err: Type },

    // Declarations
    Struct(StructDef),
    Enum(EnumDef),
    Function(FunctionDef),

    /// Unresolved generic parameter.
    Var(TypeVar),
}

impl TypeData {
    /// Check if this is one of the primitive singletons.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeData::Void
                | TypeData::Str
                | TypeData::Int
                | TypeData::Float
                | TypeData::Bool
                | TypeData::Dynamic
        )
    }

    /// Check if this is a type variable.
    pub fn is_var(&self) -> bool {
        matches!(self, TypeData::Var(_))
    }
}
