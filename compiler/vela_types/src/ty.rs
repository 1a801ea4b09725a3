//! The `Type` handle.
//!
//! A `Type` is an `Arc` over immutable [`TypeData`] together with its rendered
//! name and [`TypeFlags`], both computed once at construction. Primitive
//! types are process-wide singletons: every call to [`Type::int`] returns a
//! handle to the same allocation, so primitives can be compared by identity.
//! Composite types get the same guarantee when they are built through one
//! [`TypeInterner`](crate::TypeInterner).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use crate::data::{EnumDef, FunctionDef, Param, ResultBranch, StructDef, TypeData};
use crate::flags::TypeFlags;
use crate::format;

/// Marker that appears in the rendered name of any type that still contains
/// an unresolved generic parameter.
pub const GENERIC_MARKER: char = '$';

struct TypeInner {
    data: TypeData,
    name: Arc<str>,
    flags: TypeFlags,
}

/// Immutable, cheaply clonable type descriptor.
#[derive(Clone)]
pub struct Type(Arc<TypeInner>);

struct Primitives {
    void: Type,
    str: Type,
    int: Type,
    float: Type,
    bool: Type,
    dynamic: Type,
}

static PRIMITIVES: LazyLock<Primitives> = LazyLock::new(|| Primitives {
    void: Type::build(TypeData::Void),
    str: Type::build(TypeData::Str),
    int: Type::build(TypeData::Int),
    float: Type::build(TypeData::Float),
    bool: Type::build(TypeData::Bool),
    dynamic: Type::build(TypeData::Dynamic),
});

impl Type {
    /// Build a fresh handle. Only the interner and the primitive table call
    /// this; everything else goes through them so identity stays meaningful.
    pub(crate) fn build(data: TypeData) -> Self {
        let name = format::render(&data);
        let flags = TypeFlags::compute(&data);
        Type(Arc::new(TypeInner {
            data,
            name: name.into(),
            flags,
        }))
    }

    /// Primitive singleton for `data`, if `data` is a primitive.
    pub(crate) fn primitive(data: &TypeData) -> Option<Self> {
        let p = &*PRIMITIVES;
        let ty = match data {
            TypeData::Void => &p.void,
            TypeData::Str => &p.str,
            TypeData::Int => &p.int,
            TypeData::Float => &p.float,
            TypeData::Bool => &p.bool,
            TypeData::Dynamic => &p.dynamic,
            _ => return None,
        };
        Some(ty.clone())
    }

    pub fn void() -> Self {
        PRIMITIVES.void.clone()
    }

    pub fn str() -> Self {
        PRIMITIVES.str.clone()
    }

    pub fn int() -> Self {
        PRIMITIVES.int.clone()
    }

    pub fn float() -> Self {
        PRIMITIVES.float.clone()
    }

    pub fn bool() -> Self {
        PRIMITIVES.bool.clone()
    }

    pub fn dynamic() -> Self {
        PRIMITIVES.dynamic.clone()
    }

    #[inline]
    pub fn data(&self) -> &TypeData {
        &self.0.data
    }

    /// Stable rendered name, e.g. `[Int]`, `Str?`, `$T`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Shared handle to the rendered name, for callers that cache it.
    #[inline]
    pub fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.0.name)
    }

    #[inline]
    pub fn flags(&self) -> TypeFlags {
        self.0.flags
    }

    /// Check whether two handles point at the same descriptor.
    #[inline]
    pub fn ptr_eq(a: &Type, b: &Type) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Check whether the rendered name still carries the generic marker.
    ///
    /// This is a textual check on purpose: it is what refinement keys on, and
    /// it agrees with `flags().has_var()` for every type this crate builds.
    #[inline]
    pub fn has_generics(&self) -> bool {
        self.name().contains(GENERIC_MARKER)
    }

    #[inline]
    pub fn is_var(&self) -> bool {
        self.data().is_var()
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        self.data().is_primitive()
    }

    pub fn is_maybe(&self) -> bool {
        matches!(self.data(), TypeData::Maybe(_))
    }

    pub fn is_result(&self) -> bool {
        matches!(self.data(), TypeData::Result { .. })
    }

    // Structural accessors. Each returns `None` when the type is not of the
    // matching shape.

    /// Element type of a list.
    pub fn elem(&self) -> Option<&Type> {
        match self.data() {
            TypeData::List(elem) => Some(elem),
            _ => None,
        }
    }

    /// Key type of a map.
    pub fn key(&self) -> Option<&Type> {
        match self.data() {
            TypeData::Map { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Value type of a map.
    pub fn value(&self) -> Option<&Type> {
        match self.data() {
            TypeData::Map { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Inner type of a maybe.
    pub fn inner(&self) -> Option<&Type> {
        match self.data() {
            TypeData::Maybe(inner) => Some(inner),
            _ => None,
        }
    }

    /// Success type of a result.
    pub fn ok(&self) -> Option<&Type> {
        self.branch(ResultBranch::Ok)
    }

    /// Failure type of a result.
    pub fn err(&self) -> Option<&Type> {
        self.branch(ResultBranch::Err)
    }

    /// Component type of one arm of a result.
    pub fn branch(&self, branch: ResultBranch) -> Option<&Type> {
        match (self.data(), branch) {
            (TypeData::Result { ok, .. }, ResultBranch::Ok) => Some(ok),
            (TypeData::Result { err, .. }, ResultBranch::Err) => Some(err),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructDef> {
        match self.data() {
            TypeData::Struct(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDef> {
        match self.data() {
            TypeData::Enum(def) => Some(def),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDef> {
        match self.data() {
            TypeData::Function(def) => Some(def),
            _ => None,
        }
    }

    /// Declared fields of a struct, in declaration order.
    pub fn fields(&self) -> &[(Arc<str>, Type)] {
        self.as_struct().map_or(&[], |def| &def.fields)
    }

    /// Declared type of one struct field.
    pub fn field(&self, name: &str) -> Option<&Type> {
        self.as_struct().and_then(|def| def.field(name))
    }

    /// Members of an enum with their discriminants.
    pub fn variants(&self) -> &[(Arc<str>, i64)] {
        self.as_enum().map_or(&[], |def| &def.variants)
    }

    /// Member name of an enum discriminant.
    pub fn variant_name(&self, discriminant: i64) -> Option<&str> {
        self.as_enum().and_then(|def| def.variant_name(discriminant))
    }

    /// Declared parameters of a function.
    pub fn params(&self) -> &[Param] {
        self.as_function().map_or(&[], |def| &def.params)
    }

    /// Return type of a function.
    pub fn ret(&self) -> Option<&Type> {
        self.as_function().map(|def| &def.ret)
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Type::ptr_eq(self, other) || self.data() == other.data()
    }
}

impl Eq for Type {}

impl Hash for Type {
    // Consistent with `Eq`: structurally equal types render identically.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Type {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
