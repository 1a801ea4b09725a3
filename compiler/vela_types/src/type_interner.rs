//! Sharded type interner.
//!
//! Structurally equal composite types built through the same interner share
//! one handle, which makes `Type::ptr_eq` a complete equality test for them.
//! Primitives never reach the shards: they resolve to the process-wide
//! singletons.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::data::{EnumDef, FunctionDef, Param, StructDef, TypeData, TypeVar};
use crate::Type;

/// Number of shards for type interning.
const NUM_SHARDS: usize = 16;

/// Per-shard storage for interned types.
struct TypeShard {
    map: FxHashMap<TypeData, Type>,
}

impl TypeShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

/// Sharded interner for composite types.
///
/// # Thread Safety
/// Uses one `RwLock` per shard. Wrap in [`SharedTypeInterner`] to share it
/// between the checker and the evaluator.
pub struct TypeInterner {
    shards: [RwLock<TypeShard>; NUM_SHARDS],
}

impl TypeInterner {
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(TypeShard::new())),
        }
    }

    #[inline]
    fn shard_for(data: &TypeData) -> usize {
        let mut hasher = rustc_hash::FxHasher::default();
        data.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash_usize = hasher.finish() as usize;
        hash_usize % NUM_SHARDS
    }

    /// Intern `data`, returning the existing handle if an equal type was
    /// interned before.
    pub fn intern(&self, data: TypeData) -> Type {
        if let Some(primitive) = Type::primitive(&data) {
            return primitive;
        }

        let shard = &self.shards[Self::shard_for(&data)];

        // Fast path: already interned
        if let Some(ty) = shard.read().map.get(&data) {
            return ty.clone();
        }

        let mut guard = shard.write();
        // Double-check after acquiring the write lock
        if let Some(ty) = guard.map.get(&data) {
            return ty.clone();
        }
        let ty = Type::build(data.clone());
        guard.map.insert(data, ty.clone());
        ty
    }

    pub fn list(&self, elem: Type) -> Type {
        self.intern(TypeData::List(elem))
    }

    pub fn map(&self, key: Type, value: Type) -> Type {
        self.intern(TypeData::Map { key, value })
    }

    pub fn maybe(&self, inner: Type) -> Type {
        self.intern(TypeData::Maybe(inner))
    }

    pub fn result(&self, ok: Type, err: Type) -> Type {
        self.intern(TypeData::Result { ok, err })
    }

    /// Struct with fields in declaration order.
    pub fn structure<N: Into<Arc<str>>>(
        &self,
        name: impl Into<Arc<str>>,
        type_args: impl IntoIterator<Item = Type>,
        fields: impl IntoIterator<Item = (N, Type)>,
    ) -> Type {
        self.intern(TypeData::Struct(StructDef {
            name: name.into(),
            type_args: type_args.into_iter().collect(),
            fields: fields
                .into_iter()
                .map(|(field, ty)| (field.into(), ty))
                .collect(),
        }))
    }

    /// Enum with `(member, discriminant)` pairs.
    pub fn enumeration<N: Into<Arc<str>>>(
        &self,
        name: impl Into<Arc<str>>,
        variants: impl IntoIterator<Item = (N, i64)>,
    ) -> Type {
        self.intern(TypeData::Enum(EnumDef {
            name: name.into(),
            variants: variants
                .into_iter()
                .map(|(variant, d)| (variant.into(), d))
                .collect(),
        }))
    }

    pub fn function(
        &self,
        name: Option<&str>,
        params: impl IntoIterator<Item = Param>,
        ret: Type,
    ) -> Type {
        self.intern(TypeData::Function(FunctionDef {
            name: name.map(Arc::from),
            params: params.into_iter().collect(),
            ret,
        }))
    }

    /// Open generic parameter `$name`.
    pub fn var(&self, name: impl Into<Arc<str>>) -> Type {
        self.intern(TypeData::Var(TypeVar::new(name)))
    }

    /// Number of interned composite types.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().map.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to one [`TypeInterner`].
///
/// The checker and the evaluator must intern into the same storage for
/// handle identity to hold across phases.
#[derive(Clone)]
pub struct SharedTypeInterner(Arc<TypeInterner>);

impl std::fmt::Debug for SharedTypeInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedTypeInterner")
            .field("len", &self.0.len())
            .finish()
    }
}

impl SharedTypeInterner {
    pub fn new() -> Self {
        SharedTypeInterner(Arc::new(TypeInterner::new()))
    }
}

impl Default for SharedTypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedTypeInterner {
    type Target = TypeInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
