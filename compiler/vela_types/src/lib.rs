//! Type descriptors for the Vela runtime.
//!
//! The checker owns type inference; this crate is the part of it the
//! evaluator sees at runtime:
//! - [`Type`]: immutable handle with a cached rendered name and [`TypeFlags`]
//! - [`TypeData`]: the structural variants behind a handle
//! - [`TypeInterner`]: deduplicating constructor for composite types
//! - [`TypeInterner::substitute`]: resolution of `$T` generic parameters
//!
//! Primitive types are process-wide singletons (`Type::int()`, ...).

mod data;
mod flags;
mod format;
mod substitute;
mod ty;
mod type_interner;

pub use data::{EnumDef, FunctionDef, Param, ResultBranch, StructDef, TypeData, TypeVar};
pub use flags::TypeFlags;
pub use substitute::Bindings;
pub use ty::{Type, GENERIC_MARKER};
pub use type_interner::{SharedTypeInterner, TypeInterner};
