//! Substitution of generic parameters.
//!
//! The checker resolves `$T` to a concrete type once it sees enough of the
//! program; `substitute` rebuilds a type with those bindings applied so the
//! evaluator can hand a concrete declared type to refinement.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use vela_stack::ensure_sufficient_stack;

use crate::data::{EnumDef, FunctionDef, Param, StructDef, TypeData};
use crate::{Type, TypeInterner};

/// Generic parameter name (without the `$` marker) to its resolved type.
pub type Bindings = FxHashMap<Arc<str>, Type>;

impl TypeInterner {
    /// Replace every bound type variable in `ty`.
    ///
    /// Unbound variables stay open. Types without variables are returned as
    /// the same handle.
    pub fn substitute(&self, ty: &Type, bindings: &Bindings) -> Type {
        if !ty.flags().has_var() || bindings.is_empty() {
            return ty.clone();
        }
        ensure_sufficient_stack(|| {
            let sub = |t: &Type| self.substitute(t, bindings);
            match ty.data() {
                TypeData::Var(var) => bindings.get(&var.name).cloned().unwrap_or_else(|| ty.clone()),
                TypeData::List(elem) => self.list(sub(elem)),
                TypeData::Maybe(inner) => self.maybe(sub(inner)),
                TypeData::Map { key, value } => self.map(sub(key), sub(value)),
                TypeData::Result { ok, err } => self.result(sub(ok), sub(err)),
                TypeData::Struct(def) => self.intern(TypeData::Struct(StructDef {
                    name: Arc::clone(&def.name),
                    type_args: def.type_args.iter().map(sub).collect(),
                    fields: def
                        .fields
                        .iter()
                        .map(|(name, field)| (Arc::clone(name), sub(field)))
                        .collect(),
                })),
                TypeData::Function(def) => self.intern(TypeData::Function(FunctionDef {
                    name: def.name.clone(),
                    params: def
                        .params
                        .iter()
                        .map(|p| Param {
                            name: Arc::clone(&p.name),
                            ty: sub(&p.ty),
                            mutable: p.mutable,
                        })
                        .collect(),
                    ret: sub(&def.ret),
                })),
                // No variables below these; unreachable past the flag check.
                TypeData::Enum(EnumDef { .. })
                | TypeData::Void
                | TypeData::Str
                | TypeData::Int
                | TypeData::Float
                | TypeData::Bool
                | TypeData::Dynamic => ty.clone(),
            }
        })
    }
}
