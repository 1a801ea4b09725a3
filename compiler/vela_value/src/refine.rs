//! Refinement of still-generic value types.
//!
//! A generic return type can stay open through type checking, e.g. a chained
//! call whose receiver's type parameter is only resolved by a later
//! declaration. The evaluator then holds a value whose recorded type is
//! `$T`, `[$T]` or similar, and refines it against the first concrete
//! declared type a caller supplies (a `let` annotation, a parameter type, a
//! field type).
//!
//! [`Value::refine`] applies these steps in order:
//!
//! 1. If the value is a narrowed result arm, resolve its type from the
//!    `Result` type it came from (its own type if still `Result`, otherwise
//!    the retained origin). A declared `Result` type is narrowed to the same
//!    arm before the remaining steps, so a narrowed value never takes on
//!    kind `Result`. Without a retained origin the resolution is a no-op.
//! 2. A `Maybe` type is replaced wholesale with the declared type.
//! 3. An open type variable is replaced wholesale with the declared type.
//! 4. Otherwise, if the rendered type still has the generic marker and the
//!    declared type does not, the type is replaced and refinement recurses:
//!    list elements against the declared element type, map values (never
//!    keys) against the declared value type, struct fields against the
//!    declared field types.
//!
//! Kind and cached name are re-derived with every replacement. Refinement is
//! idempotent once the types agree, and relies on the type graph being
//! acyclic.

use vela_stack::ensure_sufficient_stack;
use vela_types::{Type, TypeData};

use crate::kind::Kind;
use crate::value::{Payload, Value};

impl Value {
    /// Refine this value's recorded type against `declared`, in place.
    #[tracing::instrument(level = "trace", skip_all, fields(from = %self.type_name(), declared = %declared))]
    pub fn refine(&mut self, declared: &Type) {
        self.refine_in_place(declared);
    }

    fn refine_in_place(&mut self, declared: &Type) {
        ensure_sufficient_stack(|| {
            let declared = self.resolve_branch(declared);
            let declared = &declared;

            if self.ty().is_maybe() || self.ty().is_var() {
                self.replace_type(declared);
            } else if self.ty().has_generics() && !declared.has_generics() {
                self.replace_type(declared);
                self.refine_children(declared);
            }
        });
    }

    /// Step 1. Returns the declared type the remaining steps compare
    /// against.
    fn resolve_branch(&mut self, declared: &Type) -> Type {
        let Some(branch) = self.branch() else {
            return declared.clone();
        };

        let definition = if self.kind() == Kind::Result {
            Some(self.ty().clone())
        } else {
            self.origin.clone()
        };
        if let Some(component) = definition.as_ref().and_then(|def| def.branch(branch)) {
            let component = component.clone();
            self.replace_type(&component);
        }

        match declared.branch(branch) {
            Some(component) => {
                self.origin = Some(declared.clone());
                component.clone()
            }
            None => {
                if definition.is_some() {
                    self.origin = definition;
                }
                declared.clone()
            }
        }
    }

    fn replace_type(&mut self, ty: &Type) {
        if self.ty() == ty {
            return;
        }
        tracing::debug!(from = %self.type_name(), to = %ty, "refined value type");
        self.retype(ty.clone());
    }

    fn refine_children(&mut self, declared: &Type) {
        match (&mut self.payload, declared.data()) {
            (Payload::List(items), TypeData::List(elem)) => {
                for item in items {
                    item.refine_in_place(elem);
                }
            }
            (Payload::Map(entries), TypeData::Map { value, .. }) => {
                for entry in entries.values_mut() {
                    entry.refine_in_place(value);
                }
            }
            (Payload::Map(fields), TypeData::Struct(def)) => {
                for (name, field) in fields.iter_mut() {
                    if let Some(field_ty) = def.field(name) {
                        field.refine_in_place(field_ty);
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests;
