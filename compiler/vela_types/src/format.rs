//! Stable textual rendering of types.
//!
//! The rendered name is computed once per `Type` and reused as a display
//! name, a cache key, and the source of generic-marker detection, so the
//! format must not change between runs.
//!
//! | Type | Rendering |
//! |---|---|
//! | list | `[T]` |
//! | map | `[K:V]` |
//! | maybe | `T?` |
//! | result | `T!E` |
//! | struct | `Name` or `Name<A, B>` |
//! | function | `fn(A, B) R` or `fn name(A, B) R` |
//! | type variable | `$T` |

use std::fmt::Write;

use crate::data::{FunctionDef, TypeData};
use crate::ty::GENERIC_MARKER;
use crate::Type;

/// Render one level of `data`; children contribute their cached names.
pub(crate) fn render(data: &TypeData) -> String {
    match data {
        TypeData::Void => "Void".to_owned(),
        TypeData::Str => "Str".to_owned(),
        TypeData::Int => "Int".to_owned(),
        TypeData::Float => "Float".to_owned(),
        TypeData::Bool => "Bool".to_owned(),
        TypeData::Dynamic => "Dynamic".to_owned(),
        TypeData::List(elem) => format!("[{elem}]"),
        TypeData::Map { key, value } => format!("[{key}:{value}]"),
        TypeData::Maybe(inner) => format!("{inner}?"),
        TypeData::Result { ok, err } => format!("{ok}!{err}"),
        TypeData::Struct(def) => {
            let mut out = def.name.to_string();
            push_args(&mut out, &def.type_args);
            out
        }
        TypeData::Enum(def) => def.name.to_string(),
        TypeData::Function(def) => render_function(def),
        TypeData::Var(var) => format!("{GENERIC_MARKER}{}", var.name),
    }
}

fn push_args(out: &mut String, args: &[Type]) {
    if args.is_empty() {
        return;
    }
    out.push('<');
    push_joined(out, args.iter().map(Type::name));
    out.push('>');
}

fn push_joined<'a>(out: &mut String, names: impl Iterator<Item = &'a str>) {
    for (i, name) in names.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(name);
    }
}

fn render_function(def: &FunctionDef) -> String {
    let mut out = String::from("fn");
    if let Some(name) = &def.name {
        out.push(' ');
        out.push_str(name);
    }
    out.push('(');
    push_joined(&mut out, def.params.iter().map(|p| p.ty.name()));
    out.push(')');
    // Void return is left implicit.
    if !matches!(def.ret.data(), TypeData::Void) {
        let _ = write!(out, " {}", def.ret);
    }
    out
}
