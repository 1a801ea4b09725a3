use std::collections::BTreeMap;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use vela_types::{Param, Type, TypeInterner};

use crate::closure::NativeFunction;
use crate::plain::PlainData;
use crate::value::Value;

fn identity(args: &[Value]) -> Value {
    args[0].copy()
}

#[test]
fn empty_list_projects_to_explicit_sequence() {
    let types = TypeInterner::new();
    let empty = Value::list(types.list(Type::str()), Vec::new());
    assert_eq!(empty.project(), PlainData::List(Vec::new()));
    assert_eq!(empty.to_json().ok().as_deref(), Some("[]"));
}

#[test]
fn empty_map_projects_to_explicit_mapping() {
    let types = TypeInterner::new();
    let empty = Value::map(types.map(Type::str(), Type::int()));
    assert_eq!(empty.project(), PlainData::Map(BTreeMap::new()));
    assert_eq!(empty.to_json().ok().as_deref(), Some("{}"));
}

#[test]
fn scalars_project_raw() {
    assert_eq!(Value::int(7).project(), PlainData::Int(7));
    assert_eq!(Value::str("hi").project(), PlainData::Str("hi".to_owned()));
    assert_eq!(Value::bool(true).project(), PlainData::Bool(true));
    assert_eq!(Value::float(0.25).project(), PlainData::Float(0.25));
    assert_eq!(Value::void().project(), PlainData::Null);
}

#[test]
fn containers_project_recursively() {
    let types = TypeInterner::new();
    let inner_ty = types.list(Type::int());
    let outer = Value::list(
        types.list(inner_ty.clone()),
        vec![Value::list(inner_ty, vec![Value::int(1), Value::int(2)])],
    );
    assert_eq!(
        outer.project(),
        PlainData::List(vec![PlainData::List(vec![PlainData::Int(1), PlainData::Int(2)])])
    );

    let map = Value::map_from(
        types.map(Type::int(), Type::bool()),
        [(Value::int(3), Value::bool(false))],
    );
    assert_eq!(map.to_json().ok().as_deref(), Some(r#"{"3":false}"#));
}

#[test]
fn struct_projects_fields_by_name() {
    let types = TypeInterner::new();
    let point = types.structure("Point", [], [("x", Type::int()), ("y", Type::int())]);
    let p = Value::structure(point, [("x", Value::int(1)), ("y", Value::int(2))]);
    assert_eq!(p.to_json().ok().as_deref(), Some(r#"{"x":1,"y":2}"#));
}

#[test]
fn function_projects_as_signature() {
    let types = TypeInterner::new();
    let fn_ty = types.function(Some("id"), [Param::new("x", Type::int())], Type::int());
    let f = Value::function(fn_ty, Arc::new(NativeFunction::new("id", [], identity)));
    assert_eq!(f.project(), PlainData::Str("fn id(Int) Int".to_owned()));
}

#[test]
fn maybe_projects_payload_or_null() {
    let types = TypeInterner::new();
    let none = Value::make_none(&types, Type::int());
    assert_eq!(none.project(), PlainData::Null);
    assert_eq!(none.to_some(Value::int(4)).project(), PlainData::Int(4));
}

#[test]
fn dynamic_projects_its_tree() {
    let tree = PlainData::Map(BTreeMap::from([("k".to_owned(), PlainData::Bool(true))]));
    assert_eq!(Value::dynamic(tree.clone()).project(), tree);
}
