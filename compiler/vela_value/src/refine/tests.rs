use std::sync::Arc;

use pretty_assertions::assert_eq;
use vela_types::{Bindings, Type, TypeInterner};

use crate::kind::Kind;
use crate::value::{Payload, Value};

#[test]
fn open_variable_is_replaced() {
    let types = TypeInterner::new();
    let t = types.var("T");
    let mut v = Value::typed(t, Payload::Int(3));
    assert_eq!(v.kind(), Kind::Unknown);

    v.refine(&Type::int());
    assert_eq!(v.ty(), &Type::int());
    assert_eq!(v.kind(), Kind::Int);
    assert_eq!(v.type_name(), "Int");
}

#[test]
fn generic_list_refines_every_element() {
    let types = TypeInterner::new();
    let t = types.var("T");
    let open_list = types.list(t.clone());
    let first = Value::typed(t.clone(), Payload::Str(Arc::from("a")));
    let second = Value::typed(t, Payload::Str(Arc::from("b")));
    let mut list = Value::list(open_list, vec![first, second]);

    let str_list = types.list(Type::str());
    list.refine(&str_list);

    assert_eq!(list.ty(), &str_list);
    assert_eq!(list.type_name(), "[Str]");
    for item in list.as_list() {
        assert_eq!(item.ty(), &Type::str());
        assert_eq!(item.kind(), Kind::Str);
    }
}

#[test]
fn empty_generic_list_updates_container_type() {
    let types = TypeInterner::new();
    let mut list = Value::list(types.list(types.var("T")), Vec::new());
    let str_list = types.list(Type::str());
    list.refine(&str_list);
    assert_eq!(list.ty(), &str_list);
    assert!(list.is_empty());
}

#[test]
fn refinement_is_idempotent() {
    let types = TypeInterner::new();
    let t = types.var("T");
    let item = Value::typed(t.clone(), Payload::Int(1));
    let mut list = Value::list(types.list(t), vec![item]);
    let int_list = types.list(Type::int());

    list.refine(&int_list);
    let once = (list.ty().clone(), list.as_list()[0].ty().clone());
    list.refine(&int_list);
    assert_eq!(list.ty(), &once.0);
    assert_eq!(list.as_list()[0].ty(), &once.1);
    assert!(Type::ptr_eq(list.ty(), &int_list));
}

#[test]
fn map_values_refine_but_keys_stay() {
    let types = TypeInterner::new();
    let t = types.var("V");
    let value = Value::typed(t.clone(), Payload::Bool(true));
    let mut map = Value::map_from(types.map(Type::int(), t), [(Value::int(1), value)]);

    let concrete = types.map(Type::int(), Type::bool());
    map.refine(&concrete);

    assert_eq!(map.ty(), &concrete);
    let (key, value) = map.entries().next().map(|(k, v)| (k, v.ty().clone())).unzip();
    assert_eq!(key.map(|k| k.as_int()), Some(1));
    assert_eq!(value, Some(Type::bool()));
}

#[test]
fn generic_struct_refines_fields() {
    let types = TypeInterner::new();
    let t = types.var("T");
    let open_box = types.structure("Box", [t.clone()], [("item", t.clone())]);
    let int_box = types.structure("Box", [Type::int()], [("item", Type::int())]);

    let item = Value::typed(t, Payload::Int(9));
    let mut boxed = Value::structure(open_box, [("item", item)]);
    boxed.refine(&int_box);

    assert_eq!(boxed.type_name(), "Box<Int>");
    assert_eq!(boxed.field("item").map(|v| v.kind()), Some(Kind::Int));
}

#[test]
fn concrete_value_is_left_alone() {
    let types = TypeInterner::new();
    let int_list = types.list(Type::int());
    let mut list = Value::list(int_list.clone(), vec![Value::int(1)]);
    list.refine(&types.list(types.var("T")));
    assert!(Type::ptr_eq(list.ty(), &int_list));
}

#[test]
fn generic_declared_type_does_not_replace() {
    let types = TypeInterner::new();
    let open = types.list(types.var("T"));
    let mut list = Value::list(open.clone(), Vec::new());
    list.refine(&types.list(types.var("U")));
    assert_eq!(list.ty(), &open);
}

#[test]
fn maybe_is_replaced_wholesale() {
    let types = TypeInterner::new();
    let mut none = Value::make_none(&types, types.var("T"));
    let concrete = types.maybe(Type::str());
    none.refine(&concrete);
    assert_eq!(none.ty(), &concrete);
    assert!(none.is_none());
    assert_eq!(none.kind(), Kind::Maybe);
}

#[test]
fn narrowed_arm_resolves_from_retained_result() {
    let types = TypeInterner::new();
    let t = types.var("T");
    let open_result = types.result(t.clone(), Type::str());
    let payload = Value::typed(t, Payload::Int(4));
    let mut ok = Value::make_ok_in(payload, open_result);

    let concrete = types.result(Type::int(), Type::str());
    ok.refine(&concrete);

    assert!(ok.is_ok());
    assert_eq!(ok.ty(), &Type::int());
    assert_eq!(ok.kind(), Kind::Int);
    assert_eq!(ok.result_origin(), Some(&concrete));
}

#[test]
fn result_typed_arm_takes_component_type() {
    let types = TypeInterner::new();
    let result_ty = types.result(Type::int(), Type::str());
    let err = Value::typed(result_ty.clone(), Payload::Str(Arc::from("bad")));
    let mut err = Value::make_err(err);
    assert_eq!(err.kind(), Kind::Result);

    err.refine(&result_ty);
    assert_eq!(err.ty(), &Type::str());
    assert_eq!(err.kind(), Kind::Str);
    assert!(err.is_err());
}

#[test]
fn arm_without_origin_keeps_its_type() {
    let types = TypeInterner::new();
    let mut ok = Value::make_ok(Value::int(1));
    ok.refine(&types.result(Type::int(), Type::str()));
    assert_eq!(ok.ty(), &Type::int());
    assert!(ok.is_ok());
}

#[test]
fn substituted_declaration_refines_open_value() {
    let types = TypeInterner::new();
    let t = types.var("T");
    let open_pair = types.structure("Pair", [t.clone()], [("a", t.clone()), ("b", t.clone())]);

    let mut bindings = Bindings::default();
    bindings.insert("T".into(), Type::str());
    let declared = types.substitute(&open_pair, &bindings);
    assert_eq!(declared.name(), "Pair<Str>");

    let a = Value::typed(t.clone(), Payload::Str(Arc::from("x")));
    let b = Value::typed(t, Payload::Str(Arc::from("y")));
    let mut pair = Value::structure(open_pair, [("a", a), ("b", b)]);
    pair.refine(&declared);

    assert_eq!(pair.ty(), &declared);
    assert_eq!(pair.field("a").map(Value::type_name), Some("Str"));
    assert_eq!(pair.field("b").map(Value::kind), Some(Kind::Str));
}
