use std::sync::Arc;

use vela_types::{Type, TypeInterner};

use crate::closure::{Closure, NativeFunction};
use crate::plain::PlainData;
use crate::value::Value;

fn unit(_: &[Value]) -> Value {
    Value::int(0)
}

#[test]
fn ints_compare_by_value() {
    assert!(Value::int(3).equals(&Value::int(3)));
    assert!(!Value::int(3).equals(&Value::int(4)));
}

#[test]
fn scalars_compare_by_value() {
    assert!(Value::str("a").equals(&Value::str(String::from("a"))));
    assert!(!Value::str("a").equals(&Value::str("b")));
    assert!(Value::bool(false).equals(&Value::bool(false)));
    assert!(Value::float(0.5).equals(&Value::float(0.5)));
    assert!(Value::void().equals(Value::void()));
}

#[test]
fn nan_is_reflexive() {
    let nan = Value::float(f64::NAN);
    assert!(nan.equals(&nan));
    assert!(nan.equals(&Value::float(f64::NAN)));
}

#[test]
fn dynamic_nan_is_reflexive_at_any_depth() {
    let nested = || {
        PlainData::List(vec![
            PlainData::Float(f64::NAN),
            PlainData::Map([("x".to_owned(), PlainData::Float(f64::NAN))].into()),
        ])
    };
    let a = Value::dynamic(nested());
    assert!(a.equals(&a));
    assert!(a.equals(&Value::dynamic(nested())));
    assert!(!Value::dynamic(PlainData::Float(f64::NAN)).equals(&Value::dynamic(PlainData::Null)));
}

#[test]
fn lists_compare_by_identity() {
    let types = TypeInterner::new();
    let list_ty = types.list(Type::int());
    let a = Value::list(list_ty.clone(), vec![Value::int(1)]);
    let b = Value::list(list_ty, vec![Value::int(1)]);
    assert!(a.equals(&a));
    assert!(!a.equals(&b));
    assert!(!a.equals(&a.copy()));
}

#[test]
fn enums_compare_by_discriminant() {
    let types = TypeInterner::new();
    let color = types.enumeration("Color", [("Red", 0), ("Green", 1)]);
    let red = Value::enum_member(color.clone(), 0);
    assert!(red.equals(&Value::enum_member(color.clone(), 0)));
    assert!(!red.equals(&Value::enum_member(color, 1)));
}

#[test]
fn dynamic_compares_structurally() {
    let a = Value::dynamic(PlainData::List(vec![PlainData::Int(1)]));
    let b = Value::dynamic(PlainData::List(vec![PlainData::Int(1)]));
    assert!(a.equals(&b));
    assert!(!a.equals(&Value::dynamic(PlainData::Null)));
}

#[test]
fn functions_compare_by_closure() {
    let types = TypeInterner::new();
    let fn_ty = types.function(Some("unit"), [], Type::int());
    let closure: Arc<dyn Closure> = Arc::new(NativeFunction::new("unit", [], unit));
    let f = Value::function(fn_ty.clone(), Arc::clone(&closure));
    assert!(f.equals(&f.copy()));
    let g = Value::function(fn_ty, Arc::new(NativeFunction::new("unit", [], unit)));
    assert!(!f.equals(&g));
}

#[test]
fn maybes_compare_fill_state_then_payload() {
    let types = TypeInterner::new();
    let none = Value::make_none(&types, Type::int());
    let some = none.to_some(Value::int(5));
    assert!(none.equals(&none.to_none()));
    assert!(!none.equals(&some));
    assert!(some.equals(&none.to_some(Value::int(5))));
    assert!(!some.equals(&none.to_some(Value::int(6))));
}

#[test]
fn narrowed_results_compare_as_their_arm() {
    let ok = Value::make_ok(Value::int(1));
    assert!(ok.equals(&Value::make_ok(Value::int(1))));
}
