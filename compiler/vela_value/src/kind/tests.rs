use vela_types::{Param, TypeInterner};

use super::*;

#[test]
fn primitives_map_one_to_one() {
    assert_eq!(Kind::for_type(&Type::void()), Kind::Void);
    assert_eq!(Kind::for_type(&Type::str()), Kind::Str);
    assert_eq!(Kind::for_type(&Type::int()), Kind::Int);
    assert_eq!(Kind::for_type(&Type::float()), Kind::Float);
    assert_eq!(Kind::for_type(&Type::bool()), Kind::Bool);
    assert_eq!(Kind::for_type(&Type::dynamic()), Kind::Dynamic);
}

#[test]
fn composites_map_one_to_one() {
    let types = TypeInterner::new();
    assert_eq!(Kind::for_type(&types.list(Type::int())), Kind::List);
    assert_eq!(Kind::for_type(&types.map(Type::str(), Type::int())), Kind::Map);
    assert_eq!(Kind::for_type(&types.maybe(Type::int())), Kind::Maybe);
    assert_eq!(
        Kind::for_type(&types.result(Type::int(), Type::str())),
        Kind::Result
    );
    assert_eq!(
        Kind::for_type(&types.structure("P", [], [("x", Type::int())])),
        Kind::Struct
    );
    assert_eq!(
        Kind::for_type(&types.enumeration("E", [("A", 0)])),
        Kind::Enum
    );
    assert_eq!(
        Kind::for_type(&types.function(None, [Param::new("x", Type::int())], Type::int())),
        Kind::Function
    );
}

#[test]
fn open_and_absent_types_are_unknown() {
    let types = TypeInterner::new();
    assert_eq!(Kind::for_type(&types.var("T")), Kind::Unknown);
    assert_eq!(Kind::for_optional_type(None), Kind::Unknown);
    assert_eq!(Kind::for_optional_type(Some(&Type::int())), Kind::Int);
}

#[test]
fn open_containers_keep_their_container_kind() {
    let types = TypeInterner::new();
    assert_eq!(Kind::for_type(&types.list(types.var("T"))), Kind::List);
}

#[test]
fn categories() {
    assert!(Kind::Int.is_primitive());
    assert!(!Kind::List.is_primitive());
    assert!(Kind::Struct.is_container());
    assert!(!Kind::Maybe.is_container());
    assert!(Kind::Map.is_mutable());
    assert!(!Kind::Function.is_mutable());
    assert_eq!(Kind::Maybe.to_string(), "maybe");
    assert_eq!(format!("{:?}", Kind::Enum), "Kind::enum");
}
