use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_collections_serialize_explicitly() {
    let data = PlainData::Map(BTreeMap::from([
        ("items".to_owned(), PlainData::List(vec![])),
        ("meta".to_owned(), PlainData::Map(BTreeMap::new())),
    ]));
    let json = serde_json::to_string(&data).unwrap_or_default();
    assert_eq!(json, r#"{"items":[],"meta":{}}"#);
}

#[test]
fn scalars_deserialize_to_the_narrowest_variant() {
    let parse = |s: &str| serde_json::from_str::<PlainData>(s).ok();
    assert_eq!(parse("null"), Some(PlainData::Null));
    assert_eq!(parse("true"), Some(PlainData::Bool(true)));
    assert_eq!(parse("42"), Some(PlainData::Int(42)));
    assert_eq!(parse("2.5"), Some(PlainData::Float(2.5)));
    assert_eq!(parse("\"hi\""), Some(PlainData::from("hi")));
}

#[test]
fn nested_round_trip_through_json() {
    let data = PlainData::List(vec![
        PlainData::Int(1),
        PlainData::Map(BTreeMap::from([("k".to_owned(), PlainData::Null)])),
        PlainData::List(vec![]),
    ]);
    let json = serde_json::to_string(&data).unwrap_or_default();
    let back: Option<PlainData> = serde_json::from_str(&json).ok();
    assert_eq!(back, Some(data));
}

#[test]
fn display_is_json_like() {
    let data = PlainData::Map(BTreeMap::from([
        ("a".to_owned(), PlainData::List(vec![PlainData::Int(1), PlainData::Bool(false)])),
        ("b".to_owned(), PlainData::from("x")),
    ]));
    assert_eq!(data.to_string(), r#"{"a": [1, false], "b": "x"}"#);
    assert_eq!(PlainData::Null.kind_name(), "null");
}
