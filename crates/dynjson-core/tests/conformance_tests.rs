//! Behavioural contract of the value engine, one test per documented property.

use dynjson_core::{
    parse, parse_with, ErrorCategory, JsonError, Kind, ParseErrorKind, ParseOptions, Value,
};

#[test]
fn native_scalars_round_trip() {
    for b in [true, false] {
        assert_eq!(Value::from(b).as_bool().unwrap(), b);
    }
    for i in [0i64, 1, -1, 30, i64::MAX, i64::MIN] {
        assert_eq!(Value::from(i).as_int().unwrap(), i);
    }
    for d in [0.0, -0.5, 1.0, 123.01, f64::MAX, f64::MIN_POSITIVE] {
        assert_eq!(Value::from(d).as_double().unwrap(), d);
    }
    for s in ["", "hello", "with \"quotes\"", "ünïcödé"] {
        assert_eq!(Value::from(s).as_str().unwrap(), s);
    }
}

#[test]
fn serialize_then_parse_is_identity() {
    let mut tree = Value::default();
    tree["null"] = Value::Null;
    tree["bool"] = true.into();
    tree["int"] = (-12).into();
    tree["double"] = 0.1.into();
    tree["string"] = "tab\there".into();
    tree["array"] = vec![Value::from(1), Value::from("two"), Value::array()].into();
    tree["object"]["nested"]["deep"] = 2.5.into();

    let back = parse(&tree.to_string()).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn trees_past_the_depth_limit_need_a_larger_limit_to_round_trip() {
    let mut tree = Value::from(1);
    for _ in 0..200 {
        tree = Value::from(vec![tree]);
    }
    let text = tree.to_string();

    match parse(&text).unwrap_err() {
        JsonError::Parse { kind, column, .. } => {
            assert_eq!(
                kind,
                ParseErrorKind::NestingTooDeep(ParseOptions::DEFAULT_MAX_DEPTH)
            );
            assert_eq!(column, 129);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }

    let options = ParseOptions::new().with_max_depth(200);
    assert_eq!(parse_with(&text, &options).unwrap(), tree);
}

#[test]
fn insertion_order_survives_round_trip() {
    let mut obj = Value::default();
    for key in ["zeta", "alpha", "mid", "beta"] {
        obj[key] = key.into();
    }
    let back = parse(&obj.to_string()).unwrap();
    assert_eq!(
        back.keys().unwrap().collect::<Vec<_>>(),
        ["zeta", "alpha", "mid", "beta"]
    );
}

#[test]
fn has_tracks_writes_and_removals() {
    let mut obj = Value::object();
    assert!(!obj.has("k"));
    obj["k"] = 1.into();
    assert!(obj.has("k"));
    obj.remove("k").unwrap();
    assert!(!obj.has("k"));
}

#[test]
fn auto_vivification_from_null() {
    let mut v = Value::default();
    v["a"]["b"] = 1.into();
    assert!(v.is_object());
    assert!(v["a"].is_object());
    assert!(v["a"]["b"] == 1);
}

#[test]
fn array_growth_from_null() {
    let mut v = Value::default();
    v[2] = "x".into();
    assert_eq!(v.size().unwrap(), 3);
    assert!(v[0].is_null());
    assert!(v[1].is_null());
}

#[test]
fn equality_against_literal() {
    assert!(Value::from(30) == 30);
    assert!(!(Value::from("30") == 30));
}

#[test]
fn parser_rejects_malformed_input() {
    for text in ["{\"a\":}", "[1,]", "tru"] {
        let err = parse(text).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Parse, "input {text:?}");
    }
}

#[test]
fn parser_accepts_mixed_array() {
    let arr = parse("[0, 1, 2, null, true, false, \"hello json\"]").unwrap();
    let kinds: Vec<Kind> = arr.elements().unwrap().map(Value::kind).collect();
    assert_eq!(
        kinds,
        [
            Kind::Int,
            Kind::Int,
            Kind::Int,
            Kind::Null,
            Kind::Bool,
            Kind::Bool,
            Kind::String
        ]
    );
}

#[test]
fn duplicate_keys_last_write_wins() {
    let v = parse("{\"a\":1,\"a\":2}").unwrap();
    assert!(v["a"] == 2);
    assert_eq!(v.size().unwrap(), 1);
}

#[test]
fn access_errors_are_distinct_from_parse_errors() {
    let v = parse(r#"{"list":[1]}"#).unwrap();
    assert_eq!(
        v.at("missing").unwrap_err().category(),
        ErrorCategory::KeyNotFound
    );
    assert_eq!(
        v["list"].at(9).unwrap_err().category(),
        ErrorCategory::IndexOutOfRange
    );
    assert_eq!(
        v["list"][0].as_str().unwrap_err().category(),
        ErrorCategory::TypeMismatch
    );
}
