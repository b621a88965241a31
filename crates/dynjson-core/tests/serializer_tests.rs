use dynjson_core::{parse, to_string_with, Style, Value};

#[test]
fn null_value_serializes() {
    assert_eq!(Value::default().to_string(), "null");
}

#[test]
fn scalars() {
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(false).to_string(), "false");
    assert_eq!(Value::from(-42).to_string(), "-42");
    assert_eq!(Value::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(Value::from(123.01).to_string(), "123.01");
    assert_eq!(Value::from(3.0).to_string(), "3.0");
    assert_eq!(Value::from("hi").to_string(), "\"hi\"");
}

#[test]
fn whole_double_reparses_as_double() {
    let text = Value::from(3.0).to_string();
    assert!(parse(&text).unwrap().is_double());
}

#[test]
fn large_and_small_doubles_use_exponent() {
    let big = Value::from(1e300).to_string();
    assert_eq!(big, "1e300");
    assert_eq!(parse(&big).unwrap(), 1e300);

    let tiny = Value::from(5e-324).to_string();
    assert_eq!(parse(&tiny).unwrap(), 5e-324);
}

#[test]
fn non_finite_doubles_become_null() {
    let v: Value = vec![f64::NAN, f64::INFINITY].into();
    assert_eq!(v.to_string(), "[null,null]");
}

#[test]
fn string_escaping() {
    let v = Value::from("quote\" backslash\\ nl\n tab\t cr\r bell\u{07}");
    assert_eq!(
        v.to_string(),
        r#""quote\" backslash\\ nl\n tab\t cr\r bell\u0007""#
    );
}

#[test]
fn slash_and_non_ascii_are_not_escaped() {
    assert_eq!(Value::from("a/b").to_string(), r#""a/b""#);
    assert_eq!(Value::from("café 你好 😀").to_string(), "\"café 你好 😀\"");
}

#[test]
fn delete_character_is_not_escaped() {
    assert_eq!(Value::from("\u{7f}").to_string(), "\"\u{7f}\"");
}

#[test]
fn empty_containers() {
    assert_eq!(Value::array().to_string(), "[]");
    assert_eq!(Value::object().to_string(), "{}");
}

#[test]
fn compact_has_no_whitespace() {
    let v = parse(r#" { "a" : [ 1 , 2 ] , "b" : { "c" : null } } "#).unwrap();
    assert_eq!(v.to_string(), r#"{"a":[1,2],"b":{"c":null}}"#);
}

#[test]
fn object_keys_are_escaped() {
    let mut v = Value::default();
    v["line\nbreak"] = 1.into();
    assert_eq!(v.to_string(), r#"{"line\nbreak":1}"#);
}

#[test]
fn author_example_serializes_in_insertion_order() {
    let mut obj = Value::default();
    obj["name"] = "junping".into();
    obj["sex"] = "man".into();
    obj["age"] = 30.into();
    obj["country"] = "china".into();
    obj["work"]["type"] = "c++,php,js".into();
    obj["work"]["time"] = "10 years".into();
    obj["phone"] = "189****5599".into();
    obj["single"] = true.into();
    obj.remove("single").unwrap();

    assert_eq!(
        obj.to_string(),
        r#"{"name":"junping","sex":"man","age":30,"country":"china","work":{"type":"c++,php,js","time":"10 years"},"phone":"189****5599"}"#
    );
}

#[test]
fn pretty_layout() {
    let v = parse(r#"{"a":[1,{"b":null}],"c":{},"d":[]}"#).unwrap();
    let expected = "{\n  \"a\": [\n    1,\n    {\n      \"b\": null\n    }\n  ],\n  \"c\": {},\n  \"d\": []\n}";
    assert_eq!(v.to_string_pretty(), expected);
    assert_eq!(format!("{v:#}"), expected);
}

#[test]
fn pretty_custom_indent() {
    let v = parse("[1,2]").unwrap();
    assert_eq!(
        to_string_with(&v, Style::Pretty { indent: 4 }),
        "[\n    1,\n    2\n]"
    );
}

#[test]
fn pretty_scalar_is_unchanged() {
    assert_eq!(Value::from("x").to_string_pretty(), "\"x\"");
}

#[test]
fn pretty_output_reparses_equal() {
    let v = parse(r#"{"a":[1,2.5,"s",true,null,{"k":[]}]}"#).unwrap();
    assert_eq!(parse(&v.to_string_pretty()).unwrap(), v);
}

#[test]
fn agrees_with_serde_json_on_structure() {
    let text = r#"{"z":1,"a":[true,null,"x\ty"],"m":{"n":-5}}"#;
    let ours = parse(text).unwrap().to_string();
    let theirs: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(ours, serde_json::to_string(&theirs).unwrap());
}
