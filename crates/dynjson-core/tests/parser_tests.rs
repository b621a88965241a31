use dynjson_core::{parse, parse_with, JsonError, Kind, ParseErrorKind, ParseOptions, Trailing, Value};

/// Helper: the parse failure reason, panicking on success or non-parse errors.
fn reason(text: &str) -> ParseErrorKind {
    match parse(text) {
        Err(JsonError::Parse { kind, .. }) => kind,
        Err(other) => panic!("expected parse error for {text:?}, got {other:?}"),
        Ok(v) => panic!("expected parse error for {text:?}, got {v:?}"),
    }
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn parse_null() {
    assert!(parse("null").unwrap().is_null());
}

#[test]
fn parse_bools() {
    assert_eq!(parse("true").unwrap(), true);
    assert_eq!(parse("false").unwrap(), false);
}

#[test]
fn parse_int() {
    let v = parse("123").unwrap();
    assert!(v.is_int());
    assert_eq!(v, 123);
}

#[test]
fn parse_negative_and_zero() {
    assert_eq!(parse("-7").unwrap(), -7);
    assert_eq!(parse("0").unwrap(), 0);
    assert_eq!(parse("-0").unwrap(), 0);
}

#[test]
fn parse_double() {
    let v = parse("123.01").unwrap();
    assert!(v.is_double());
    assert_eq!(v, 123.01);
}

#[test]
fn exponent_makes_double() {
    let v = parse("1e2").unwrap();
    assert!(v.is_double());
    assert_eq!(v, 100.0);
    assert_eq!(parse("2.5E-3").unwrap(), 0.0025);
    assert_eq!(parse("1e+2").unwrap(), 100.0);
}

#[test]
fn i64_bounds_stay_int() {
    assert_eq!(parse("9223372036854775807").unwrap(), i64::MAX);
    assert_eq!(parse("-9223372036854775808").unwrap(), i64::MIN);
}

#[test]
fn integer_overflow_falls_back_to_double() {
    let v = parse("9223372036854775808").unwrap();
    assert!(v.is_double());
    assert_eq!(v.as_double().unwrap(), 9_223_372_036_854_775_808.0);
}

#[test]
fn double_overflow_is_rejected() {
    assert_eq!(reason("1e400"), ParseErrorKind::NumberOutOfRange);
    assert_eq!(reason("-1e400"), ParseErrorKind::NumberOutOfRange);
}

#[test]
fn malformed_numbers() {
    assert_eq!(reason("-"), ParseErrorKind::InvalidNumber);
    assert_eq!(reason("-a"), ParseErrorKind::InvalidNumber);
    assert_eq!(reason("1.x"), ParseErrorKind::InvalidNumber);
    assert_eq!(reason("1."), ParseErrorKind::UnexpectedEnd);
    assert_eq!(reason("1e"), ParseErrorKind::UnexpectedEnd);
    assert_eq!(reason("1e+"), ParseErrorKind::UnexpectedEnd);
    assert_eq!(reason(".5"), ParseErrorKind::UnexpectedChar('.'));
    assert_eq!(reason("+1"), ParseErrorKind::UnexpectedChar('+'));
}

#[test]
fn parse_string() {
    assert_eq!(
        parse("\"this is a string\"").unwrap(),
        "this is a string"
    );
}

#[test]
fn string_escapes() {
    let v = parse(r#""a\"b\\c\/d\be\ff\ng\rh\ti""#).unwrap();
    assert_eq!(v, "a\"b\\c/d\u{08}e\u{0C}f\ng\rh\ti");
}

#[test]
fn unicode_escapes() {
    assert_eq!(parse(r#""\u00e9""#).unwrap(), "é");
    assert_eq!(parse(r#""\u4F60\u597d""#).unwrap(), "你好");
    assert_eq!(parse(r#""\ud83d\ude00""#).unwrap(), "😀");
}

#[test]
fn raw_utf8_passes_through() {
    assert_eq!(parse("\"café 你好\"").unwrap(), "café 你好");
}

#[test]
fn bad_escapes() {
    assert_eq!(reason(r#""\x""#), ParseErrorKind::InvalidEscape('x'));
    assert_eq!(reason(r#""\u12""#), ParseErrorKind::InvalidUnicodeEscape);
    assert_eq!(reason(r#""\ud800""#), ParseErrorKind::LoneSurrogate);
}

#[test]
fn unterminated_string() {
    assert_eq!(reason("\"abc"), ParseErrorKind::UnexpectedEnd);
    assert_eq!(reason("\"abc\\"), ParseErrorKind::UnexpectedEnd);
}

#[test]
fn raw_control_character_in_string() {
    assert_eq!(reason("\"a\nb\""), ParseErrorKind::ControlCharacter(0x0A));
}

#[test]
fn literals_must_be_complete() {
    assert_eq!(reason("tru"), ParseErrorKind::InvalidLiteral("true"));
    assert_eq!(reason("nul"), ParseErrorKind::InvalidLiteral("null"));
    assert_eq!(reason("fals"), ParseErrorKind::InvalidLiteral("false"));
    assert_eq!(reason("True"), ParseErrorKind::UnexpectedChar('T'));
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn parse_mixed_array() {
    let arr = parse("[0, 1, 2, null, true, false, \"hello json\"]").unwrap();
    assert_eq!(arr.size().unwrap(), 7);
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
fn parse_object() {
    let obj = parse("{\"name\":\"junping\",\"age\":30,\"sex\":\"man\"}").unwrap();
    assert_eq!(obj["name"], "junping");
    assert_eq!(obj["age"], 30);
    assert_eq!(obj.keys().unwrap().collect::<Vec<_>>(), ["name", "age", "sex"]);
}

#[test]
fn empty_containers() {
    assert_eq!(parse("[]").unwrap().size().unwrap(), 0);
    assert_eq!(parse("{}").unwrap().size().unwrap(), 0);
    assert_eq!(parse("[ \n ]").unwrap().size().unwrap(), 0);
    assert_eq!(parse("{\t}").unwrap().size().unwrap(), 0);
}

#[test]
fn whitespace_everywhere() {
    let v = parse(" \r\n\t{ \"a\" :\n[ 1 ,\t2 ] , \"b\" : { } }\n ").unwrap();
    assert_eq!(v["a"][1], 2);
    assert!(v["b"].is_object());
}

#[test]
fn nested_structure() {
    let v = parse(r#"{"a":{"b":{"c":[[],[{}],[1,[2,[3]]]]}}}"#).unwrap();
    assert_eq!(v["a"]["b"]["c"][2][1][1][0], 3);
}

#[test]
fn duplicate_key_last_value_first_position() {
    let v = parse(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    assert_eq!(v.size().unwrap(), 2);
    assert_eq!(v["a"], 3);
    assert_eq!(v.keys().unwrap().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn malformed_containers() {
    assert_eq!(reason("{\"a\":}"), ParseErrorKind::UnexpectedChar('}'));
    assert_eq!(reason("[1,]"), ParseErrorKind::UnexpectedChar(']'));
    assert_eq!(reason("[1 2]"), ParseErrorKind::ExpectedCommaOrEnd(']'));
    assert_eq!(reason("{\"a\":1 \"b\":2}"), ParseErrorKind::ExpectedCommaOrEnd('}'));
    assert_eq!(reason("{\"a\" 1}"), ParseErrorKind::ExpectedColon);
    assert_eq!(reason("{a:1}"), ParseErrorKind::ExpectedKey);
    assert_eq!(reason("{\"a\":1,}"), ParseErrorKind::ExpectedKey);
    assert_eq!(reason("[1"), ParseErrorKind::UnexpectedEnd);
    assert_eq!(reason("{\"a\":1"), ParseErrorKind::UnexpectedEnd);
}

// ============================================================================
// Top level
// ============================================================================

#[test]
fn empty_input() {
    assert_eq!(reason(""), ParseErrorKind::UnexpectedEnd);
    assert_eq!(reason("   "), ParseErrorKind::UnexpectedEnd);
}

#[test]
fn trailing_characters_rejected_by_default() {
    assert_eq!(reason("1 2"), ParseErrorKind::TrailingCharacters);
    assert_eq!(reason("{} x"), ParseErrorKind::TrailingCharacters);
    assert_eq!(reason("01"), ParseErrorKind::TrailingCharacters);
    assert!(parse("[1]  \n").is_ok());
}

#[test]
fn trailing_characters_can_be_ignored() {
    let opts = ParseOptions::new().with_trailing(Trailing::Ignore);
    assert_eq!(parse_with("[1] garbage", &opts).unwrap().size().unwrap(), 1);
}

#[test]
fn deep_nesting_is_bounded() {
    let deep = "[".repeat(200) + &"]".repeat(200);
    assert_eq!(reason(&deep), ParseErrorKind::NestingTooDeep(128));

    let opts = ParseOptions::new().with_max_depth(256);
    assert!(parse_with(&deep, &opts).is_ok());
}

#[test]
fn error_carries_position() {
    let err = parse("[1, 2, x]").unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.offset(), Some(7));
    assert_eq!(
        err.to_string(),
        "JSON parse error at line 1, column 8: unexpected character 'x'"
    );
}

#[test]
fn parse_into_replaces_on_success_only() {
    let mut v = Value::from(1);
    v.parse_into("[true]").unwrap();
    assert!(v.is_array());

    assert!(v.parse_into("[true").is_err());
    assert_eq!(v[0], true);
}

#[test]
fn from_str_parses() {
    let v: Value = "{\"k\":[1.5]}".parse().unwrap();
    assert_eq!(v["k"][0], 1.5);
}
