use jsontree_core::{parse, parse_with_options, JsonError, ParseOptions, Value, ValueType};

/// Parse and unwrap, with the error message in the panic.
fn ok(text: &str) -> Value {
    match parse(text).into_result() {
        Ok(v) => v,
        Err(e) => panic!("parse of {text:?} failed: {e}"),
    }
}

/// Parse, expect failure, and return the parse error fields.
fn parse_err(text: &str) -> (String, usize, usize) {
    match parse(text).into_result() {
        Err(JsonError::Parse {
            message,
            line,
            column,
        }) => (message, line, column),
        other => panic!("expected parse error for {text:?}, got {other:?}"),
    }
}

fn assert_err_contains(text: &str, needle: &str) {
    let (message, _, _) = parse_err(text);
    assert!(
        message.contains(needle),
        "error for {text:?} was {message:?}, expected it to mention {needle:?}"
    );
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn object_with_nested_array() {
    let v = ok(r#"{"a":1,"b":[1,2,3]}"#);
    assert_eq!(v.size().unwrap(), 2);
    assert_eq!(v["a"], Value::Int(1));
    assert_eq!(v["b"], Value::array([1, 2, 3]));
}

#[test]
fn escaped_newline_decodes() {
    let v = ok(r#""line\nbreak""#);
    assert_eq!(v.get_string().unwrap(), "line\nbreak");
}

#[test]
fn mixed_array_variants() {
    let v = ok(r#"[1, 2.5, "x", true, false, null]"#);
    let types: Vec<ValueType> = v.get_array().unwrap().iter().map(Value::value_type).collect();
    assert_eq!(
        types,
        [
            ValueType::Int,
            ValueType::Double,
            ValueType::String,
            ValueType::Bool,
            ValueType::Bool,
            ValueType::Null,
        ]
    );
}

#[test]
fn trailing_garbage_after_number() {
    assert_err_contains(" 123abc", "trailing content");
}

// ============================================================================
// Constants
// ============================================================================

#[test]
fn constants() {
    assert_eq!(ok("null"), Value::Null);
    assert_eq!(ok("true"), Value::Bool(true));
    assert_eq!(ok("false"), Value::Bool(false));
}

#[test]
fn constant_followed_by_identifier_char_is_rejected() {
    assert_err_contains("nullable", "expected 'null'");
    assert_err_contains("true_", "expected 'true'");
    assert_err_contains("false1", "expected 'false'");
}

#[test]
fn constant_followed_by_delimiter_is_accepted() {
    assert_eq!(ok("[null,true]"), Value::array([Value::Null, Value::Bool(true)]));
}

#[test]
fn truncated_constant() {
    assert_err_contains("tru", "expected 'true'");
    assert_err_contains("nul", "expected 'null'");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn integers() {
    assert_eq!(ok("0"), Value::Int(0));
    assert_eq!(ok("-17"), Value::Int(-17));
    assert_eq!(ok("+8"), Value::Int(8));
    assert_eq!(ok("2147483647"), Value::Int(i32::MAX));
    assert_eq!(ok("-2147483648"), Value::Int(i32::MIN));
}

#[test]
fn leading_zeros_are_tolerated() {
    assert_eq!(ok("007"), Value::Int(7));
}

#[test]
fn fraction_makes_double() {
    assert_eq!(ok("2.5"), Value::Double(2.5));
    assert_eq!(ok("-0.25"), Value::Double(-0.25));
}

#[test]
fn exponent_makes_double_even_without_fraction() {
    assert_eq!(ok("1e3"), Value::Double(1000.0));
    assert_eq!(ok("2E2"), Value::Double(200.0));
    assert_eq!(ok("-1.2e44"), Value::Double(-1.2e44));
    assert_eq!(ok("5e-1"), Value::Double(0.5));
    assert_eq!(ok("5e+1"), Value::Double(50.0));
}

#[test]
fn classification_is_lexical() {
    // A whole number written with a fraction stays a double.
    assert_eq!(ok("3.0"), Value::Double(3.0));
    assert!(ok("3.0").is_double());
}

#[test]
fn integer_overflow_is_an_error() {
    assert_err_contains("2147483648", "out of range");
    assert_err_contains("-2147483649", "out of range");
}

#[test]
fn bare_sign_is_an_error() {
    assert_err_contains("-", "invalid number");
    assert_err_contains("[+]", "invalid number");
}

#[test]
fn dangling_exponent_is_an_error() {
    assert_err_contains("1e", "invalid number");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn simple_escapes() {
    let v = ok(r#""q\" b\\ t\t n\n f\f b\b r\r""#);
    assert_eq!(v.get_string().unwrap(), "q\" b\\ t\t n\n f\u{0C} b\u{08} r\r");
}

#[test]
fn unknown_escapes_pass_through() {
    let v = ok(r#""A \/ \x""#);
    assert_eq!(v.get_string().unwrap(), r"A \/ \x");
}

#[test]
fn raw_newline_inside_string_is_kept() {
    let v = ok("\"two\nlines\"");
    assert_eq!(v.get_string().unwrap(), "two\nlines");
}

#[test]
fn unicode_text_is_preserved() {
    let v = ok("\"caf\u{e9} \u{4f60}\u{597d}\"");
    assert_eq!(v.get_string().unwrap(), "caf\u{e9} \u{4f60}\u{597d}");
}

#[test]
fn escape_before_multibyte_char() {
    let v = ok("\"\\\u{e9}\"");
    assert_eq!(v.get_string().unwrap(), "\\\u{e9}");
}

#[test]
fn unterminated_string() {
    let (message, line, column) = parse_err(r#"["abc"#);
    assert!(message.contains("unterminated string"), "{message}");
    assert_eq!((line, column), (1, 2));
}

#[test]
fn string_ending_in_backslash_is_unterminated() {
    assert_err_contains(r#""abc\"#, "unterminated string");
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn empty_array() {
    assert_eq!(ok("[]"), Value::empty_array());
    assert_eq!(ok("[ \n\t ]"), Value::empty_array());
}

#[test]
fn nested_arrays() {
    let v = ok("[[1, [2]], []]");
    assert_eq!(v[0][1][0], Value::Int(2));
    assert_eq!(v[1], Value::empty_array());
}

#[test]
fn array_trailing_comma() {
    assert_eq!(ok("[1, 2,]"), Value::array([1, 2]));
}

#[test]
fn array_missing_close() {
    assert_err_contains("[1, 2", "expected ']'");
}

#[test]
fn array_missing_comma() {
    assert_err_contains("[1 2]", "expected ',' or ']'");
}

#[test]
fn array_bad_element_propagates() {
    assert_err_contains("[1, @]", "unexpected character '@'");
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn empty_object() {
    assert_eq!(ok("{}"), Value::empty_object());
    assert_eq!(ok("{ }"), Value::empty_object());
}

#[test]
fn duplicate_keys_last_wins() {
    let v = ok(r#"{"k": 1, "k": 2}"#);
    assert_eq!(v.size().unwrap(), 1);
    assert_eq!(v["k"], Value::Int(2));
}

#[test]
fn object_trailing_comma() {
    assert_eq!(ok(r#"{"a": 1,}"#), Value::object([("a", 1)]));
}

#[test]
fn object_keys_are_sorted() {
    let v = ok(r#"{"z": 1, "a": 2, "m": 3}"#);
    let keys: Vec<&String> = v.get_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "m", "z"]);
}

#[test]
fn escaped_key() {
    let v = ok(r#"{"a\"b": true}"#);
    assert_eq!(v["a\"b"], Value::Bool(true));
}

#[test]
fn key_must_be_string() {
    assert_err_contains("{a: 1}", "expected string key");
    assert_err_contains("{1: 1}", "expected string key");
}

#[test]
fn key_requires_colon() {
    assert_err_contains(r#"{"a" 1}"#, "expected ':'");
}

#[test]
fn object_missing_close() {
    assert_err_contains(r#"{"a": 1"#, "expected '}'");
}

#[test]
fn object_missing_value() {
    assert_err_contains(r#"{"a": }"#, "unexpected character '}'");
}

// ============================================================================
// Whitespace, top level, positions
// ============================================================================

#[test]
fn whitespace_between_all_tokens() {
    let v = ok(" \n{ \"a\" \t: [ 1 , 2 ] ,\r\n \"b\" : null } \n");
    assert_eq!(v["a"], Value::array([1, 2]));
    assert!(v["b"].is_null());
}

#[test]
fn empty_input() {
    assert_err_contains("", "unexpected end of input");
    assert_err_contains("   ", "unexpected end of input");
}

#[test]
fn two_root_values() {
    assert_err_contains("1 2", "trailing content");
    assert_err_contains("{} []", "trailing content");
}

#[test]
fn error_position_is_reported() {
    let (_, line, column) = parse_err("{\n  \"a\": 1,\n  \"b\": ?\n}");
    assert_eq!((line, column), (3, 8));
}

#[test]
fn error_display_includes_position() {
    let err = parse("[1,,]").into_result().unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("parse error at line 1, column 4:"), "{text}");
}

#[test]
fn failed_parse_has_no_value() {
    let result = parse(r#"{"ok": [1, 2, "#);
    assert!(result.is_error());
    assert!(result.value().is_none());
    assert!(result.into_value().is_null());
}

#[test]
fn from_str_uses_parser() {
    let v: Value = "[1, 2]".parse().unwrap();
    assert_eq!(v, Value::array([1, 2]));
    assert!("[1,".parse::<Value>().is_err());
}

#[test]
fn deep_nesting_is_bounded() {
    let depth = 600;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert_err_contains(&text, "nesting depth");

    let options = ParseOptions { max_depth: 1000 };
    assert!(parse_with_options(&text, options).is_ok());
}
