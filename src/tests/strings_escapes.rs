use super::*;

#[test]
fn three_quote_flavors() {
    assert_eq!(one(r#"{a: 'single'}"#), r#"{"a":"single"}"#);
    assert_eq!(one(r#"{a: "double"}"#), r#"{"a":"double"}"#);
    assert_eq!(one("{a: `tick`}"), r#"{"a":"tick"}"#);
}

#[test]
fn escaped_single_quote_loses_backslash() {
    assert_eq!(one(r"{'a': '123\'456'}"), r#"{"a":"123'456"}"#);
    // also when the literal itself was double-quoted
    assert_eq!(one(r#"{"a": "it\'s"}"#), r#"{"a":"it's"}"#);
}

#[test]
fn escaped_backtick_loses_backslash() {
    assert_eq!(one("{a: `x\\`y`}"), "{\"a\":\"x`y\"}");
}

#[test]
fn double_quote_inside_other_flavors_gains_escape() {
    assert_eq!(one(r#"{'a': 'say "hi"'}"#), r#"{"a":"say \"hi\""}"#);
    let v = val(r#"{'a': 'say "hi"'}"#);
    assert_eq!(v["a"], r#"say "hi""#);
}

#[test]
fn other_quotes_inside_double_quoted_copy_unchanged() {
    assert_eq!(one(r#"{"a": "don't `tick`"}"#), r#"{"a":"don't `tick`"}"#);
}

#[test]
fn json_escapes_pass_through() {
    let input = r#"{"a": "line\nbreak\ttab\\slash\/end\b\f\r"}"#;
    assert_eq!(one(input), r#"{"a":"line\nbreak\ttab\\slash\/end\b\f\r"}"#);
    let v = val(input);
    assert_eq!(v["a"], "line\nbreak\ttab\\slash/end\u{8}\u{c}\r");
}

#[test]
fn unicode_escape_passes_through() {
    let input = "{\"a\": \"\\u002F\"}";
    assert_eq!(one(input), "{\"a\":\"\\u002F\"}");
    assert_eq!(val(input)["a"], "/");
}

#[test]
fn surrogate_pair_copied_verbatim() {
    let input = "{\"clef\": \"\\uD834\\uDD1E\"}";
    assert_eq!(one(input), "{\"clef\":\"\\uD834\\uDD1E\"}");
    assert_eq!(val(input)["clef"], "\u{1D11E}");
}

#[test]
fn unknown_escape_copied_for_downstream() {
    // strict decoders may reject these; the scanner passes them through
    assert_eq!(one(r"{'a': '\q'}"), r#"{"a":"\q"}"#);
    assert_eq!(one(r#"{"a": "\u12"}"#), r#"{"a":"\u12"}"#);
}

#[test]
fn bare_newline_copied_verbatim() {
    assert_eq!(one("{'a': 'x\ny'}"), "{\"a\":\"x\ny\"}");
}

#[test]
fn multibyte_content() {
    assert_eq!(one("{'name': 'café – ☕'}"), r#"{"name":"café – ☕"}"#);
}

#[test]
fn string_keys_normalized() {
    assert_eq!(one("{'k': 1, \"l\": 2, `m`: 3}"), r#"{"k":1,"l":2,"m":3}"#);
}

#[test]
fn unterminated_string_is_fatal() {
    let err = one_err(r#"{"a": "xyz"#);
    assert_eq!(err.kind(), Some(SyntaxErrorKind::UnterminatedString));
}
