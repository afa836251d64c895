use super::*;

#[test]
fn trailing_commas_tolerated() {
    assert_eq!(one(r#"{"a": 1,}"#), r#"{"a":1}"#);
    assert_eq!(one("[1, 2,]"), "[1,2]");
    assert_eq!(one("{a: [1,], b: {c: 2,},}"), r#"{"a":[1],"b":{"c":2}}"#);
}

#[test]
fn consecutive_commas_are_fatal() {
    assert!(one_err("[12,,21]").kind().is_some());
    assert!(one_err("[12,,,,21]").kind().is_some());
    assert!(one_err("{a:1,,b:2}").kind().is_some());
    assert!(one_err("[,1]").kind().is_some());
}

#[test]
fn missing_colon_is_fatal() {
    assert_eq!(one_err("{a 1}").kind(), Some(SyntaxErrorKind::UnexpectedChar));
}

#[test]
fn missing_comma_is_fatal() {
    assert_eq!(
        one_err("{a:1 b:2}").kind(),
        Some(SyntaxErrorKind::UnexpectedChar)
    );
}

#[test]
fn unterminated_containers_are_fatal() {
    assert_eq!(one_err(r#"{"a": 1"#).kind(), Some(SyntaxErrorKind::UnexpectedEnd));
    assert_eq!(one_err("[1, 2").kind(), Some(SyntaxErrorKind::UnexpectedEnd));
    assert_eq!(one_err("}{").kind(), Some(SyntaxErrorKind::UnexpectedEnd));
}

#[test]
fn unterminated_block_comment_is_fatal() {
    assert_eq!(
        one_err("{a: 1 /* never closed").kind(),
        Some(SyntaxErrorKind::UnterminatedComment)
    );
}

#[test]
fn deep_nesting() {
    let input = format!("{}1{}", "[".repeat(20), "]".repeat(20));
    assert_eq!(one(&input), input);
}

#[test]
fn mixed_nesting_with_quote_normalization() {
    assert_eq!(
        one("{'a':[{'b':1},{'c':[{'d':{'f':{'g':[1,2]}}},{'e':1}]}]}"),
        r#"{"a":[{"b":1},{"c":[{"d":{"f":{"g":[1,2]}}},{"e":1}]}]}"#
    );
}

#[test]
fn keyword_values() {
    assert_eq!(
        one("{'a': true, 'b': false, 'c': null}"),
        r#"{"a":true,"b":false,"c":null}"#
    );
}

#[test]
fn keyword_prefixed_identifier_is_a_string() {
    assert_eq!(one("{a: truest}"), r#"{"a":"truest"}"#);
    assert_eq!(one("{a: nullify}"), r#"{"a":"nullify"}"#);
}

#[test]
fn identifier_keys() {
    assert_eq!(
        one("{abcdefghijklmnopqrstuvwxyz: 12}"),
        r#"{"abcdefghijklmnopqrstuvwxyz":12}"#
    );
    assert_eq!(one("{$a: 1, _b: 2, a1$_: 3}"), r#"{"$a":1,"_b":2,"a1$_":3}"#);
}

#[test]
fn comments_in_every_gap() {
    let input = "{ /*a*/ 'k' /*b*/ : /*c*/ [ 1 /*d*/ , 2 ] // tail\n }";
    assert_eq!(one(input), r#"{"k":[1,2]}"#);
}

#[test]
fn duplicate_keys_pass_through() {
    assert_eq!(one("{a: 1, a: 2}"), r#"{"a":1,"a":2}"#);
}
