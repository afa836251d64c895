//! The transducer core: a single forward pass over the input that re-emits
//! the first (or, via [`crate::stream`], every) object or array literal as
//! strict JSON. No tree is built; scan state is the cursor, the sink, and
//! the call stack.

mod array;
mod cursor;
mod lex;
mod number;
mod object;
mod strings;

use memchr::memchr2;

pub(crate) use cursor::Cursor;

use crate::emit::Sink;
use crate::error::{ParseError, SyntaxErrorKind};

/// Closing delimiter of the container a value is being scanned inside; the
/// expression capture needs it to know where an opaque value ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Closer {
    Brace,
    Bracket,
}

impl Closer {
    #[inline]
    fn byte(self) -> u8 {
        match self {
            Closer::Brace => b'}',
            Closer::Bracket => b']',
        }
    }
}

/// Error at the cursor: the offending character is consumed first, so the
/// reported position names the first character the scanner never read.
pub(crate) fn err_at(cur: &mut Cursor, kind: SyntaxErrorKind) -> ParseError {
    cur.bump_char();
    ParseError::syntax(kind, cur.char_pos())
}

pub(crate) fn err_eof(cur: &Cursor) -> ParseError {
    ParseError::syntax(SyntaxErrorKind::UnexpectedEnd, cur.char_pos())
}

/// Byte offset of the next `{` or `[` at or after `from`.
pub(crate) fn find_opener(input: &str, from: usize) -> Option<usize> {
    memchr2(b'{', b'[', &input.as_bytes()[from..]).map(|p| from + p)
}

/// Single-object mode: transduce the first complete container in `input`,
/// ignoring noise before the opener and anything after the matched closer.
pub(crate) fn transcode_single(input: &str) -> Result<String, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let Some(open) = find_opener(input, 0) else {
        return Err(ParseError::syntax(
            SyntaxErrorKind::NoStructureFound,
            input.chars().count() + 1,
        ));
    };
    let mut cur = Cursor::at(input, open);
    let mut sink = Sink::with_capacity(input.len() - open + 8);
    scan_container(&mut cur, &mut sink)?;
    Ok(sink.into_string())
}

/// Scan the container at the cursor (which sits on `{` or `[`).
pub(crate) fn scan_container(cur: &mut Cursor, sink: &mut Sink) -> Result<(), ParseError> {
    match cur.peek() {
        Some(b'{') => object::scan_object(cur, sink),
        Some(b'[') => array::scan_array(cur, sink),
        Some(_) => Err(err_at(cur, SyntaxErrorKind::UnexpectedChar)),
        None => Err(err_eof(cur)),
    }
}

/// Dispatch on the leading byte of a value.
pub(crate) fn scan_value(cur: &mut Cursor, sink: &mut Sink, closer: Closer) -> Result<(), ParseError> {
    lex::skip_ws_and_comments(cur)?;
    match cur.peek() {
        Some(b'{') => object::scan_object(cur, sink),
        Some(b'[') => array::scan_array(cur, sink),
        Some(b'"' | b'\'' | b'`') => strings::scan_string(cur, sink),
        Some(b'-' | b'.') => number::scan_number(cur, sink),
        Some(b) if b.is_ascii_digit() => number::scan_number(cur, sink),
        Some(b'/') | Some(b'(') => capture_expression(cur, sink, closer),
        Some(b) if lex::is_ident_start(b) => {
            let len = lex::ident_len(cur);
            match &cur.rest()[..len] {
                word @ ("true" | "false" | "null" | "NaN") => {
                    sink.push_str(word);
                    cur.bump(len);
                    Ok(())
                }
                // any other identifier is an opaque value: `undefined`,
                // `foo.bar`, `function() {…}` all end up captured
                _ => capture_expression(cur, sink, closer),
            }
        }
        Some(_) => Err(err_at(cur, SyntaxErrorKind::UnexpectedChar)),
        None => Err(err_eof(cur)),
    }
}

/// Copy an opaque bare expression (regex literal, function, call, …)
/// verbatim and emit it as a JSON string.
///
/// The copy tracks bracket depth over `()`, `[]`, `{}` and one in-string
/// state per quote flavor (with `\`-escapes); it stops when, at depth zero
/// and outside any string, the next byte is `,` or this container's closing
/// delimiter. That byte is left for the container scanner.
fn capture_expression(cur: &mut Cursor, sink: &mut Sink, closer: Closer) -> Result<(), ParseError> {
    let start = cur.pos();
    let mut depth: i32 = 0;
    let mut in_str: Option<u8> = None;
    loop {
        let Some(b) = cur.peek() else {
            return Err(err_eof(cur));
        };
        if let Some(q) = in_str {
            match b {
                b'\\' => {
                    cur.bump(1);
                    cur.bump_char();
                }
                _ if b == q => {
                    in_str = None;
                    cur.bump(1);
                }
                _ => cur.bump_char(),
            }
            continue;
        }
        match b {
            b',' if depth == 0 => break,
            b if depth == 0 && b == closer.byte() => break,
            b'\'' | b'"' | b'`' => {
                in_str = Some(b);
                cur.bump(1);
            }
            b'(' | b'[' | b'{' => {
                depth += 1;
                cur.bump(1);
            }
            b')' | b']' | b'}' => {
                depth -= 1;
                cur.bump(1);
            }
            _ => cur.bump_char(),
        }
    }
    let text = cur
        .slice(start, cur.pos())
        .trim_end_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0C}' | '\u{0B}'));
    sink.push_json_string(text);
    Ok(())
}
