use memchr::{memchr2, memchr3};

use super::cursor::Cursor;
use crate::emit::Sink;
use crate::error::{ParseError, SyntaxErrorKind};

/// Transduce one quoted literal (`'…'`, `"…"`, or `` `…` ``) into a strict
/// JSON double-quoted string.
///
/// The body is copied, not decoded: recognized JSON escapes and `\uXXXX`
/// sequences (surrogate pairs included) pass through untouched, `\'` and
/// `` \` `` lose their backslash, a literal `"` inside a non-double-quoted
/// literal gains one, and unknown escapes are copied verbatim for the
/// downstream decoder to judge. Bare control characters, newlines included,
/// are copied as-is.
pub(crate) fn scan_string(cur: &mut Cursor, sink: &mut Sink) -> Result<(), ParseError> {
    let Some(quote) = cur.peek().filter(|q| matches!(*q, b'"' | b'\'' | b'`')) else {
        return Err(super::err_at(cur, SyntaxErrorKind::UnexpectedChar));
    };
    cur.bump(1);
    sink.push('"');
    loop {
        let rest = cur.remaining_bytes();
        let found = if quote == b'"' {
            memchr2(b'"', b'\\', rest)
        } else {
            memchr3(quote, b'\\', b'"', rest)
        };
        let Some(i) = found else {
            cur.bump(rest.len());
            return Err(ParseError::syntax(
                SyntaxErrorKind::UnterminatedString,
                cur.char_pos(),
            ));
        };
        let b = rest[i];
        if i > 0 {
            sink.push_str(&cur.rest()[..i]);
            cur.bump(i);
        }
        if b == quote {
            cur.bump(1);
            sink.push('"');
            return Ok(());
        }
        if b == b'"' {
            // literal double quote inside a '…' or `…` literal
            cur.bump(1);
            sink.push_str("\\\"");
            continue;
        }
        match cur.peek_at(1) {
            None => {
                cur.bump(1);
                return Err(ParseError::syntax(
                    SyntaxErrorKind::UnterminatedString,
                    cur.char_pos(),
                ));
            }
            Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => {
                sink.push_str(&cur.rest()[..2]);
                cur.bump(2);
            }
            Some(b'u') if has_hex4(cur) => {
                sink.push_str(&cur.rest()[..6]);
                cur.bump(6);
            }
            Some(b'\'') => {
                sink.push('\'');
                cur.bump(2);
            }
            Some(b'`') => {
                sink.push('`');
                cur.bump(2);
            }
            Some(_) => {
                // unknown escape: keep both characters for the caller's
                // decoder to accept or reject
                cur.bump(1);
                let len = cur.rest().chars().next().map_or(0, char::len_utf8);
                sink.push('\\');
                sink.push_str(&cur.rest()[..len]);
                cur.bump(len);
            }
        }
    }
}

/// True if the four bytes after `\u` are hex digits.
fn has_hex4(cur: &Cursor) -> bool {
    (2..6).all(|k| cur.peek_at(k).is_some_and(|b| b.is_ascii_hexdigit()))
}
