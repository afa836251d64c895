use super::cursor::Cursor;
use super::{Closer, err_at, err_eof, lex, number, scan_value, strings};
use crate::emit::Sink;
use crate::error::{ParseError, SyntaxErrorKind};

/// Object state machine. The cursor sits on `{`.
///
/// Emits compactly and defers the member comma until the next member is
/// known to exist, so a single trailing comma disappears from the output
/// while a second consecutive comma is fatal.
pub(crate) fn scan_object(cur: &mut Cursor, sink: &mut Sink) -> Result<(), ParseError> {
    cur.bump(1);
    sink.push('{');
    lex::skip_ws_and_comments(cur)?;
    if cur.peek() == Some(b'}') {
        cur.bump(1);
        sink.push('}');
        return Ok(());
    }
    let mut first = true;
    loop {
        if !first {
            sink.push(',');
        }
        first = false;

        scan_key(cur, sink)?;
        lex::skip_ws_and_comments(cur)?;
        match cur.peek() {
            Some(b':') => {
                cur.bump(1);
                sink.push(':');
            }
            Some(_) => return Err(err_at(cur, SyntaxErrorKind::UnexpectedChar)),
            None => return Err(err_eof(cur)),
        }

        scan_value(cur, sink, Closer::Brace)?;
        lex::skip_ws_and_comments(cur)?;
        match cur.peek() {
            Some(b'}') => {
                cur.bump(1);
                sink.push('}');
                return Ok(());
            }
            Some(b',') => {
                cur.bump(1);
                lex::skip_ws_and_comments(cur)?;
                match cur.peek() {
                    Some(b'}') => {
                        // trailing comma
                        cur.bump(1);
                        sink.push('}');
                        return Ok(());
                    }
                    Some(b',') => return Err(err_at(cur, SyntaxErrorKind::UnexpectedChar)),
                    Some(_) => {} // next member
                    None => return Err(err_eof(cur)),
                }
            }
            Some(_) => return Err(err_at(cur, SyntaxErrorKind::UnexpectedChar)),
            None => return Err(err_eof(cur)),
        }
    }
}

/// A key is a quoted literal (normalized), a bare identifier (quoted), or a
/// numeric literal (canonicalized, then quoted: `{1: x}` → `{"1":x}`).
fn scan_key(cur: &mut Cursor, sink: &mut Sink) -> Result<(), ParseError> {
    match cur.peek() {
        Some(b'"' | b'\'' | b'`') => strings::scan_string(cur, sink),
        Some(b'-' | b'.') => quoted_number_key(cur, sink),
        Some(b) if b.is_ascii_digit() => quoted_number_key(cur, sink),
        Some(b) if lex::is_ident_start(b) => {
            let len = lex::ident_len(cur);
            sink.push('"');
            sink.push_str(&cur.rest()[..len]);
            sink.push('"');
            cur.bump(len);
            Ok(())
        }
        Some(_) => Err(err_at(cur, SyntaxErrorKind::UnexpectedChar)),
        None => Err(err_eof(cur)),
    }
}

fn quoted_number_key(cur: &mut Cursor, sink: &mut Sink) -> Result<(), ParseError> {
    sink.push('"');
    number::scan_number(cur, sink)?;
    sink.push('"');
    Ok(())
}
