use super::cursor::Cursor;
use super::{Closer, err_at, err_eof, lex, scan_value};
use crate::emit::Sink;
use crate::error::{ParseError, SyntaxErrorKind};

/// Array state machine. The cursor sits on `[`. Same comma discipline as
/// the object scanner: one trailing comma is tolerated, two in a row are
/// fatal.
pub(crate) fn scan_array(cur: &mut Cursor, sink: &mut Sink) -> Result<(), ParseError> {
    cur.bump(1);
    sink.push('[');
    lex::skip_ws_and_comments(cur)?;
    if cur.peek() == Some(b']') {
        cur.bump(1);
        sink.push(']');
        return Ok(());
    }
    let mut first = true;
    loop {
        if !first {
            sink.push(',');
        }
        first = false;

        scan_value(cur, sink, Closer::Bracket)?;
        lex::skip_ws_and_comments(cur)?;
        match cur.peek() {
            Some(b']') => {
                cur.bump(1);
                sink.push(']');
                return Ok(());
            }
            Some(b',') => {
                cur.bump(1);
                lex::skip_ws_and_comments(cur)?;
                match cur.peek() {
                    Some(b']') => {
                        cur.bump(1);
                        sink.push(']');
                        return Ok(());
                    }
                    Some(b',') => return Err(err_at(cur, SyntaxErrorKind::UnexpectedChar)),
                    Some(_) => {} // next element
                    None => return Err(err_eof(cur)),
                }
            }
            Some(_) => return Err(err_at(cur, SyntaxErrorKind::UnexpectedChar)),
            None => return Err(err_eof(cur)),
        }
    }
}
