use memchr::{memchr, memchr2};

use super::cursor::Cursor;
use crate::error::{ParseError, SyntaxErrorKind};

/// ASCII whitespace as JavaScript source treats it between tokens: space,
/// tab, CR, LF, form feed, vertical tab.
#[inline]
pub(crate) fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C | 0x0B)
}

#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Byte length of the `[A-Za-z_$][A-Za-z0-9_$]*` identifier at the cursor,
/// zero if the next byte cannot start one.
pub(crate) fn ident_len(cur: &Cursor) -> usize {
    let bytes = cur.remaining_bytes();
    match bytes.first() {
        Some(&b) if is_ident_start(b) => {}
        _ => return 0,
    }
    let mut i = 1usize;
    while i < bytes.len() && is_ident_continue(bytes[i]) {
        i += 1;
    }
    i
}

/// Consume whitespace, `//`-to-EOL comments, and `/* */` comments until the
/// next significant byte. An unterminated `/*` is fatal.
pub(crate) fn skip_ws_and_comments(cur: &mut Cursor) -> Result<(), ParseError> {
    loop {
        while let Some(b) = cur.peek() {
            if is_ws(b) {
                cur.bump(1);
            } else {
                break;
            }
        }
        if cur.match_literal(b"//") {
            let rest = cur.remaining_bytes();
            match memchr2(b'\n', b'\r', rest) {
                Some(p) => cur.bump(p + 1),
                None => cur.bump(rest.len()),
            }
            continue;
        }
        if cur.match_literal(b"/*") {
            let rest = cur.remaining_bytes();
            let mut off = 0usize;
            loop {
                match memchr(b'*', &rest[off..]) {
                    Some(p) => {
                        let star = off + p;
                        if rest.get(star + 1) == Some(&b'/') {
                            cur.bump(star + 2);
                            break;
                        }
                        off = star + 1;
                    }
                    None => {
                        cur.bump(rest.len());
                        return Err(ParseError::syntax(
                            SyntaxErrorKind::UnterminatedComment,
                            cur.char_pos(),
                        ));
                    }
                }
            }
            continue;
        }
        return Ok(());
    }
}
