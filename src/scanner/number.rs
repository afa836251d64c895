use super::cursor::Cursor;
use super::lex;
use crate::emit::Sink;
use crate::error::{ParseError, SyntaxErrorKind};

/// Transduce one numeric literal into a canonical decimal JSON number.
///
/// Accepted forms: decimal integers and floats with `_` digit separators,
/// leading or trailing dots, `e`/`E` exponents, `0x`/`0o`/`0b` radix
/// prefixes, legacy leading-zero octal, and a `-` sign optionally separated
/// from the digits by whitespace. Everything non-decimal is converted, so
/// the emitted token always matches `-?\d+(\.\d+)?([eE][+-]?\d+)?`.
pub(crate) fn scan_number(cur: &mut Cursor, sink: &mut Sink) -> Result<(), ParseError> {
    let mut neg = false;
    if cur.peek() == Some(b'-') {
        cur.bump(1);
        neg = true;
        // sign split from digits: `- 4` is the number -4
        while cur.peek().is_some_and(lex::is_ws) {
            cur.bump(1);
        }
    }

    if cur.peek() == Some(b'0') {
        match cur.peek_at(1) {
            Some(b'x' | b'X') => return scan_radix(cur, sink, neg, 16),
            Some(b'o' | b'O') => return scan_radix(cur, sink, neg, 8),
            Some(b'b' | b'B') => return scan_radix(cur, sink, neg, 2),
            _ => {}
        }
    }

    let int = take_digits(cur, u8::is_ascii_digit)?;

    let mut frac: Option<String> = None;
    if cur.peek() == Some(b'.') {
        cur.bump(1);
        frac = Some(take_digits(cur, u8::is_ascii_digit)?);
    }
    if int.is_empty() && frac.as_deref().is_none_or(str::is_empty) {
        // a lone sign or dot reached us through dispatch
        return Err(bad_number(cur));
    }

    let mut exp: Option<(char, String)> = None;
    if let Some(e @ (b'e' | b'E')) = cur.peek() {
        cur.bump(1);
        let sign = match cur.peek() {
            Some(b'+') => {
                cur.bump(1);
                "+"
            }
            Some(b'-') => {
                cur.bump(1);
                "-"
            }
            _ => "",
        };
        let digits = take_digits(cur, u8::is_ascii_digit)?;
        if digits.is_empty() {
            return Err(bad_number(cur));
        }
        exp = Some((e as char, format!("{sign}{digits}")));
    }

    // legacy octal: integer-only, leading zero, all digits 0..=7
    if frac.is_none()
        && exp.is_none()
        && int.len() > 1
        && int.starts_with('0')
        && int.bytes().all(|b| (b'0'..=b'7').contains(&b))
    {
        let v = u128::from_str_radix(&int, 8).map_err(|_| bad_number(cur))?;
        if neg {
            sink.push('-');
        }
        sink.push_str(&v.to_string());
        return Ok(());
    }

    if neg {
        sink.push('-');
    }
    sink.push_str(canonical_int(&int));
    if let Some(frac) = frac {
        sink.push('.');
        if frac.is_empty() {
            // `12.` reads as 12.0
            sink.push('0');
        } else {
            sink.push_str(&frac);
        }
    }
    if let Some((e, digits)) = exp {
        sink.push(e);
        sink.push_str(&digits);
    }
    Ok(())
}

fn scan_radix(cur: &mut Cursor, sink: &mut Sink, neg: bool, radix: u32) -> Result<(), ParseError> {
    cur.bump(2); // 0x / 0o / 0b
    let accept: fn(&u8) -> bool = match radix {
        16 => u8::is_ascii_hexdigit,
        8 => |b| (b'0'..=b'7').contains(b),
        _ => |b| matches!(*b, b'0' | b'1'),
    };
    let digits = take_digits(cur, accept)?;
    if digits.is_empty() {
        return Err(bad_number(cur));
    }
    let v = u128::from_str_radix(&digits, radix).map_err(|_| bad_number(cur))?;
    if neg {
        sink.push('-');
    }
    sink.push_str(&v.to_string());
    Ok(())
}

/// Collect a digit run, validating and stripping `_` separators: an
/// underscore must sit between two accepted digits.
fn take_digits(cur: &mut Cursor, accept: fn(&u8) -> bool) -> Result<String, ParseError> {
    let mut out = String::new();
    let mut prev_sep = false;
    loop {
        match cur.peek() {
            Some(b'_') => {
                if out.is_empty() || prev_sep {
                    cur.bump(1);
                    return Err(ParseError::syntax(SyntaxErrorKind::BadNumber, cur.char_pos()));
                }
                prev_sep = true;
                cur.bump(1);
            }
            Some(b) if accept(&b) => {
                out.push(b as char);
                prev_sep = false;
                cur.bump(1);
            }
            _ => break,
        }
    }
    if prev_sep {
        // trailing underscore, already consumed
        return Err(ParseError::syntax(SyntaxErrorKind::BadNumber, cur.char_pos()));
    }
    Ok(out)
}

/// Integer part with redundant leading zeros dropped (`091` → `91`).
fn canonical_int(digits: &str) -> &str {
    if digits.is_empty() {
        return "0"; // `.5` reads as 0.5
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() { "0" } else { trimmed }
}

fn bad_number(cur: &mut Cursor) -> ParseError {
    super::err_at(cur, SyntaxErrorKind::BadNumber)
}
