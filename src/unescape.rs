use memchr::memchr;

/// Remove one level of string escaping from input that was itself embedded
/// in a quoted string, turning `{\"a\": 1}` back into `{"a": 1}` before the
/// scan.
///
/// Handles `\xNN`, `\uXXXX`, `\UXXXXXXXX`, up-to-three-digit octal escapes,
/// the single-letter escapes (`\n`, `\r`, `\t`, `\b`, `\f`, `\v`, `\a`),
/// escaped quotes and backslashes, and line continuations. An escape that
/// does not decode (unknown letter, short hex run, lone surrogate) keeps its
/// backslash, matching the permissive spirit of the scanner itself.
pub(crate) fn unicode_unescape(input: &str) -> String {
    let b = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0usize;
    while i < b.len() {
        if b[i] != b'\\' {
            let run_end = memchr(b'\\', &b[i..]).map_or(input.len(), |p| i + p);
            out.push_str(&input[i..run_end]);
            i = run_end;
            continue;
        }
        let Some(&e) = b.get(i + 1) else {
            out.push('\\');
            break;
        };
        match e {
            b'n' => {
                out.push('\n');
                i += 2;
            }
            b'r' => {
                out.push('\r');
                i += 2;
            }
            b't' => {
                out.push('\t');
                i += 2;
            }
            b'b' => {
                out.push('\u{08}');
                i += 2;
            }
            b'f' => {
                out.push('\u{0C}');
                i += 2;
            }
            b'v' => {
                out.push('\u{0B}');
                i += 2;
            }
            b'a' => {
                out.push('\u{07}');
                i += 2;
            }
            b'\\' | b'\'' | b'"' => {
                out.push(e as char);
                i += 2;
            }
            b'\n' => i += 2, // line continuation
            b'0'..=b'7' => {
                let mut v = u32::from(e - b'0');
                let mut end = i + 2;
                while end < b.len() && end < i + 4 && (b'0'..=b'7').contains(&b[end]) {
                    v = v * 8 + u32::from(b[end] - b'0');
                    end += 1;
                }
                out.push(char::from_u32(v).unwrap_or('\u{FFFD}'));
                i = end;
            }
            b'x' | b'u' | b'U' => {
                let want = match e {
                    b'x' => 2,
                    b'u' => 4,
                    _ => 8,
                };
                let start = i + 2;
                let end = start + want;
                let valid = end <= b.len() && b[start..end].iter().all(u8::is_ascii_hexdigit);
                let decoded = if valid {
                    u32::from_str_radix(&input[start..end], 16)
                        .ok()
                        .and_then(char::from_u32)
                } else {
                    None
                };
                match decoded {
                    Some(c) => {
                        out.push(c);
                        i = end;
                    }
                    None => {
                        out.push('\\');
                        out.push(e as char);
                        i += 2;
                    }
                }
            }
            _ => {
                // unknown escape keeps its backslash
                out.push('\\');
                let len = input[i + 1..].chars().next().map_or(0, char::len_utf8);
                out.push_str(&input[i + 1..i + 1 + len]);
                i += 1 + len;
            }
        }
    }
    out
}
