/// Append-only buffer the scanners emit JSON into.
///
/// One sink lives per transcode call; multi-object mode uses a fresh scratch
/// sink per candidate so a failed scan leaves nothing behind.
#[derive(Debug, Default)]
pub(crate) struct Sink {
    buf: String,
}

impl Sink {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            buf: String::with_capacity(cap),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    #[inline]
    pub(crate) fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }

    /// Emit `s` as a strict-JSON double-quoted string, escaping `"`, `\`
    /// and control characters. Used for captured expressions; quoted input
    /// literals go through the string scanner instead, which preserves the
    /// escapes it found.
    pub(crate) fn push_json_string(&mut self, s: &str) {
        self.buf.push('"');
        let mut start = 0usize;
        for (i, ch) in s.char_indices() {
            let escape: Option<&str> = match ch {
                '"' => Some("\\\""),
                '\\' => Some("\\\\"),
                '\u{08}' => Some("\\b"),
                '\u{0C}' => Some("\\f"),
                '\n' => Some("\\n"),
                '\r' => Some("\\r"),
                '\t' => Some("\\t"),
                c if (c as u32) <= 0x1F => None, // \uXXXX below
                _ => continue,
            };
            if i > start {
                self.buf.push_str(&s[start..i]);
            }
            match escape {
                Some(esc) => self.buf.push_str(esc),
                None => {
                    use std::fmt::Write;
                    let _ = write!(self.buf, "\\u{:04X}", ch as u32);
                }
            }
            start = i + ch.len_utf8();
        }
        if start < s.len() {
            self.buf.push_str(&s[start..]);
        }
        self.buf.push('"');
    }
}
