use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::emit::Sink;
use crate::scanner::{self, Cursor};

/// Lazy multi-object extraction: yields every structurally well-formed
/// `{…}` / `[…]` in the input, left to right, as its strict-JSON text.
///
/// Malformed candidates are skipped silently: the opener search resumes
/// exactly one byte past the opener that failed, so an object nested inside
/// a broken one can still be recovered. Created by
/// [`transcode_stream`](crate::transcode_stream).
pub struct JsonObjects<'a> {
    input: Cow<'a, str>,
    pos: usize,
    omitempty: bool,
}

impl<'a> JsonObjects<'a> {
    pub(crate) fn new(input: Cow<'a, str>, omitempty: bool) -> Self {
        Self {
            input,
            pos: 0,
            omitempty,
        }
    }
}

impl Iterator for JsonObjects<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let open = scanner::find_opener(self.input.as_ref(), self.pos)?;
            let mut cur = Cursor::at(self.input.as_ref(), open);
            let mut sink = Sink::with_capacity(64);
            match scanner::scan_container(&mut cur, &mut sink) {
                Ok(()) => {
                    self.pos = cur.pos();
                    let doc = sink.into_string();
                    if self.omitempty && matches!(doc.as_str(), "{}" | "[]") {
                        continue;
                    }
                    return Some(doc);
                }
                Err(_) => {
                    self.pos = open + 1;
                }
            }
        }
    }
}

impl FusedIterator for JsonObjects<'_> {}

/// Batch wire form: documents joined with single NUL bytes, no trailing
/// delimiter. NUL cannot occur inside an emitted document, so the join is
/// unambiguous.
pub(crate) fn join_nul(docs: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for (i, doc) in docs.enumerate() {
        if i > 0 {
            out.push('\0');
        }
        out.push_str(&doc);
    }
    out
}
