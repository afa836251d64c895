//! Chomp JavaScript object and array literals out of arbitrary text and
//! re-emit them as strict JSON.
//!
//! Scraped pages, `<script>` blocks, logs and config blobs carry values in
//! JavaScript's permissive literal syntax: unquoted keys, single-quoted and
//! backtick strings, comments, trailing commas, hex and underscore-separated
//! numbers, `undefined`, bare regex and function values. This crate runs a
//! single byte-level pass over such text and emits strict JSON for any JSON
//! decoder to consume; it never builds a value tree of its own.
//!
//! ```
//! use jschomp::{transcode_one, Options};
//!
//! let page = "var data = {price: '12,90', tags: [1, 2, 3,], /* cached */};";
//! let json = transcode_one(page, &Options::default())?;
//! assert_eq!(json, r#"{"price":"12,90","tags":[1,2,3]}"#);
//! # Ok::<(), jschomp::ParseError>(())
//! ```
//!
//! [`transcode_one`] extracts the first object or array and fails loudly;
//! [`transcode_stream`] walks the whole input and yields every recoverable
//! document, silently skipping malformed ones.

mod emit;
pub mod error;
pub mod options;
mod scanner;
pub mod stream;
mod unescape;

pub use error::{ParseError, SyntaxErrorKind};
pub use options::Options;
pub use stream::JsonObjects;

use std::borrow::Cow;
use std::io::Write;

fn pre_pass<'i>(input: &'i str, opts: &Options) -> Cow<'i, str> {
    if opts.unicode_escape {
        Cow::Owned(unescape::unicode_unescape(input))
    } else {
        Cow::Borrowed(input)
    }
}

/// Transduce the first complete `{…}` or `[…]` in `input` into strict JSON.
///
/// Text before the opener is noise and skipped without interpretation; text
/// after the matched closer is ignored. Fails with [`ParseError`] carrying
/// the 1-based character position when the candidate is malformed, and with
/// `Invalid input` when `input` is empty.
///
/// ```
/// use jschomp::{transcode_one, Options};
///
/// let json = transcode_one("{'hello': 'world'}", &Options::default())?;
/// assert_eq!(json, r#"{"hello":"world"}"#);
/// # Ok::<(), jschomp::ParseError>(())
/// ```
pub fn transcode_one(input: &str, opts: &Options) -> Result<String, ParseError> {
    scanner::transcode_single(&pre_pass(input, opts))
}

/// Like [`transcode_one`], writing the emitted JSON into `writer` instead of
/// returning it.
///
/// ```
/// use jschomp::{transcode_one_to_writer, Options};
///
/// let mut out = Vec::new();
/// transcode_one_to_writer("{a: 0x10}", &Options::default(), &mut out)?;
/// assert_eq!(out, br#"{"a":16}"#);
/// # Ok::<(), jschomp::ParseError>(())
/// ```
pub fn transcode_one_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), ParseError> {
    let json = transcode_one(input, opts)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| ParseError::Io(e.to_string()))
}

/// Walk the whole input and lazily yield every recoverable JSON document,
/// in input order. Malformed candidates are dropped silently; empty `{}` /
/// `[]` documents are yielded unless [`Options::omitempty`] is set.
///
/// ```
/// use jschomp::{transcode_stream, Options};
///
/// let docs: Vec<String> =
///     transcode_stream("a {x: 1} b [2] c", &Options::default()).collect();
/// assert_eq!(docs, [r#"{"x":1}"#.to_string(), "[2]".to_string()]);
/// ```
pub fn transcode_stream<'a>(input: &'a str, opts: &Options) -> JsonObjects<'a> {
    JsonObjects::new(pre_pass(input, opts), opts.omitempty)
}

/// [`transcode_stream`] materialized into the batch wire form: documents
/// joined with single NUL (`0x00`) bytes, no trailing delimiter. An input
/// yielding nothing produces the empty string.
pub fn transcode_all(input: &str, opts: &Options) -> String {
    stream::join_nul(transcode_stream(input, opts))
}

/// Transduce and decode the first document into a [`serde_json::Value`].
///
/// Note that `serde_json` is a strict decoder: output containing `NaN` (or
/// non-strict string content the scanner deliberately passes through) is
/// rejected here and reported as [`ParseError::Decode`]; use
/// [`transcode_one`] and your own decoder configuration for those inputs.
///
/// ```
/// use jschomp::{to_value, Options};
///
/// let v = to_value("{name: 'Ada', id: 0x10}", &Options::default())?;
/// assert_eq!(v["name"], "Ada");
/// assert_eq!(v["id"], 16);
/// # Ok::<(), jschomp::ParseError>(())
/// ```
#[cfg(feature = "serde")]
pub fn to_value(input: &str, opts: &Options) -> Result<serde_json::Value, ParseError> {
    let json = transcode_one(input, opts)?;
    serde_json::from_str(&json).map_err(|e| ParseError::Decode(e.to_string()))
}

/// Transduce and decode every recoverable document, dropping any that
/// `serde_json` rejects (see the [`to_value`] note on `NaN`).
#[cfg(feature = "serde")]
pub fn to_values(input: &str, opts: &Options) -> Vec<serde_json::Value> {
    transcode_stream(input, opts)
        .filter_map(|doc| serde_json::from_str(&doc).ok())
        .collect()
}

#[cfg(test)]
mod tests;
