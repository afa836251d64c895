/// Wrapper-level switches. The scan core itself sees only the input text;
/// both options are applied around it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Un-escape `\xNN`, `\uXXXX`, `\\"`-style sequences before scanning,
    /// for input that has been string-escaped one extra time (e.g.
    /// `{\"a\": 1}` lifted out of a JSON string). Error positions refer to
    /// the un-escaped text.
    pub unicode_escape: bool,
    /// Drop empty `{}` and `[]` documents from multi-object output.
    pub omitempty: bool,
}
