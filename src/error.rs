use thiserror::Error;

/// What the scanner tripped over. Carried for programmatic matching; the
/// rendered message is the same for every syntax failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    /// The input contains no `{` or `[` at all.
    NoStructureFound,
    /// A byte that cannot start or continue the current construct.
    UnexpectedChar,
    /// End of input in the middle of a container, value, or capture.
    UnexpectedEnd,
    /// A quoted literal ran to end of input without its closing quote.
    UnterminatedString,
    /// A `/*` comment ran to end of input without `*/`.
    UnterminatedComment,
    /// A numeric literal with misplaced underscores, an empty digit run,
    /// an empty exponent, or an out-of-range radix conversion.
    BadNumber,
}

/// Failure of a single-object transcode.
///
/// The rendered message is stable and relied on by downstream callers:
/// syntax errors format as `Error parsing input near character N`, where
/// `N` is 1-based and counted in Unicode scalar values (not bytes) from the
/// start of the scanned input. The scanner consumes the offending character
/// before raising, so `N` names the first character it never read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input was empty.
    #[error("Invalid input")]
    EmptyInput,
    /// The scan failed at `char_pos`.
    #[error("Error parsing input near character {char_pos}")]
    Syntax {
        kind: SyntaxErrorKind,
        char_pos: usize,
    },
    /// Writing the emitted JSON to a caller-supplied writer failed.
    #[error("error writing output: {0}")]
    Io(String),
    /// The emitted JSON was rejected by the downstream decoder.
    #[cfg(feature = "serde")]
    #[error("emitted JSON rejected by decoder: {0}")]
    Decode(String),
}

impl ParseError {
    pub(crate) fn syntax(kind: SyntaxErrorKind, char_pos: usize) -> Self {
        ParseError::Syntax { kind, char_pos }
    }

    /// The syntax failure kind, if this is a syntax error.
    pub fn kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            ParseError::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The 1-based character position of the failure, if it has one.
    pub fn char_pos(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { char_pos, .. } => Some(*char_pos),
            _ => None,
        }
    }
}
