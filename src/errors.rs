//! Pericope error handling.
//!
//! Every parse failure is represented as data: a [`ParseError`] carries the
//! query it was parsing, a span over the offending token, and a help message,
//! and renders as a full `miette` diagnostic. Nothing in this crate raises on
//! bad input; absence of a book in the directory is `None`, and a bad query is
//! an `Err` the caller inspects.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Type-safe error classification corresponding to [`ParseError`] variants.
/// Use this in test assertions instead of matching on rendered messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Input was empty or whitespace-only
    EmptyInput,
    /// The book portion did not resolve in the directory
    UnknownBook,
    /// No grammar rule matched the input
    UnrecognizedFormat,
    /// A chapter or verse token was zero or did not fit 32 bits
    NumberOutOfRange,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "EmptyInput",
            ParseErrorKind::UnknownBook => "UnknownBook",
            ParseErrorKind::UnrecognizedFormat => "UnrecognizedFormat",
            ParseErrorKind::NumberOutOfRange => "NumberOutOfRange",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type for all quick-search parse failures.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("search text is empty")]
    #[diagnostic(
        code(pericope::parse::empty),
        help("type a reference like `Ge 1 2`, `Mt 5:3`, or `Jn 3:16-17`")
    )]
    EmptyInput,

    #[error("unknown book '{token}'")]
    #[diagnostic(code(pericope::parse::unknown_book))]
    UnknownBook {
        token: String,
        #[source_code]
        src: String,
        #[label("not a book name or abbreviation")]
        span: SourceSpan,
        #[help]
        help: Option<String>,
    },

    #[error("unrecognized reference format")]
    #[diagnostic(code(pericope::parse::format))]
    UnrecognizedFormat {
        #[source_code]
        src: String,
        #[label("no reference pattern matches this")]
        span: SourceSpan,
        #[help]
        help: Option<String>,
    },

    #[error("number '{token}' is out of range for a chapter or verse")]
    #[diagnostic(code(pericope::parse::number_range))]
    NumberOutOfRange {
        token: String,
        #[source_code]
        src: String,
        #[label("out of range")]
        span: SourceSpan,
        #[help]
        help: Option<String>,
    },
}

impl ParseError {
    /// Returns the type-safe classification for this error.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyInput => ParseErrorKind::EmptyInput,
            ParseError::UnknownBook { .. } => ParseErrorKind::UnknownBook,
            ParseError::UnrecognizedFormat { .. } => ParseErrorKind::UnrecognizedFormat,
            ParseError::NumberOutOfRange { .. } => ParseErrorKind::NumberOutOfRange,
        }
    }
}
