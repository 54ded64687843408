//! Error types for outline conversion.
//!
//! Every malformed input surfaces as one of these errors, with location
//! information pointing at the offending character when it is known.

use std::fmt;

/// A specialized `Result` type for outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for outline operations.
///
/// Errors carry a specific kind, a descriptive message, and optional
/// line/column location information.
///
/// # Examples
///
/// ```
/// use djvu_outline::{convert_str, ErrorKind};
///
/// let err = convert_str("(bookmarks (\"Intro\" \"#1\"").unwrap_err();
/// assert!(matches!(err.kind(), ErrorKind::MalformedOutline));
/// assert!(err.to_string().contains("line 1"));
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

/// Specific kinds of errors that can occur during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A quoted literal was opened but never closed by an unescaped quote.
    UnterminatedLiteral,
    /// Open and close markers do not balance.
    ///
    /// # Example
    /// ```text
    /// (bookmarks ("Intro" "#1"     // MalformedOutline: input ends inside an entry
    /// ```
    MalformedOutline,
    /// An entry is missing its title or target literal.
    ///
    /// # Example
    /// ```text
    /// (bookmarks ("Intro") )       // MissingQuote: no target before ')'
    /// ```
    MissingQuote,
    /// Byte input was not valid UTF-8.
    InvalidUtf8,
    /// An I/O error occurred during reading or writing.
    Io(String),
}

impl Error {
    /// Creates a new error with the specified kind and message.
    ///
    /// # Examples
    ///
    /// ```
    /// use djvu_outline::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::MissingQuote, "expected a title");
    /// assert_eq!(err.kind(), &ErrorKind::MissingQuote);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Adds location information to this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use djvu_outline::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::UnterminatedLiteral, "unterminated literal")
    ///     .with_location(5, 12);
    ///
    /// let msg = format!("{}", err);
    /// assert!(msg.contains("line 5"));
    /// assert!(msg.contains("column 12"));
    /// ```
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds the location of byte `offset` within `input`.
    ///
    /// Lines and columns are 1-based; columns count characters, not bytes.
    /// Offsets past the end of `input` are clamped to its end.
    pub fn at_offset(self, input: &str, offset: usize) -> Self {
        let mut offset = offset.min(input.len());
        while !input.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &input[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        self.with_location(line, column)
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the 1-based line and column, if known.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.line.zip(self.column)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{} at line {}, column {}", self.message, line, col)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnterminatedLiteral => write!(f, "unterminated literal"),
            ErrorKind::MalformedOutline => write!(f, "malformed outline"),
            ErrorKind::MissingQuote => write!(f, "missing quote"),
            ErrorKind::InvalidUtf8 => write!(f, "invalid utf-8"),
            ErrorKind::Io(msg) => write!(f, "i/o error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrorKind::Io(err.to_string()), err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::new(ErrorKind::InvalidUtf8, err.to_string())
    }
}
