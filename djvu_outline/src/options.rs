//! Configuration options for outline conversion.

use std::fmt;

/// Options for controlling how a bookmark outline is converted.
///
/// The defaults reproduce the format expected by `pdfbeads`: one tab per
/// nesting level, a one-character page sigil, and escaped quotes rewritten
/// as single quotes.
///
/// # Examples
///
/// ```
/// use djvu_outline::{ConvertOptions, EscapedQuote, Indent};
///
/// let opts = ConvertOptions {
///     indent: Indent::Spaces(2),
///     escaped_quote: EscapedQuote::Preserve,
///     ..Default::default()
/// };
/// assert_eq!(opts.tag_width, 1);
/// assert_eq!(opts.sigil_width, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Number of leading characters skipped before parsing starts.
    ///
    /// `djvused` prints the outline as `(bookmarks ...)`; skipping the opening
    /// parenthesis leaves the parser inside the bookmark list, and the word
    /// `bookmarks` is passed over like any other insignificant text.
    ///
    /// Default: `1`
    pub tag_width: usize,

    /// Number of characters dropped from a target after its opening quote.
    ///
    /// Default: `1` (the `#` in `"#12"`)
    pub sigil_width: usize,

    /// Indentation unit added for each nesting level.
    ///
    /// Default: [`Indent::Tab`]
    pub indent: Indent,

    /// How `\"` inside a literal is rewritten.
    ///
    /// Default: [`EscapedQuote::SingleQuote`]
    pub escaped_quote: EscapedQuote,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            tag_width: 1,
            sigil_width: 1,
            indent: Indent::Tab,
            escaped_quote: EscapedQuote::SingleQuote,
        }
    }
}

/// Indentation unit used for each level of nesting.
///
/// # Examples
///
/// ```
/// use djvu_outline::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(4).unit(), "    ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// One tab character per level.
    Tab,
    /// A fixed number of spaces per level.
    Spaces(usize),
}

impl Indent {
    /// Returns the string appended to the prefix for one level.
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indent::Tab => write!(f, "tab"),
            Indent::Spaces(n) => write!(f, "{} spaces", n),
        }
    }
}

/// Rewriting applied to a backslash-escaped quote inside a literal.
///
/// `pdfbeads` cannot read escaped quotes, so by default each `\"` becomes a
/// single `'`.
///
/// # Examples
///
/// ```
/// use djvu_outline::EscapedQuote;
///
/// assert_eq!(EscapedQuote::SingleQuote.as_str(), "'");
/// assert_eq!(EscapedQuote::Preserve.as_str(), "\\\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapedQuote {
    /// Replace `\"` with `'` (default).
    SingleQuote,
    /// Keep `\"` as it appears in the input.
    Preserve,
}

impl EscapedQuote {
    /// Returns the text written in place of an escaped quote.
    pub fn as_str(&self) -> &'static str {
        match self {
            EscapedQuote::SingleQuote => "'",
            EscapedQuote::Preserve => "\\\"",
        }
    }
}

impl fmt::Display for EscapedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapedQuote::SingleQuote => write!(f, "single-quote"),
            EscapedQuote::Preserve => write!(f, "preserve"),
        }
    }
}
