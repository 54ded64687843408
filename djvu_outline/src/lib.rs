//! Converts `djvused` bookmark outlines into the indented text outline read by
//! `pdfbeads`.
//!
//! `djvused -e print-outline` prints a document's bookmarks as a parenthesized
//! list of `(title target ...)` entries, where nested entries follow the
//! target:
//!
//! ```text
//! (bookmarks
//!  ("Preface" "#5")
//!  ("Part One" "#9"
//!   ("Chapter 1" "#11") ) )
//! ```
//!
//! The converted outline has one line per entry, indented with one tab per
//! level of nesting:
//!
//! ```text
//! "Preface "5
//! "Part One "9
//! 	"Chapter 1 "11
//! ```
//!
//! Each literal keeps its opening quote and loses its closing one, targets
//! lose their `#` page sigil, and escaped quotes inside a title become single
//! quotes, since `pdfbeads` cannot read them.
//!
//! # Usage
//!
//! ```
//! use djvu_outline::convert_str;
//!
//! let input = "(bookmarks\n (\"Preface\" \"#5\")\n (\"Part One\" \"#9\"\n  (\"Chapter 1\" \"#11\") ) )";
//! let text = convert_str(input).unwrap();
//!
//! assert_eq!(text, "\"Preface \"5\n\"Part One \"9\n\t\"Chapter 1 \"11");
//! ```
//!
//! The same input can be parsed into a tree instead:
//!
//! ```
//! use djvu_outline::parse_outline;
//!
//! let outline = parse_outline("(bookmarks (\"Part One\" \"#9\" (\"Chapter 1\" \"#11\")))").unwrap();
//! assert_eq!(outline.entries[0].children.len(), 1);
//! ```
//!
//! # Error Handling
//!
//! Malformed input is reported instead of producing a truncated outline:
//!
//! ```
//! use djvu_outline::{convert_str, ErrorKind};
//!
//! let err = convert_str("(bookmarks (\"Preface\" \"#5)").unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::UnterminatedLiteral);
//! ```

pub mod convert;
pub mod error;
pub mod options;
pub mod outline;
pub mod parse;
pub mod scan;

pub use convert::{
    convert_lines, convert_reader, convert_reader_with_options, convert_slice,
    convert_slice_with_options, convert_str, convert_str_with_options, convert_to_writer,
    convert_to_writer_with_options, parse_outline, parse_outline_with_options,
};
pub use error::{Error, ErrorKind, Result};
pub use options::{ConvertOptions, EscapedQuote, Indent};
pub use outline::{Entry, Outline, TreeBuilder};
pub use parse::{OutlineSink, parse_document, parse_entries};
pub use scan::{next_quote, strip_sigil};
