//! Quoted literal scanning.
//!
//! Literals are returned with their opening quote kept and their closing
//! quote dropped, which is the shape `pdfbeads` expects: `"Intro` rather than
//! `"Intro"`.

use crate::error::{Error, ErrorKind, Result};
use crate::options::ConvertOptions;

/// Scans the next quoted literal at or after `cursor`.
///
/// Anything before the opening quote is skipped, except list markers: a
/// close marker means the current entry has run out of literals, and an open
/// marker would start a list that no entry owns. Returns the byte
/// offset just past the closing quote together with the normalized literal.
///
/// # Examples
///
/// ```
/// use djvu_outline::{next_quote, ConvertOptions};
///
/// let input = r#"  "He said \"hi\"" rest"#;
/// let (cursor, literal) = next_quote(input, 0, &ConvertOptions::default()).unwrap();
///
/// assert_eq!(literal, "\"He said 'hi'");
/// assert_eq!(&input[cursor..], " rest");
/// ```
pub fn next_quote(input: &str, cursor: usize, options: &ConvertOptions) -> Result<(usize, String)> {
    let open = find_opening_quote(input, cursor)?;
    let bytes = input.as_bytes();

    let mut literal = String::from("\"");
    let mut segment = open + 1;
    let mut pos = open + 1;

    loop {
        match bytes.get(pos) {
            None => {
                return Err(Error::new(
                    ErrorKind::UnterminatedLiteral,
                    "Quoted literal is never closed",
                )
                .at_offset(input, open));
            }
            // pos > open here, so the preceding byte is always in bounds
            Some(b'"') if bytes[pos - 1] == b'\\' => {
                literal.push_str(&input[segment..pos - 1]);
                literal.push_str(options.escaped_quote.as_str());
                segment = pos + 1;
            }
            Some(b'"') => {
                literal.push_str(&input[segment..pos]);
                return Ok((pos + 1, literal));
            }
            Some(_) => {}
        }
        pos += 1;
    }
}

fn find_opening_quote(input: &str, cursor: usize) -> Result<usize> {
    let rest = input.as_bytes().get(cursor..).unwrap_or_default();

    match rest.iter().position(|&b| matches!(b, b'"' | b'(' | b')')) {
        Some(i) if rest[i] == b'"' => Ok(cursor + i),
        Some(i) if rest[i] == b'(' => Err(Error::new(
            ErrorKind::MalformedOutline,
            "Expected a quoted literal before '('",
        )
        .at_offset(input, cursor + i)),
        Some(i) => Err(Error::new(
            ErrorKind::MissingQuote,
            "Expected a quoted literal before ')'",
        )
        .at_offset(input, cursor + i)),
        None => Err(Error::new(
            ErrorKind::MissingQuote,
            "Expected a quoted literal before end of input",
        )
        .at_offset(input, input.len())),
    }
}

/// Removes the page sigil from a scanned target literal.
///
/// The first character (the opening quote) is kept, the next `width`
/// characters are dropped, and the remainder is kept unchanged.
///
/// # Examples
///
/// ```
/// use djvu_outline::strip_sigil;
///
/// assert_eq!(strip_sigil("\"#12", 1), "\"12");
/// assert_eq!(strip_sigil("\"#12", 0), "\"#12");
/// assert_eq!(strip_sigil("\"", 1), "\"");
/// ```
pub fn strip_sigil(literal: &str, width: usize) -> String {
    let mut chars = literal.chars();
    match chars.next() {
        Some(first) => {
            let mut stripped = String::with_capacity(literal.len());
            stripped.push(first);
            stripped.extend(chars.skip(width));
            stripped
        }
        None => String::new(),
    }
}
