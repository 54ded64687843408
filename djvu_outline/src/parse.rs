//! Recursive-descent walk over the bookmark list.
//!
//! The walker does not build a syntax tree. Each `(title target ...)` entry is
//! handed to an [`OutlineSink`] as soon as both literals are scanned, in
//! depth-first pre-order, together with the indentation prefix of its level.

use crate::error::{Error, ErrorKind, Result};
use crate::options::ConvertOptions;
use crate::scan::{next_quote, strip_sigil};

/// Receives outline entries in document order.
///
/// `prefix` is the indentation of the entry's level: empty at the top level
/// and one indentation unit longer for each level of nesting.
pub trait OutlineSink {
    fn entry(&mut self, prefix: &str, title: &str, target: &str);
}

/// Collects one formatted `<prefix><title> <target>` line per entry.
impl OutlineSink for Vec<String> {
    fn entry(&mut self, prefix: &str, title: &str, target: &str) {
        self.push(format!("{}{} {}", prefix, title, target));
    }
}

/// Parses sibling entries starting at `cursor` until the close marker of the
/// enclosing list, and returns the offset just past that marker.
///
/// The enclosing open marker must already be consumed. Children of an entry
/// are parsed with `prefix` extended by one indentation unit. Text between
/// entries is ignored, except for quoted literals, which may only appear
/// inside an entry.
///
/// # Examples
///
/// ```
/// use djvu_outline::{parse_entries, ConvertOptions};
///
/// let input = r##"bookmarks ("A" "#1" ("B" "#2")) ("C" "#3")) trailing"##;
/// let mut lines: Vec<String> = Vec::new();
/// let end = parse_entries(input, 0, "", &ConvertOptions::default(), &mut lines).unwrap();
///
/// assert_eq!(lines, vec!["\"A \"1", "\t\"B \"2", "\"C \"3"]);
/// assert_eq!(&input[end..], " trailing");
/// ```
pub fn parse_entries<S>(
    input: &str,
    cursor: usize,
    prefix: &str,
    options: &ConvertOptions,
    sink: &mut S,
) -> Result<usize>
where
    S: OutlineSink + ?Sized,
{
    let unit = options.indent.unit();
    parse_level(input, cursor, prefix, &unit, options, sink, cursor)
}

/// Parses a whole outline document whose leading tag ends at `start`.
///
/// The bookmark list's own open marker is either part of the tag, as in
/// `(bookmarks ...)`, or the first marker after it, as in `X(...)`. Only
/// whitespace may follow the list's close marker. Returns the offset just past
/// that marker.
///
/// # Examples
///
/// ```
/// use djvu_outline::{parse_document, ConvertOptions};
///
/// let opts = ConvertOptions::default();
/// let mut lines: Vec<String> = Vec::new();
///
/// parse_document(r##"(bookmarks ("A" "#1"))"##, 1, &opts, &mut lines).unwrap();
/// parse_document(r##"X(("B" "#2"))"##, 1, &opts, &mut lines).unwrap();
/// parse_document("X()", 1, &opts, &mut lines).unwrap();
///
/// assert_eq!(lines, vec!["\"A \"1", "\"B \"2"]);
/// ```
pub fn parse_document<S>(
    input: &str,
    start: usize,
    options: &ConvertOptions,
    sink: &mut S,
) -> Result<usize>
where
    S: OutlineSink + ?Sized,
{
    let (cursor, opened_at) = match open_in_tag(input, start)? {
        Some(opened_at) => (start, opened_at),
        None => {
            let opened_at = find_list_open(input, start)?;
            (opened_at + 1, opened_at)
        }
    };

    let unit = options.indent.unit();
    let end = parse_level(input, cursor, "", &unit, options, sink, opened_at)?;

    let rest = &input[end..];
    let trimmed = rest.trim_start();
    if !trimmed.is_empty() {
        return Err(Error::new(
            ErrorKind::MalformedOutline,
            "Unexpected text after the end of the outline",
        )
        .at_offset(input, end + rest.len() - trimmed.len()));
    }

    Ok(end)
}

/// Offset of the open marker consumed by the tag, if the tag holds one.
fn open_in_tag(input: &str, start: usize) -> Result<Option<usize>> {
    let mut open = Vec::new();

    for (i, b) in input.as_bytes()[..start].iter().copied().enumerate() {
        match b {
            b'(' => open.push(i),
            b')' => {
                if open.pop().is_none() {
                    return Err(Error::new(
                        ErrorKind::MalformedOutline,
                        "Close marker has no matching open marker",
                    )
                    .at_offset(input, i));
                }
            }
            _ => {}
        }
    }

    match open.as_slice() {
        [] => Ok(None),
        [opened_at] => Ok(Some(*opened_at)),
        [_, second, ..] => Err(Error::new(
            ErrorKind::MalformedOutline,
            "Tag opens more than one list",
        )
        .at_offset(input, *second)),
    }
}

fn find_list_open(input: &str, cursor: usize) -> Result<usize> {
    let rest = &input.as_bytes()[cursor..];

    match rest.iter().position(|&b| matches!(b, b'"' | b'(' | b')')) {
        Some(i) if rest[i] == b'(' => Ok(cursor + i),
        Some(i) => Err(Error::new(
            ErrorKind::MalformedOutline,
            "Expected '(' opening the bookmark list",
        )
        .at_offset(input, cursor + i)),
        None => Err(Error::new(
            ErrorKind::MalformedOutline,
            "Expected '(' opening the bookmark list before end of input",
        )
        .at_offset(input, input.len())),
    }
}

fn parse_level<S>(
    input: &str,
    mut cursor: usize,
    prefix: &str,
    unit: &str,
    options: &ConvertOptions,
    sink: &mut S,
    opened_at: usize,
) -> Result<usize>
where
    S: OutlineSink + ?Sized,
{
    let bytes = input.as_bytes();

    loop {
        match bytes.get(cursor) {
            Some(b'(') => {
                let (next, title) = next_quote(input, cursor + 1, options)?;
                let (next, target) = next_quote(input, next, options)?;
                let target = strip_sigil(&target, options.sigil_width);

                sink.entry(prefix, &title, &target);

                let child_prefix = format!("{}{}", prefix, unit);
                cursor = parse_level(input, next, &child_prefix, unit, options, sink, cursor)?;
            }
            Some(b')') => return Ok(cursor + 1),
            Some(b'"') => {
                return Err(Error::new(
                    ErrorKind::MalformedOutline,
                    "Quoted literal outside of an entry",
                )
                .at_offset(input, cursor));
            }
            Some(_) => cursor += 1,
            None => {
                return Err(Error::new(
                    ErrorKind::MalformedOutline,
                    "Input ends before the list opened here is closed",
                )
                .at_offset(input, opened_at));
            }
        }
    }
}
