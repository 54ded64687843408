//! Whole-input conversion entry points.
//!
//! Every function here converts the complete outline before returning or
//! writing anything.

use crate::error::{Error, ErrorKind, Result};
use crate::options::{ConvertOptions, Indent};
use crate::outline::{Outline, TreeBuilder};
use crate::parse::{OutlineSink, parse_document};
use std::io::{Read, Write};

/// Converts a `djvused` outline to tab-indented text using default options.
///
/// Entries are joined with `\n` and there is no trailing newline. Empty or
/// whitespace-only input converts to an empty string. Nothing is returned on
/// error, so a failed conversion never yields a partial outline.
///
/// # Examples
///
/// ```
/// use djvu_outline::convert_str;
///
/// let input = r##"(bookmarks ("Preface" "#5") ("Part \"One\"" "#9" ("Chapter 1" "#11")))"##;
/// let text = convert_str(input).unwrap();
///
/// assert_eq!(text, "\"Preface \"5\n\"Part 'One' \"9\n\t\"Chapter 1 \"11");
/// assert_eq!(convert_str("").unwrap(), "");
/// ```
pub fn convert_str(input: &str) -> Result<String> {
    convert_str_with_options(input, ConvertOptions::default())
}

/// Converts a `djvused` outline to indented text with custom options.
///
/// # Examples
///
/// ```
/// use djvu_outline::{convert_str_with_options, ConvertOptions, Indent};
///
/// let opts = ConvertOptions {
///     indent: Indent::Spaces(4),
///     ..Default::default()
/// };
/// let text = convert_str_with_options(r##"(bookmarks ("A" "#1" ("B" "#2")))"##, opts).unwrap();
/// assert_eq!(text, "\"A \"1\n    \"B \"2");
/// ```
pub fn convert_str_with_options(input: &str, options: ConvertOptions) -> Result<String> {
    let lines = convert_lines(input, &options)?;
    Ok(lines.join("\n"))
}

/// Converts a `djvused` outline to one text line per entry.
pub fn convert_lines(input: &str, options: &ConvertOptions) -> Result<Vec<String>> {
    let mut lines: Vec<String> = Vec::new();
    run(input, options, &mut lines)?;
    log::debug!("converted {} outline entries", lines.len());
    Ok(lines)
}

/// Converts UTF-8 encoded bytes using default options.
pub fn convert_slice(v: &[u8]) -> Result<String> {
    convert_slice_with_options(v, ConvertOptions::default())
}

pub fn convert_slice_with_options(v: &[u8], options: ConvertOptions) -> Result<String> {
    let s = std::str::from_utf8(v)?;
    convert_str_with_options(s, options)
}

/// Reads the whole outline from `rdr` and converts it using default options.
///
/// # Examples
///
/// ```
/// use djvu_outline::convert_reader;
/// use std::io::Cursor;
///
/// let rdr = Cursor::new(r##"(bookmarks ("Index" "#200"))"##);
/// assert_eq!(convert_reader(rdr).unwrap(), "\"Index \"200");
/// ```
pub fn convert_reader<R: Read>(rdr: R) -> Result<String> {
    convert_reader_with_options(rdr, ConvertOptions::default())
}

pub fn convert_reader_with_options<R: Read>(mut rdr: R, options: ConvertOptions) -> Result<String> {
    let mut buf = String::new();
    rdr.read_to_string(&mut buf)?;
    convert_str_with_options(&buf, options)
}

/// Converts `input` and writes the text to `writer` using default options.
///
/// The whole outline is converted before anything is written.
pub fn convert_to_writer<W: Write>(writer: W, input: &str) -> Result<()> {
    convert_to_writer_with_options(writer, input, ConvertOptions::default())
}

pub fn convert_to_writer_with_options<W: Write>(
    mut writer: W,
    input: &str,
    options: ConvertOptions,
) -> Result<()> {
    let text = convert_str_with_options(input, options)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Parses a `djvused` outline into an entry tree using default options.
pub fn parse_outline(input: &str) -> Result<Outline> {
    parse_outline_with_options(input, ConvertOptions::default())
}

/// Parses a `djvused` outline into an entry tree.
///
/// `options.indent` has no effect on the tree; pass it to
/// [`Outline::to_lines`] when rendering instead.
pub fn parse_outline_with_options(input: &str, options: ConvertOptions) -> Result<Outline> {
    let options = ConvertOptions {
        indent: Indent::Tab,
        ..options
    };
    let mut builder = TreeBuilder::new();
    run(input, &options, &mut builder)?;

    let outline = builder.finish();
    log::debug!(
        "parsed {} outline entries, max depth {}",
        outline.len(),
        outline.max_depth()
    );
    Ok(outline)
}

fn run<S: OutlineSink + ?Sized>(input: &str, options: &ConvertOptions, sink: &mut S) -> Result<()> {
    if input.trim().is_empty() {
        log::debug!("input is empty, no outline to convert");
        return Ok(());
    }

    let start = skip_tag(input, options.tag_width)?;
    log::debug!("parsing {} bytes of outline from offset {}", input.len(), start);
    parse_document(input, start, options, sink)?;
    Ok(())
}

/// Byte offset of the first character after the leading tag.
fn skip_tag(input: &str, tag_width: usize) -> Result<usize> {
    input
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(input.len()))
        .nth(tag_width)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::MalformedOutline,
                format!("Input is shorter than the {}-character tag", tag_width),
            )
            .at_offset(input, input.len())
        })
}
