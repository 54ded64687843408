use djvu_outline::{
    ConvertOptions, ErrorKind, EscapedQuote, Indent, convert_lines, convert_reader, convert_slice,
    convert_str, convert_str_with_options, convert_to_writer,
};
use std::io::Cursor;

const DJVUSED_OUTLINE: &str = r##"(bookmarks
 ("Cover"
  "#1" )
 ("Part \"One\""
  "#9"
  ("Chapter 1"
   "#11" )
  ("Chapter 2"
   "#30"
   ("Notes"
    "#42" ) ) )
 ("Index"
  "#200" ) )
"##;

#[test]
fn test_djvused_outline() {
    let result = convert_str(DJVUSED_OUTLINE).unwrap();
    let expected = "\"Cover \"1\n\
                    \"Part 'One' \"9\n\
                    \t\"Chapter 1 \"11\n\
                    \t\"Chapter 2 \"30\n\
                    \t\t\"Notes \"42\n\
                    \"Index \"200";
    assert_eq!(result, expected);
}

#[test]
fn test_single_character_tag() {
    let result = convert_str(r##"X(("A" "#1" ("B" "#2")) ("C" "#3"))"##).unwrap();
    assert_eq!(result, "\"A \"1\n\t\"B \"2\n\"C \"3");
}

#[test]
fn test_empty_input() {
    assert_eq!(convert_str("").unwrap(), "");
    assert!(convert_lines("", &ConvertOptions::default()).unwrap().is_empty());
}

#[test]
fn test_whitespace_input() {
    assert_eq!(convert_str(" \n\t\n").unwrap(), "");
}

#[test]
fn test_outline_without_bookmarks() {
    assert_eq!(convert_str("(bookmarks)").unwrap(), "");
}

#[test]
fn test_trailing_whitespace_ignored() {
    let result = convert_str("(bookmarks (\"A\" \"#1\"))\n\n  ").unwrap();
    assert_eq!(result, "\"A \"1");
}

#[test]
fn test_trailing_text_rejected() {
    let err = convert_str("(bookmarks (\"A\" \"#1\"))\n(other (\"B\" \"#2\"))").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MalformedOutline);
    assert_eq!(err.location(), Some((2, 1)));
}

#[test]
fn test_empty_wrapped_list() {
    assert_eq!(convert_str("X()").unwrap(), "");
}

#[test]
fn test_unbalanced_wrapped_list() {
    let err = convert_str(r##"X((("A" "#1"))"##).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MalformedOutline);

    let err = convert_str(r##"(bookmarks (("A" "#1"))"##).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MalformedOutline);

    let err = convert_str(r##"X("A" "#1"))"##).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MalformedOutline);
}

#[test]
fn test_conversion_is_repeatable() {
    assert_eq!(
        convert_str(DJVUSED_OUTLINE).unwrap(),
        convert_str(DJVUSED_OUTLINE).unwrap()
    );
}

#[test]
fn test_space_indent() {
    let opts = ConvertOptions {
        indent: Indent::Spaces(2),
        ..Default::default()
    };
    let result = convert_str_with_options(DJVUSED_OUTLINE, opts).unwrap();
    assert!(result.contains("\n    \"Notes \"42\n"));
}

#[test]
fn test_keep_escapes() {
    let opts = ConvertOptions {
        escaped_quote: EscapedQuote::Preserve,
        ..Default::default()
    };
    let result = convert_str_with_options(DJVUSED_OUTLINE, opts).unwrap();
    assert!(result.contains(r#""Part \"One\" "9"#));
}

#[test]
fn test_sigil_width() {
    let opts = ConvertOptions {
        sigil_width: 0,
        ..Default::default()
    };
    let result = convert_str_with_options("(bookmarks (\"A\" \"#1\"))", opts).unwrap();
    assert_eq!(result, "\"A \"#1");
}

#[test]
fn test_tag_width() {
    let opts = ConvertOptions {
        tag_width: 0,
        ..Default::default()
    };
    let result = convert_str_with_options("(bookmarks (\"A\" \"#1\"))", opts).unwrap();
    assert_eq!(result, "\"A \"1");
}

#[test]
fn test_input_shorter_than_tag() {
    let opts = ConvertOptions {
        tag_width: 3,
        ..Default::default()
    };
    let err = convert_str_with_options("(b", opts).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MalformedOutline);
}

#[test]
fn test_tag_only() {
    let err = convert_str("(").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MalformedOutline);
}

#[test]
fn test_unbalanced_outline() {
    let input = "(bookmarks\n (\"A\" \"#1\")\n (\"B\" \"#2\"";
    let err = convert_str(input).unwrap_err();

    assert_eq!(err.kind(), &ErrorKind::MalformedOutline);
    assert_eq!(err.location(), Some((3, 2)));
    assert!(err.to_string().ends_with("at line 3, column 2"));
}

#[test]
fn test_unterminated_title() {
    let err = convert_str("(bookmarks\n  (\"Title").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnterminatedLiteral);
    assert_eq!(err.location(), Some((2, 4)));
}

#[test]
fn test_missing_target() {
    let err = convert_str("(bookmarks (\"Title\") )").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingQuote);
}

#[test]
fn test_convert_slice() {
    let result = convert_slice(b"(bookmarks (\"A\" \"#1\"))").unwrap();
    assert_eq!(result, "\"A \"1");
}

#[test]
fn test_convert_slice_invalid_utf8() {
    let err = convert_slice(b"(bookmarks (\"\xff\" \"#1\"))").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidUtf8);
}

#[test]
fn test_convert_reader() {
    let result = convert_reader(Cursor::new(DJVUSED_OUTLINE)).unwrap();
    assert_eq!(result, convert_str(DJVUSED_OUTLINE).unwrap());
}

#[test]
fn test_convert_to_writer() {
    let mut buffer = Vec::new();
    convert_to_writer(&mut buffer, "(bookmarks (\"A\" \"#1\" (\"B\" \"#2\")))").unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "\"A \"1\n\t\"B \"2");
}

#[test]
fn test_failed_conversion_writes_nothing() {
    let mut buffer = Vec::new();
    let result = convert_to_writer(&mut buffer, "(bookmarks (\"A\" \"#1\" (\"B\" \"#2\")");
    assert!(result.is_err());
    assert!(buffer.is_empty());
}
