use std::{fs::File, io::Read, path::Path};

use datatest_stable::Result;
use djvu_outline::{ConvertOptions, EscapedQuote, Indent};
use serde::Deserialize;

#[derive(Deserialize)]
struct FixtureOptions {
    #[serde(rename = "tagWidth")]
    tag_width: Option<usize>,
    #[serde(rename = "sigilWidth")]
    sigil_width: Option<usize>,
    /// Spaces per level; tabs when absent.
    indent: Option<usize>,
    #[serde(rename = "keepEscapes")]
    keep_escapes: Option<bool>,
}

impl FixtureOptions {
    fn to_convert_options(&self) -> ConvertOptions {
        let mut opts = ConvertOptions::default();

        if let Some(tag_width) = self.tag_width {
            opts.tag_width = tag_width;
        }

        if let Some(sigil_width) = self.sigil_width {
            opts.sigil_width = sigil_width;
        }

        if let Some(indent) = self.indent {
            opts.indent = Indent::Spaces(indent);
        }

        if self.keep_escapes == Some(true) {
            opts.escaped_quote = EscapedQuote::Preserve;
        }

        opts
    }
}

#[derive(Deserialize)]
struct ConvertTest {
    name: String,
    input: String,
    #[serde(default)]
    expected: String,
    #[serde(rename = "shouldError", default)]
    should_error: bool,
    #[serde(rename = "errorKind")]
    error_kind: Option<String>,
    options: Option<FixtureOptions>,
}

#[derive(Deserialize)]
struct Fixture {
    tests: Vec<ConvertTest>,
}

fn test_convert_fixture(path: &Path) -> Result<()> {
    let mut file = File::open(path)?;
    let mut json_string = String::new();
    file.read_to_string(&mut json_string)?;

    let fixture: Fixture = serde_json::from_str(&json_string)?;

    for test in fixture.tests {
        let result = if let Some(options) = test.options {
            let opts = options.to_convert_options();
            djvu_outline::convert_str_with_options(&test.input, opts)
        } else {
            djvu_outline::convert_str(&test.input)
        };

        if test.should_error {
            let err = match result {
                Ok(output) => panic!(
                    "expected error but got success: fixture: {}, file: {}, output: {:?}",
                    test.name,
                    path.display(),
                    output
                ),
                Err(err) => err,
            };
            if let Some(kind) = test.error_kind {
                assert_eq!(
                    format!("{:?}", err.kind()),
                    kind,
                    "wrong error kind: fixture: {}, file: {}",
                    test.name,
                    path.display()
                );
            }
        } else {
            let output = result.unwrap_or_else(|e| {
                panic!(
                    "convert failed: fixture: {}, file: {}: {}",
                    test.name,
                    path.display(),
                    e
                )
            });
            assert_eq!(
                output,
                test.expected,
                "result does not match expected: {}, file: {}",
                test.name,
                path.display()
            );
        }
    }

    Ok(())
}

datatest_stable::harness! {
    { test = test_convert_fixture, root = "tests/fixtures", pattern = r"^.*\.json$" },
}
