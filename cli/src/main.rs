use clap::{Parser, ValueEnum};
use djvu_outline::{ConvertOptions, EscapedQuote, Indent};
use std::path::Path;
use tokio::io::AsyncReadExt;

#[derive(Debug, Parser)]
#[command(name = "djvutoc")]
#[command(about = "Convert djvused bookmark outlines to pdfbeads text outlines", long_about = None)]
#[command(after_help = "\x1b[1;4mExamples:\x1b[0m
  Convert the outline of a DjVu document:
    djvused -e print-outline book.djvu | \x1b[1mdjvutoc\x1b[0m > toc.txt

  Convert a saved outline file:
    \x1b[1mdjvutoc\x1b[0m outline.sexp

  Convert an outline from a URL, indenting with two spaces:
    \x1b[1mdjvutoc\x1b[0m --indent 2 https://example.com/outline.sexp

  Show the outline tree as JSON:
    \x1b[1mdjvutoc\x1b[0m --format json outline.sexp")]
struct Cli {
    #[arg(help = "Input source: file path, URL, or '-' for standard input (default)")]
    input: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Text, help = "Output format")]
    format: Format,

    #[arg(
        long,
        default_value = "tab",
        value_parser = parse_indent,
        help = "Indentation per level: 'tab' or a number of spaces"
    )]
    indent: Indent,

    #[arg(long, default_value_t = 1, help = "Characters dropped from each target after its quote")]
    sigil_width: usize,

    #[arg(long, default_value_t = 1, help = "Leading characters skipped before the bookmark list")]
    tag_width: usize,

    #[arg(long, help = "Keep escaped quotes in titles instead of rewriting them as single quotes")]
    keep_escapes: bool,

    #[arg(short, long, help = "Log conversion details to stderr")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented text outline for pdfbeads
    Text,
    /// Outline tree as JSON
    Json,
    /// Outline tree as YAML
    Yaml,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            tag_width: self.tag_width,
            sigil_width: self.sigil_width,
            indent: self.indent,
            escaped_quote: if self.keep_escapes {
                EscapedQuote::Preserve
            } else {
                EscapedQuote::SingleQuote
            },
        }
    }
}

fn parse_indent(s: &str) -> Result<Indent, String> {
    if s.eq_ignore_ascii_case("tab") {
        return Ok(Indent::Tab);
    }
    s.parse::<usize>()
        .map(Indent::Spaces)
        .map_err(|_| format!("expected 'tab' or a number of spaces, got '{}'", s))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = process(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

async fn get_input_content(source: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match source {
        None | Some("-") => read_from_stdin().await,
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            download_from_url(url).await
        }
        Some(path) if Path::new(path).exists() => read_from_file(path).await,
        Some(path) => Err(format!("no such file: {}", path).into()),
    }
}

async fn read_from_stdin() -> Result<String, Box<dyn std::error::Error>> {
    log::debug!("reading outline from standard input");
    let mut content = String::new();
    tokio::io::stdin().read_to_string(&mut content).await?;
    Ok(content)
}

async fn download_from_url(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    log::debug!("downloading outline from {}", url);
    let client = reqwest::Client::builder()
        .user_agent("djvutoc/0.1.0")
        .build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let content = response.text().await?;
    Ok(content)
}

async fn read_from_file(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    log::debug!("reading outline from {}", path);
    let content = tokio::fs::read_to_string(path).await?;
    Ok(content)
}

async fn process(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let content = get_input_content(cli.input.as_deref()).await?;
    let options = cli.options();

    match cli.format {
        Format::Text => {
            let text = djvu_outline::convert_str_with_options(&content, options)?;
            // A document without bookmarks produces no output at all
            if !content.trim().is_empty() {
                println!("{}", text);
            }
        }
        Format::Json => {
            let outline = djvu_outline::parse_outline_with_options(&content, options)?;
            println!("{}", serde_json::to_string_pretty(&outline)?);
        }
        Format::Yaml => {
            let outline = djvu_outline::parse_outline_with_options(&content, options)?;
            print!("{}", serde_yaml::to_string(&outline)?);
        }
    }

    Ok(())
}
