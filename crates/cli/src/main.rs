use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use scriptura_core::{BibleAssembler, ConverterConfig, discover_inputs, render};
use tracing_subscriber::EnvFilter;

mod echo;

use echo::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the converted document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Xml,
    Json,
}

impl OutputFormat {
    fn default_output(self) -> PathBuf {
        match self {
            Self::Xml => PathBuf::from("bible.xml"),
            Self::Json => PathBuf::from("bible.json"),
        }
    }
}

impl From<OutputFormat> for scriptura_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Xml => Self::Xml,
            OutputFormat::Json => Self::Json,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: xml, json", s)),
        }
    }
}

/// Convert Bible HTML books into a single canonical XML document
#[derive(Parser, Debug)]
#[command(name = "scriptura")]
#[command(version)]
#[command(about = "Convert Bible HTML books into a single XML document", long_about = None)]
struct Args {
    /// HTML book, or directory searched recursively for HTML books
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file, or "-" for stdout (default: bible.xml / bible.json)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (xml, json)
    #[arg(short, long, default_value = "xml", value_name = "FORMAT")]
    format: OutputFormat,

    /// Keyword that marks a chapter heading
    #[arg(long, default_value = scriptura_core::config::DEFAULT_CHAPTER_KEYWORD, value_name = "WORD")]
    keyword: String,

    /// Write output without indentation
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn write_output(path: &Path, output: &str) -> anyhow::Result<()> {
    if path == Path::new("-") {
        io::stdout().write_all(output.as_bytes()).context("Failed to write to stdout")?;
        return Ok(());
    }

    fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let total_start = Instant::now();
    let mut timings = Vec::new();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
        print_step(1, 3, &format!("Scanning {}", args.input.display().bright_white()));
    }

    let step_start = Instant::now();
    let files = discover_inputs(&args.input)
        .with_context(|| format!("Failed to read input: {}", args.input.display()))?;
    timings.push(("Discovery".to_string(), step_start.elapsed()));

    if args.verbose {
        eprintln!("  {} {}", "HTML files:".dimmed(), files.len().to_string().bright_white());
        eprintln!();
        print_step(2, 3, "Parsing books in canonical order");
    }

    let config = ConverterConfig::builder().chapter_keyword(args.keyword.as_str()).build();
    let assembler = BibleAssembler::with_config(config);

    let step_start = Instant::now();
    let bible = assembler.assemble(&files).context("Failed to convert books")?;
    timings.push(("Parsing".to_string(), step_start.elapsed()));

    if bible.is_empty() {
        print_warning("No input file matched a canonical book name");
    }

    let indent = if args.compact { 0 } else { 2 };
    let step_start = Instant::now();
    let output = render(&bible, args.format.into(), indent).context("Failed to render document")?;
    timings.push(("Rendering".to_string(), step_start.elapsed()));

    let path = args.output.unwrap_or_else(|| args.format.default_output());

    if args.verbose {
        print_book_summary(&bible);
        print_step(3, 3, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format).bright_white());
        eprintln!("  {} {}", "Size:".dimmed(), format_size(output.len()).bright_white());
        eprintln!();
    }

    write_output(&path, &output)?;
    tracing::debug!(path = %path.display(), bytes = output.len(), "wrote document");

    if args.verbose {
        print_timing_summary(total_start.elapsed(), &timings);
    }

    if path != Path::new("-") {
        print_success(&format!(
            "{} books, {} chapters, {} verses written to {}",
            bible.books().len(),
            bible.chapter_count(),
            bible.verse_count(),
            path.display().bright_white()
        ));
    }

    Ok(())
}
