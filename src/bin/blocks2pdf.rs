//! Render a JSON content model to PDF
//!
//! Reads a JSON array of blocks and writes the laid-out PDF.
//!
//! Usage:
//!   cargo run --release --bin blocks2pdf -- --input doc.json --output doc.pdf
//!   cargo run --release --bin blocks2pdf -- -i doc.json -o doc.pdf --title "Report"
//!
//! Set `RUST_LOG=debug` to see pagination and serialization details.

use flowpdf::api::PdfBuilder;
use std::fs;
use std::path::PathBuf;
use std::process;

struct CliConfig {
    input: PathBuf,
    output: PathBuf,
    title: Option<String>,
    author: Option<String>,
    uncompressed: bool,
}

enum Command {
    Convert(CliConfig),
    Version,
    Help,
}

fn usage() -> &'static str {
    "Usage: blocks2pdf --input <blocks.json> [--output <file.pdf>] [--title <title>] \
     [--author <author>] [--uncompressed] [--version]"
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut input = None;
    let mut output = None;
    let mut title = None;
    let mut author = None;
    let mut uncompressed = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("missing value for {}", flag))
        };
        match flag {
            "--input" | "-i" => input = Some(PathBuf::from(value()?)),
            "--output" | "-o" => output = Some(PathBuf::from(value()?)),
            "--title" | "-t" => title = Some(value()?),
            "--author" | "-a" => author = Some(value()?),
            "--uncompressed" => uncompressed = true,
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    let input = input.ok_or_else(|| "missing --input".to_string())?;
    let output = output.unwrap_or_else(|| input.with_extension("pdf"));
    Ok(Command::Convert(CliConfig {
        input,
        output,
        title,
        author,
        uncompressed,
    }))
}

fn run(config: &CliConfig) -> flowpdf::Result<usize> {
    let json = fs::read_to_string(&config.input)?;

    let mut builder = PdfBuilder::new()
        .creator(format!("{} {}", flowpdf::NAME, flowpdf::VERSION))
        .compress(!config.uncompressed);
    if let Some(title) = &config.title {
        builder = builder.title(title);
    }
    if let Some(author) = &config.author {
        builder = builder.author(author);
    }

    let pdf = builder.from_json(&json)?;
    pdf.save(&config.output)?;
    Ok(pdf.page_count())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_args(&args) {
        Ok(Command::Convert(config)) => config,
        Ok(Command::Version) => {
            println!("{} {}", flowpdf::NAME, flowpdf::VERSION);
            return;
        },
        Ok(Command::Help) => {
            println!("{}", usage());
            return;
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage());
            process::exit(2);
        },
    };

    match run(&config) {
        Ok(pages) => {
            println!(
                "Wrote {} ({} page{})",
                config.output.display(),
                pages,
                if pages == 1 { "" } else { "s" }
            );
        },
        Err(e) => {
            eprintln!("Failed to convert {}: {}", config.input.display(), e);
            process::exit(1);
        },
    }
}
