//! Coffeeconv CLI - convert a coffee CSV file to nested JSON
//!
//! ```bash
//! coffeeconv -i coffee.csv -o coffee.json
//! coffeeconv --in coffee.csv --out coffee.json --delimiter ';'
//! coffeeconv -i coffee.csv -o coffee.json -v     # debug logs on stderr
//! ```
//!
//! Echoes the paths, prints the row counts and the generated JSON to stdout,
//! then writes the output file. Refuses to overwrite an existing output file.

use clap::Parser;
use coffeeconv::{check_paths, convert_file, render_json, write_output, ConvertOptions};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "coffeeconv")]
#[command(about = "Coffee Record CSV to JSON Converter", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(short = 'i', long = "in")]
    input: PathBuf,

    /// Output JSON file (must not exist)
    #[arg(short = 'o', long = "out")]
    output: PathBuf,

    /// CSV delimiter
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Paths as echoed at startup.
#[derive(Serialize)]
struct EchoArgs<'a> {
    #[serde(rename = "in")]
    input: &'a Path,
    out: &'a Path,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some('"' | '\n' | '\r'), None) => {
            Err(format!("delimiter cannot be a quote or line break, got {:?}", s))
        }
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("coffeeconv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "arguments");

    if let Err(e) = run(&cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let args = EchoArgs {
        input: &cli.input,
        out: &cli.output,
    };
    println!("args: {}", serde_json::to_string_pretty(&args)?);

    check_paths(&cli.input, &cli.output)?;

    eprintln!("📄 Converting: {}", cli.input.display());
    let options = ConvertOptions {
        delimiter: cli.delimiter,
    };
    let report = convert_file(&cli.input, &options)?;
    eprintln!("   Encoding: {}", report.encoding);
    eprintln!("   Columns: {}", report.headers.join(", "));

    println!("processed {} coffee CSV records", report.rows_read);
    println!("generated {} coffee JSON records", report.records.len());

    let json = render_json(&report.records)?;
    println!("json:  {}", json);

    write_output(&cli.output, &json)?;
    eprintln!("💾 Output written to: {}", cli.output.display());
    println!("done");

    Ok(())
}
