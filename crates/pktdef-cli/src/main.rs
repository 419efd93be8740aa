//! # pktdef-cli
//!
//! Command-line checker for the pktdef schema language.
//!
//! Validates `.pkt` packet definition files and prints positioned
//! diagnostics: human-readable caret excerpts by default, or a JSON
//! report for tooling via `--json`. Exits non-zero when any checked
//! file contains a grammar violation.

mod report;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use pktdef_syntax::{Diagnostic, TokenKind, render_diagnostic, tokenize, validate};
use report::FileReport;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pktdef")]
#[command(about = "Packet schema language checker", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Schema files to check when no subcommand is given
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Emit a JSON report instead of human-readable diagnostics
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate schema files and report grammar violations
    Check {
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the token stream of a schema file
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check { files }) => check_files(&files, cli.json),
        Some(Commands::Tokens { file }) => dump_tokens(&file),
        None => {
            if cli.files.is_empty() {
                bail!("no input files; try `pktdef check <FILES>`");
            }
            check_files(&cli.files, cli.json)
        }
    }
}

fn check_files(files: &[PathBuf], json: bool) -> Result<()> {
    let mut reports = Vec::with_capacity(files.len());
    let mut total = 0;

    for path in files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let diagnostics = validate(&source);
        total += diagnostics.len();

        if json {
            reports.push(FileReport::new(path.display().to_string(), &diagnostics));
        } else {
            print_diagnostics(path, &source, &diagnostics);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if total == 0 {
        println!("{} {}", "✓".green().bold(), "No grammar violations found".bold());
    } else {
        let noun = if total == 1 { "violation" } else { "violations" };
        println!(
            "{} {}",
            "✗".red().bold(),
            format!("{} {} found", total, noun).red().bold()
        );
    }

    if total > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn print_diagnostics(path: &Path, source: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        println!(
            "{}: {} {}",
            "error".red().bold(),
            diagnostic.message.bold(),
            format!("({}:{})", path.display(), diagnostic.range.start).dimmed()
        );
        println!("{}", render_diagnostic(source, diagnostic));
        println!();
    }
}

fn dump_tokens(path: &Path) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for token in tokenize(&source) {
        if token.kind == TokenKind::Eof {
            println!(
                "{:>4}:{:<4} {}",
                token.line,
                token.column,
                token.kind.display_name().dimmed()
            );
        } else {
            println!(
                "{:>4}:{:<4} {:<12} {}",
                token.line,
                token.column,
                format!("{:?}", token.kind),
                token.text
            );
        }
    }

    Ok(())
}
