// SPDX-License-Identifier: MIT OR Apache-2.0
//! evcmp CLI binary - compare evaluation-session JSON exports

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use evcmp_core::Document;
use evcmp_diff::{compare_deep, compare_documents, compare_overview};

#[derive(Parser)]
#[command(name = "evcmp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for evcmp CLI
#[derive(Subcommand)]
enum Commands {
    /// Shallow overview comparison of two exports
    Compare {
        /// First export file
        file1: PathBuf,
        /// Second export file
        file2: PathBuf,
    },
    /// Deep analysis of two exports
    Deep {
        /// First export file
        file1: PathBuf,
        /// Second export file
        file2: PathBuf,
    },
    /// Overview and deep analysis combined
    Report {
        /// First export file
        file1: PathBuf,
        /// Second export file
        file2: PathBuf,
    },
    /// Check an export for the required top-level members
    Validate {
        /// Export file
        file: PathBuf,
    },
    /// Aggregate counts of one export
    Summary {
        /// Export file
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let result = match &args.command {
        Commands::Compare { file1, file2 } => run_compare(&args, file1, file2),
        Commands::Deep { file1, file2 } => run_deep(&args, file1, file2),
        Commands::Report { file1, file2 } => run_report(&args, file1, file2),
        Commands::Validate { file } => run_validate(file),
        Commands::Summary { file } => run_summary(&args, file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_compare(args: &Args, file1: &Path, file2: &Path) -> Result<()> {
    let (a, b) = load_pair(file1, file2)?;
    let overview = compare_overview(a.as_value(), b.as_value());
    emit(args, &overview)
}

fn run_deep(args: &Args, file1: &Path, file2: &Path) -> Result<()> {
    let (a, b) = load_pair(file1, file2)?;
    let deep = compare_deep(a.as_value(), b.as_value());
    emit(args, &deep)
}

fn run_report(args: &Args, file1: &Path, file2: &Path) -> Result<()> {
    let (a, b) = load_pair(file1, file2)?;
    let report = compare_documents(&a, &b);
    emit(args, &report)
}

fn run_validate(file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    doc.validate()?;
    println!("{}: all required fields present", file.display());
    Ok(())
}

fn run_summary(args: &Args, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    emit(args, &doc.summary())
}

fn load_document(path: &Path) -> Result<Document> {
    Document::from_path(path).with_context(|| format!("cannot load {}", path.display()))
}

fn load_pair(file1: &Path, file2: &Path) -> Result<(Document, Document)> {
    Ok((load_document(file1)?, load_document(file2)?))
}

fn emit<T: Serialize>(args: &Args, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    match &args.output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}
