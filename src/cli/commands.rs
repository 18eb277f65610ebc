use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::export::{ExportFile, ExportFormat, collect_lenient, collect_strict};
use crate::models::Record;

#[derive(Parser)]
#[command(name = "takeout-parser")]
#[command(version = "0.1.0")]
#[command(about = "Extract typed records from Google Takeout JSON exports", long_about = None)]
pub struct Cli {
    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show record counts and time ranges per export file
    Stats(ExtractArgs),
    /// Print every record as one JSON object per line
    Dump(ExtractArgs),
    /// List the supported export formats
    Formats,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Export files to read
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Format of every file; inferred from each file's path when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Skip malformed elements instead of failing the whole file
    #[arg(long)]
    pub lenient: bool,
}

/// Records extracted from one file
struct FileReport {
    path: PathBuf,
    format: ExportFormat,
    records: Vec<Record>,
    skipped: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Stats(args)) => {
            show_stats(args)?;
        }
        Some(Commands::Dump(args)) => {
            dump_records(args)?;
        }
        Some(Commands::Formats) => {
            list_formats();
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn extract_file(path: &Path, format: Option<ExportFormat>, lenient: bool) -> Result<FileReport> {
    let format = format
        .or_else(|| ExportFormat::from_path(path))
        .ok_or_else(|| anyhow!("cannot infer export format from path; pass --format"))?;

    let file = ExportFile::open(path, format)?;
    let records = file.records()?;
    let (records, skipped) = if lenient {
        let (records, stats) = collect_lenient(records)?;
        (records, stats.skipped)
    } else {
        (collect_strict(records)?, 0)
    };

    Ok(FileReport { path: path.to_path_buf(), format, records, skipped })
}

/// Extract all files in parallel; results come back in argument order
fn extract_all(args: &ExtractArgs) -> Vec<(PathBuf, Result<FileReport>)> {
    args.files
        .par_iter()
        .map(|path| {
            let report = extract_file(path, args.format, args.lenient)
                .with_context(|| format!("Failed to extract {}", path.display()));
            (path.clone(), report)
        })
        .collect()
}

/// Report failed files on stderr and return the successful ones
fn split_failures(results: Vec<(PathBuf, Result<FileReport>)>) -> (Vec<FileReport>, usize) {
    let mut reports = Vec::with_capacity(results.len());
    let mut failed = 0;

    for (path, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failed += 1;
                tracing::debug!(path = %path.display(), "extraction failed");
                eprintln!("Error: {:#}", e);
            }
        }
    }

    (reports, failed)
}

fn show_stats(args: &ExtractArgs) -> Result<()> {
    let total_files = args.files.len();
    let (reports, failed) = split_failures(extract_all(args));

    println!("Takeout Export Statistics");
    println!("=========================");

    for report in &reports {
        println!("{}", report.path.display());
        println!("  Format: {}", report.format);
        println!("  Records: {}", report.records.len());
        if report.skipped > 0 {
            println!("  Skipped: {}", report.skipped);
        }

        let earliest = report.records.iter().map(Record::timestamp).min();
        let latest = report.records.iter().map(Record::timestamp).max();
        if let (Some(earliest), Some(latest)) = (earliest, latest) {
            println!("  Earliest: {}", earliest.format("%Y-%m-%d %H:%M:%S"));
            println!("  Latest: {}", latest.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    let total_records: usize = reports.iter().map(|r| r.records.len()).sum();
    println!();
    println!("Total records: {}", total_records);

    if failed > 0 {
        bail!("{} of {} files failed", failed, total_files);
    }
    Ok(())
}

fn dump_records(args: &ExtractArgs) -> Result<()> {
    let total_files = args.files.len();
    let (reports, failed) = split_failures(extract_all(args));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in reports.iter().flat_map(|r| r.records.iter()) {
        serde_json::to_writer(&mut out, record).context("Failed to serialize record")?;
        writeln!(out)?;
    }
    out.flush()?;

    if failed > 0 {
        bail!("{} of {} files failed", failed, total_files);
    }
    Ok(())
}

fn list_formats() {
    for format in ExportFormat::ALL {
        let note = if format.is_default() { "" } else { " (opt-in, never inferred from path)" };
        println!("{}{}", format, note);
    }
}
