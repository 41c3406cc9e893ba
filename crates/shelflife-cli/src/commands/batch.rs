//! Batch command - extract expiration dates from many label text files.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use shelflife_core::format_for_storage;
use shelflife_core::models::config::ShelflifeConfig;
use shelflife_core::DateExtractor;

use super::extract::{build_extractor, extract_report, format_report, ExtractReport, OutputFormat};
use super::{load_config, parse_date_arg};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "labels/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Compare against this date instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Read ambiguous numeric dates as DD/MM first
    #[arg(long)]
    day_first: bool,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<ExtractReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        tokio::fs::create_dir_all(output_dir).await?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // One "today" for the whole batch so results are comparable.
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let extractor = build_extractor(&config, args.day_first, today);

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &extractor, &config).await;
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(report) => {
                if report.is_none() {
                    debug!("No expiration date in {}", path.display());
                }
                results.push(ProcessResult {
                    path,
                    report,
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        report: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            let Some(report) = &result.report else {
                continue;
            };

            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("label");
            let output_path =
                output_dir.join(format!("{}.{}", output_name, args.format.extension()));

            tokio::fs::write(&output_path, format_report(report, args.format)?).await?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let found = results.iter().filter(|r| r.report.is_some()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let missing = results.len() - found - failed.len();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} with dates, {} without, {} failed",
        style(found).green(),
        style(missing).yellow(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

async fn process_single_file(
    path: &Path,
    extractor: &DateExtractor,
    config: &ShelflifeConfig,
) -> anyhow::Result<Option<ExtractReport>> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(extract_report(extractor, config, &text, false))
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "date",
        "confidence",
        "raw_match",
        "days_until",
        "expiry_status",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        let time_ms = result.processing_time_ms.to_string();

        match (&result.report, &result.error) {
            (Some(report), _) => {
                let date = format_for_storage(report.parsed.date);
                let days_until = report.days_until.to_string();
                let status = report.status.to_string();
                wtr.write_record([
                    filename,
                    "found",
                    date.as_str(),
                    report.parsed.confidence.as_str(),
                    report.parsed.raw_match.as_str(),
                    days_until.as_str(),
                    status.as_str(),
                    time_ms.as_str(),
                    "",
                ])?;
            }
            (None, Some(error)) => {
                wtr.write_record([filename, "error", "", "", "", "", "", time_ms.as_str(), error.as_str()])?;
            }
            (None, None) => {
                wtr.write_record([filename, "not_found", "", "", "", "", "", time_ms.as_str(), ""])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
