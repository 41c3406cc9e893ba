//! Extract command - find the expiration date in one label's text.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use shelflife_core::models::config::ShelflifeConfig;
use shelflife_core::status::describe_expiry;
use shelflife_core::{
    days_until_expiry, format_for_display, format_for_storage, DateExtractor, FieldExtractor,
    ItemStatus, NumericOrder, ParsedDate,
};

use super::{load_config, parse_date_arg};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text file with OCR output (default: stdin)
    #[arg(conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Label text given inline
    #[arg(short, long)]
    text: Option<String>,

    /// Compare against this date instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Read ambiguous numeric dates as DD/MM first
    #[arg(long)]
    day_first: bool,

    /// Also list every candidate that was considered
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Extracted date together with its standing relative to today.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    #[serde(flatten)]
    pub parsed: ParsedDate,
    pub today: NaiveDate,
    pub days_until: i64,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<ParsedDate>,
}

/// Build the extractor described by configuration and command-line overrides.
pub fn build_extractor(config: &ShelflifeConfig, day_first: bool, today: NaiveDate) -> DateExtractor {
    let extractor = DateExtractor::from_config(&config.extraction).with_today(today);
    if day_first {
        extractor.with_numeric_order(NumericOrder::DayFirst)
    } else {
        extractor
    }
}

/// Run extraction on `text` and describe the result.
pub fn extract_report(
    extractor: &DateExtractor,
    config: &ShelflifeConfig,
    text: &str,
    with_alternatives: bool,
) -> Option<ExtractReport> {
    let parsed = extractor.extract(text)?;
    let today = extractor.today();
    let days_until = days_until_expiry(parsed.date, today);

    let alternatives = if with_alternatives {
        extractor.extract_all(text)
    } else {
        Vec::new()
    };

    Some(ExtractReport {
        status: ItemStatus::from_days(days_until, config.status.soon_within_days),
        parsed,
        today,
        days_until,
        alternatives,
    })
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Reading label text from {}", path.display());
            tokio::fs::read_to_string(path).await?
        }
        (None, None) => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let extractor = build_extractor(&config, args.day_first, today);

    let Some(report) = extract_report(&extractor, &config, &text, args.all) else {
        anyhow::bail!("No expiration date found; enter it manually");
    };

    debug!(
        "Selected {} ({}) from {:?}",
        report.parsed.date, report.parsed.confidence, report.parsed.raw_match
    );

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    Ok(())
}

pub fn format_report(report: &ExtractReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ExtractReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["date", "confidence", "raw_match", "days_until", "status"])?;

    let mut rows = vec![&report.parsed];
    rows.extend(report.alternatives.iter().filter(|alt| **alt != report.parsed));

    for parsed in rows {
        let date = format_for_storage(parsed.date);
        let days_until = days_until_expiry(parsed.date, report.today).to_string();
        // Status is only reported for the selected date.
        let status = if parsed == &report.parsed {
            report.status.to_string()
        } else {
            String::new()
        };

        wtr.write_record([
            date.as_str(),
            parsed.confidence.as_str(),
            parsed.raw_match.as_str(),
            days_until.as_str(),
            status.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ExtractReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Expires: {} ({})\n",
        format_for_storage(report.parsed.date),
        format_for_display(report.parsed.date)
    ));
    output.push_str(&format!("Confidence: {}\n", report.parsed.confidence));
    output.push_str(&format!("Matched: {:?}\n", report.parsed.raw_match));
    output.push_str(&format!(
        "Status: {} ({})\n",
        report.status.badge(report.days_until),
        describe_expiry(report.days_until)
    ));

    if report.alternatives.len() > 1 {
        output.push_str("\nCandidates:\n");
        for alt in &report.alternatives {
            output.push_str(&format!(
                "  {}  {:<6}  {:?}\n",
                format_for_storage(alt.date),
                alt.confidence.as_str(),
                alt.raw_match
            ));
        }
    }

    output
}
