use chrono::{DateTime, FixedOffset};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use pending_expiry::application::policy::ExpiredPaymentPolicy;
use pending_expiry::application::sweep::{PaymentHistories, sweep};
use pending_expiry::domain::config::{DEFAULT_EXPIRATION_PERIOD_IN_DAYS, ExpirationConfig};
use pending_expiry::domain::ports::ClockBox;
use pending_expiry::error::ExpiryError;
use pending_expiry::infrastructure::clock::{FixedClock, SystemClock};
use pending_expiry::interfaces::csv::history_reader::HistoryReader;
use pending_expiry::interfaces::csv::verdict_writer::VerdictWriter;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file with columns: payment, type, status, created_date, zone
    input: PathBuf,

    /// Days a pending authorization or purchase may stay pending
    #[arg(long, default_value_t = DEFAULT_EXPIRATION_PERIOD_IN_DAYS)]
    expiration_days: u32,

    /// Evaluate as of this RFC 3339 instant instead of the system time
    #[arg(long, value_parser = parse_instant)]
    now: Option<DateTime<FixedOffset>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

fn parse_instant(value: &str) -> std::result::Result<DateTime<FixedOffset>, ExpiryError> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| ExpiryError::InvalidTimestamp(format!("{value}: {e}")))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let clock: ClockBox = match cli.now {
        Some(instant) => Box::new(FixedClock::new(instant)),
        None => Box::new(SystemClock::new()),
    };
    let policy = ExpiredPaymentPolicy::new(clock, ExpirationConfig::new(cli.expiration_days));

    // Group rows per payment, skipping the ones that fail to parse
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = HistoryReader::new(file);
    let mut histories = PaymentHistories::new();
    for record in reader.records() {
        match record.and_then(|record| record.into_parts()) {
            Ok((payment, tx)) => histories.push(payment, tx),
            Err(e) => {
                eprintln!("Error reading transaction: {}", e);
            }
        }
    }

    let verdicts = sweep(&policy, &histories);

    let stdout = io::stdout();
    match cli.format {
        Format::Csv => {
            let mut writer = VerdictWriter::new(stdout.lock());
            writer.write_verdicts(&verdicts).into_diagnostic()?;
        }
        Format::Json => {
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &verdicts).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    Ok(())
}
