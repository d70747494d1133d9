//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::format::OutputFormat;
use crate::locale::Locale;
use crate::results::StatusTab;

/// Top-level CLI parser for `parcel-track`.
#[derive(Debug, Parser)]
#[command(name = "parcel-track", version, about = "Track many parcels at once")]
pub struct Cli {
    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up the status of one or more tracking numbers.
    Track(TrackArgs),
    /// Print the normalized tracking numbers, one per line.
    Parse(InputArgs),
}

/// Where tracking numbers come from.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Tracking numbers; each may itself hold comma-separated numbers.
    #[arg(value_name = "TRACKING_NUMBER")]
    pub ids: Vec<String>,

    /// Read tracking numbers from a file (`-` for stdin). Stdin is used
    /// when no numbers are given at all.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Options for `track`.
#[derive(Debug, Clone, Args)]
pub struct TrackArgs {
    /// Tracking number sources.
    #[command(flatten)]
    pub input: InputArgs,

    /// Pin the clock to an RFC 3339 instant, e.g. 2025-01-15T12:00:00Z.
    #[arg(long, value_name = "TIMESTAMP")]
    pub now: Option<String>,

    /// Simulated carrier latency in milliseconds.
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Output encoding.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only show results whose number, status or destination contains this.
    #[arg(long, value_name = "QUERY")]
    pub filter: Option<String>,

    /// Only show one tab: all, delivered, in-transit or pending.
    #[arg(long, default_value_t = StatusTab::All)]
    pub tab: StatusTab,

    /// Include each shipment's history timeline in text output.
    #[arg(long)]
    pub history: bool,

    /// Language of cities and descriptions: en or ar.
    #[arg(long)]
    pub locale: Option<Locale>,

    /// `strftime` pattern for timestamps in text output.
    #[arg(long, value_name = "PATTERN")]
    pub date_format: Option<String>,
}
