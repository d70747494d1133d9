//! Multi-parcel tracking against a deterministic mock carrier.
//!
//! [`parser::parse`] turns raw user input into tracking numbers,
//! [`synth::synthesize`] maps each one to a reproducible shipment record,
//! and [`tracking::Tracker`] answers whole batches behind a simulated
//! carrier delay. The `parcel-track` binary wraps all of it in a CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod locale;
pub mod logging;
pub mod parser;
pub mod ports;
pub mod results;
pub mod shipment;
pub mod synth;
pub mod tracking;

use clap::Parser;

pub use error::{ConfigError, ParseError, TrackError};
pub use parser::parse;
pub use shipment::{EventKind, ShipmentEvent, ShipmentState, ShipmentStatus};
pub use synth::{synthesize, Synthesizer};
pub use tracking::{track_shipments, Tracker};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version land here and belong on stdout.
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_parse() {
        let result = run(["parcel-track", "parse", "A,B"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_treats_help_as_success() {
        assert!(run(["parcel-track", "--help"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["parcel-track", "unknown"]);
        assert!(result.is_err());
    }
}
