//! `parcel-track track` command.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::adapters::fixed::FixedClock;
use crate::cli::TrackArgs;
use crate::config::{validate_date_format, TrackerConfig};
use crate::context::ServiceContext;
use crate::format::{self, OutputFormat, Report, TextOptions};
use crate::parser;
use crate::ports::Clock;
use crate::results::{self, StatusCounts};
use crate::shipment::ShipmentStatus;
use crate::synth::Synthesizer;
use crate::tracking::Tracker;

/// Execute the `track` command.
///
/// Parses the tracking numbers, waits out the simulated carrier latency
/// (Ctrl-C abandons the request), then prints the filtered results.
///
/// # Errors
///
/// Returns an error string for unreadable input, an empty number list, bad
/// configuration, or a cancelled request.
pub fn run(args: &TrackArgs) -> Result<(), String> {
    let base = TrackerConfig::from_env().map_err(|e| e.to_string())?;
    run_with_config(args, base)
}

/// Execute `track` on top of an already loaded configuration.
fn run_with_config(args: &TrackArgs, base: TrackerConfig) -> Result<(), String> {
    let config = resolve_config(args, base)?;
    let raw = super::read_input(&args.input)?;
    let ids = parser::parse(&raw).map_err(|e| e.to_string())?;

    let ctx = ServiceContext::pinned_or_live(config.now);
    let now = ctx.clock.now();
    debug!(count = ids.len(), %now, locale = %config.locale, "tracking_requested");

    let tracker = Tracker::with_synthesizer(config.latency, Synthesizer::new(config.locale));
    debug!(latency_ms = tracker.latency().as_millis(), "simulating_carrier");
    let shipments = track_with_interrupt(&tracker, &ids, now)?;

    let counts = StatusCounts::tally(&shipments);
    let filtered = results::filter(&shipments, args.filter.as_deref().unwrap_or(""));
    let selected = args.tab.select(&filtered);

    let output = match args.format {
        OutputFormat::Text => format::render_text(
            &selected,
            &counts,
            &TextOptions {
                locale: config.locale,
                date_format: config.date_format.clone(),
                history: args.history,
            },
        ),
        OutputFormat::Json => {
            format::render_json(&Report { generated_at: now, counts, shipments: selected })?
        }
        OutputFormat::Yaml => {
            format::render_yaml(&Report { generated_at: now, counts, shipments: selected })?
        }
    };
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// `base` settings overlaid with command-line flags.
fn resolve_config(args: &TrackArgs, base: TrackerConfig) -> Result<TrackerConfig, String> {
    let mut config = base;

    if let Some(raw) = &args.now {
        config.now = Some(FixedClock::parse(raw)?.now());
    }
    if let Some(ms) = args.latency_ms {
        config.latency = Duration::from_millis(ms);
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Some(pattern) = &args.date_format {
        validate_date_format(pattern)?;
        config.date_format.clone_from(pattern);
    }
    Ok(config)
}

/// Runs the batch on a current-thread runtime, abandoning it on Ctrl-C.
fn track_with_interrupt(
    tracker: &Tracker,
    ids: &[String],
    now: DateTime<Utc>,
) -> Result<Vec<ShipmentStatus>, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    runtime.block_on(async {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, discarding in-flight tracking request");
                let _ = cancel_tx.send(true);
            }
        });
        tracker.track_until_cancelled(ids, now, cancel_rx).await.map_err(|e| e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use crate::locale::Locale;
    use crate::results::StatusTab;

    fn args(ids: &[&str]) -> TrackArgs {
        TrackArgs {
            input: InputArgs { ids: ids.iter().map(|s| (*s).to_string()).collect(), input: None },
            now: Some("2025-01-15T12:00:00Z".into()),
            latency_ms: Some(0),
            format: OutputFormat::Text,
            filter: None,
            tab: StatusTab::All,
            history: false,
            locale: None,
            date_format: None,
        }
    }

    #[test]
    fn track_command_runs_for_each_format() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
            let args = TrackArgs { format, history: true, ..args(&["SMSA123", "A,C"]) };
            assert!(run_with_config(&args, TrackerConfig::default()).is_ok(), "{format:?}");
        }
    }

    #[test]
    fn track_command_rejects_empty_input() {
        let err = run_with_config(&args(&[" , "]), TrackerConfig::default()).unwrap_err();
        assert!(err.contains("no tracking numbers"));
    }

    #[test]
    fn track_command_rejects_bad_timestamp() {
        let args = TrackArgs { now: Some("noon".into()), ..args(&["A"]) };
        let err = run_with_config(&args, TrackerConfig::default()).unwrap_err();
        assert!(err.contains("RFC 3339"));
    }

    #[test]
    fn flags_override_config() {
        let args = TrackArgs {
            locale: Some(Locale::Ar),
            date_format: Some("%d/%m".into()),
            latency_ms: Some(25),
            ..args(&["A"])
        };
        let base = TrackerConfig { locale: Locale::En, ..TrackerConfig::default() };
        let config = resolve_config(&args, base).unwrap();
        assert_eq!(config.locale, Locale::Ar);
        assert_eq!(config.date_format, "%d/%m");
        assert_eq!(config.latency, Duration::from_millis(25));
        assert_eq!(config.now.unwrap().to_rfc3339(), "2025-01-15T12:00:00+00:00");
    }

    #[test]
    fn bad_date_format_flag_is_rejected() {
        let args = TrackArgs { date_format: Some("%Q".into()), ..args(&["A"]) };
        assert!(resolve_config(&args, TrackerConfig::default()).is_err());
    }

    #[test]
    fn unset_flags_keep_the_base_config() {
        let base = TrackerConfig::from_lookup(|key| match key {
            crate::config::LOCALE_ENV => Some("ar".to_string()),
            crate::config::DATE_FORMAT_ENV => Some("%d/%m/%Y".to_string()),
            crate::config::LATENCY_ENV => Some("7".to_string()),
            _ => None,
        })
        .unwrap();
        let args = TrackArgs { now: None, latency_ms: None, ..args(&["A"]) };
        let config = resolve_config(&args, base).unwrap();
        assert_eq!(config.locale, Locale::Ar);
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(config.latency, Duration::from_millis(7));
        assert!(config.now.is_none());
    }
}
