//! Rendering tracked shipments for the terminal and for machines.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::locale::Locale;
use crate::results::{StatusCounts, StatusTab};
use crate::shipment::ShipmentStatus;
use crate::synth::catalog::{Catalog, Label};

/// Output encodings supported by `track`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable cards.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Options for [`render_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Language of badges and placeholders.
    pub locale: Locale,
    /// `strftime` pattern for timestamps.
    pub date_format: String,
    /// Print each shipment's history timeline.
    pub history: bool,
}

/// Machine-readable envelope for a tracked batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    /// Instant the batch was synthesized at.
    pub generated_at: DateTime<Utc>,
    /// Per-state counts over the whole batch, before filtering.
    pub counts: StatusCounts,
    /// Shipments that passed the filter and tab.
    pub shipments: Vec<&'a ShipmentStatus>,
}

/// Formats `ts` with a `strftime` pattern.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>, pattern: &str) -> String {
    ts.format(pattern).to_string()
}

/// Renders the tab header with counts, then one card per shipment.
///
/// The "no results" line is reserved for an empty batch. A batch whose
/// filter or tab leaves nothing selected prints the header alone.
#[must_use]
pub fn render_text(
    shipments: &[&ShipmentStatus],
    counts: &StatusCounts,
    opts: &TextOptions,
) -> String {
    let catalog = Catalog::new(opts.locale);
    let mut out = String::new();

    if counts.total == 0 {
        let _ = writeln!(out, "{}", catalog.no_results());
        return out;
    }

    let tabs = [StatusTab::All, StatusTab::Delivered, StatusTab::InTransit, StatusTab::Pending]
        .map(|tab| format!("{} ({})", catalog.tab_title(tab), counts.for_tab(tab)));
    let _ = writeln!(out, "{}: {}", catalog.label(Label::Results), tabs.join("  "));

    for shipment in shipments {
        let _ = writeln!(out);
        render_card(&mut out, shipment, catalog, opts);
    }
    out
}

fn render_card(out: &mut String, shipment: &ShipmentStatus, catalog: Catalog, opts: &TextOptions) {
    let ts = |at: DateTime<Utc>| format_timestamp(at, &opts.date_format);
    let estimate =
        shipment.estimated_delivery.map_or_else(|| catalog.unavailable().to_string(), ts);

    let _ = writeln!(out, "{}  [{}]", shipment.tracking_number, catalog.state_badge(shipment.status));
    let _ = writeln!(out, "  {}", shipment.description);
    let mut field = |label: Label, value: &str| {
        let caption = format!("{}:", catalog.label(label));
        let _ = writeln!(out, "  {caption:<20}{value}");
    };

    field(Label::Origin, &shipment.origin);
    field(Label::Destination, &shipment.destination);
    field(Label::LastUpdate, &ts(shipment.last_update));
    field(Label::EstimatedDelivery, &estimate);

    if opts.history {
        let _ = writeln!(out, "  {}:", catalog.label(Label::History));
        for event in &shipment.history {
            let _ = writeln!(
                out,
                "    {}  {:<16}  {}  ({})",
                ts(event.date),
                event.status,
                event.location,
                event.description
            );
        }
    }
}

/// Serializes a report as pretty JSON.
///
/// # Errors
///
/// Returns an error string if serialization fails.
pub fn render_json(report: &Report<'_>) -> Result<String, String> {
    serde_json::to_string_pretty(report).map_err(|e| format!("Failed to encode results as JSON: {e}"))
}

/// Serializes a report as YAML.
///
/// # Errors
///
/// Returns an error string if serialization fails.
pub fn render_yaml(report: &Report<'_>) -> Result<String, String> {
    serde_yaml::to_string(report).map_err(|e| format!("Failed to encode results as YAML: {e}"))
}
