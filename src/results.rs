//! Narrowing and summarizing a batch of results.
//!
//! Mirrors the results view of the tracking page: a free-text filter, one
//! tab per common state, and a count badge for each tab.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::shipment::{ShipmentState, ShipmentStatus};

/// Keeps results whose tracking number, status label or destination
/// contains `query`, ignoring case. The query is not trimmed; only the
/// empty query keeps everything.
#[must_use]
pub fn filter<'a>(results: &'a [ShipmentStatus], query: &str) -> Vec<&'a ShipmentStatus> {
    let needle = query.to_lowercase();
    results
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.tracking_number.to_lowercase().contains(&needle)
                || r.status.label().to_lowercase().contains(&needle)
                || r.destination.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Result tabs. Exceptions only show up under `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusTab {
    /// Every result.
    #[default]
    All,
    /// Delivered parcels.
    Delivered,
    /// Parcels in transit.
    InTransit,
    /// Parcels not yet moving.
    Pending,
}

impl StatusTab {
    /// Whether `result` belongs on this tab.
    #[must_use]
    pub fn matches(self, result: &ShipmentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Delivered => result.status == ShipmentState::Delivered,
            Self::InTransit => result.status == ShipmentState::InTransit,
            Self::Pending => result.status == ShipmentState::Pending,
        }
    }

    /// Results belonging on this tab, in their original order.
    #[must_use]
    pub fn select<'a>(self, results: &[&'a ShipmentStatus]) -> Vec<&'a ShipmentStatus> {
        results.iter().copied().filter(|r| self.matches(r)).collect()
    }
}

impl fmt::Display for StatusTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Delivered => "delivered",
            Self::InTransit => "in-transit",
            Self::Pending => "pending",
        })
    }
}

impl FromStr for StatusTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "delivered" => Ok(Self::Delivered),
            "in-transit" | "in_transit" | "intransit" => Ok(Self::InTransit),
            "pending" => Ok(Self::Pending),
            other => Err(format!("unknown tab `{other}`")),
        }
    }
}

/// Number of results per state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    /// All results.
    pub total: usize,
    /// Delivered results.
    pub delivered: usize,
    /// In-transit results.
    pub in_transit: usize,
    /// Pending results.
    pub pending: usize,
    /// Results in exception.
    pub exception: usize,
}

impl StatusCounts {
    /// Counts every result by state.
    #[must_use]
    pub fn tally<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a ShipmentStatus>,
    {
        results.into_iter().fold(Self::default(), |mut counts, r| {
            counts.total += 1;
            match r.status {
                ShipmentState::Delivered => counts.delivered += 1,
                ShipmentState::InTransit => counts.in_transit += 1,
                ShipmentState::Pending => counts.pending += 1,
                ShipmentState::Exception => counts.exception += 1,
            }
            counts
        })
    }

    /// Badge count for a tab.
    #[must_use]
    pub fn for_tab(&self, tab: StatusTab) -> usize {
        match tab {
            StatusTab::All => self.total,
            StatusTab::Delivered => self.delivered,
            StatusTab::InTransit => self.in_transit,
            StatusTab::Pending => self.pending,
        }
    }
}
