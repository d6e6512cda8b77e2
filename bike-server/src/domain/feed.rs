//! Availability and status feeds.
//!
//! These are the per-refresh payloads the upstream publishes alongside the
//! station list. They only reference stations by ID.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::{Availability, StationId};

/// Availability reported for a single station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityEntry {
    pub id: StationId,
    pub availability: Availability,
}

/// A full availability snapshot as published upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilitySnapshot {
    pub entries: Vec<AvailabilityEntry>,

    /// When upstream generated this snapshot. Upstream's clock, not ours.
    pub updated_at: DateTime<Utc>,

    /// Minimum interval upstream asks clients to wait before refetching.
    pub refresh_rate: Duration,
}

/// Open/closed status of the network.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReport {
    /// Every station is closed (e.g. winter season).
    pub all_closed: bool,

    /// Individually closed stations. Ignored when `all_closed` is set.
    pub closed: Vec<StationId>,
}
