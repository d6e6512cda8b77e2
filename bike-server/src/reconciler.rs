//! Station reconciler.
//!
//! Merges the three upstream resources into one station map. Each call to
//! [`Reconciler::stations`] runs three phases:
//!
//! 1. **Populate**: fetch the station list and insert any station not seen
//!    before. Known stations are left untouched.
//! 2. **Availability**: refetch when a new station appeared (it has no
//!    availability yet) or when the last snapshot is older than the refresh
//!    rate upstream declared. The snapshot's own timestamp becomes
//!    `last_update`, so upstream's clock decides staleness.
//! 3. **Status**: refetched only together with availability. Closes every
//!    station, or the listed ones. Status never reopens a station.
//!
//! The merge runs on a private copy of the map. A new immutable
//! [`Snapshot`] is installed only when every phase succeeded, so a failed
//! call leaves both the published snapshot and the refresh state as they
//! were.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::domain::{AvailabilitySnapshot, Station, StationId, StatusReport};
use crate::upstream::{UpstreamError, UpstreamSource};

/// Stations keyed by upstream ID.
pub type StationMap = HashMap<StationId, Station>;

/// Errors from a refresh cycle, tagged with the phase that failed.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("failed to fetch stations")]
    Stations(#[source] UpstreamError),

    #[error("failed to fetch availability")]
    Availability(#[source] UpstreamError),

    #[error("failed to fetch status")]
    Status(#[source] UpstreamError),
}

/// A point-in-time view of every known station.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    version: u64,
    last_update: Option<DateTime<Utc>>,
    stations: StationMap,
}

impl Snapshot {
    /// Incremented every time a refresh installs a new snapshot.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Upstream timestamp of the availability data in this snapshot.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn stations(&self) -> &StationMap {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// When availability was last accepted and how long it stays fresh.
#[derive(Debug, Clone, Copy, Default)]
struct RefreshState {
    last_update: Option<DateTime<Utc>>,
    /// Zero means every call is stale.
    refresh_rate: Duration,
}

impl RefreshState {
    /// True once more than `refresh_rate` has passed since `last_update`.
    ///
    /// A `last_update` in the future is never stale.
    fn is_stale(&self, now: DateTime<Utc>) -> bool {
        let Some(last_update) = self.last_update else {
            return true;
        };
        let rate = TimeDelta::from_std(self.refresh_rate).unwrap_or(TimeDelta::MAX);
        now.signed_duration_since(last_update) > rate
    }

    fn accept(&mut self, snapshot: &AvailabilitySnapshot) {
        self.last_update = Some(snapshot.updated_at);
        self.refresh_rate = snapshot.refresh_rate;
    }
}

/// Owns the merged station map and decides when to refetch.
///
/// Refreshes are serialised by an internal mutex. Readers that only want
/// the most recent snapshot can use [`Reconciler::latest`], which never
/// waits for a refresh in progress.
pub struct Reconciler<S> {
    source: S,
    state: Mutex<RefreshState>,
    current: RwLock<Arc<Snapshot>>,
}

impl<S: UpstreamSource> Reconciler<S> {
    /// Create a reconciler with an empty map.
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(RefreshState::default()),
            current: RwLock::new(Arc::new(Snapshot::default())),
        }
    }

    /// The most recently installed snapshot, without refreshing.
    pub async fn latest(&self) -> Arc<Snapshot> {
        self.current.read().await.clone()
    }

    /// Refresh as needed and return the merged stations.
    pub async fn stations(&self) -> Result<Arc<Snapshot>, RefreshError> {
        self.stations_at(Utc::now()).await
    }

    async fn stations_at(&self, now: DateTime<Utc>) -> Result<Arc<Snapshot>, RefreshError> {
        let mut state = self.state.lock().await;
        let current = self.latest().await;

        let listed = self
            .source
            .fetch_stations()
            .await
            .map_err(RefreshError::Stations)?;

        let has_unseen = listed
            .iter()
            .any(|s| !current.stations.contains_key(&s.id));
        let stale = state.is_stale(now);

        if !has_unseen && !stale {
            debug!(version = current.version, "stations unchanged, availability fresh");
            return Ok(current);
        }

        let mut stations = current.stations.clone();
        let mut next_state = *state;

        let is_new = populate(&mut stations, listed);

        if is_new || stale {
            let availability = self
                .source
                .fetch_availability()
                .await
                .map_err(RefreshError::Availability)?;
            next_state.accept(&availability);
            merge_availability(&mut stations, &availability);

            let status = self
                .source
                .fetch_status()
                .await
                .map_err(RefreshError::Status)?;
            merge_status(&mut stations, &status);
        }

        *state = next_state;

        let snapshot = Arc::new(Snapshot {
            version: current.version + 1,
            last_update: next_state.last_update,
            stations,
        });
        *self.current.write().await = snapshot.clone();

        info!(
            version = snapshot.version,
            stations = snapshot.len(),
            new_stations = is_new,
            "installed station snapshot"
        );

        Ok(snapshot)
    }
}

/// Insert every listed station whose ID is not already in the map.
///
/// Returns whether anything was inserted.
pub fn populate(stations: &mut StationMap, listed: Vec<Station>) -> bool {
    let mut is_new = false;
    for station in listed {
        if !stations.contains_key(&station.id) {
            stations.insert(station.id, station);
            is_new = true;
        }
    }
    is_new
}

/// Overwrite availability for every known station in the snapshot.
///
/// Entries for unknown stations are logged and skipped. Returns the number
/// of entries skipped.
pub fn merge_availability(stations: &mut StationMap, snapshot: &AvailabilitySnapshot) -> usize {
    let mut skipped = 0;
    for entry in &snapshot.entries {
        match stations.get_mut(&entry.id) {
            Some(station) => station.availability = entry.availability,
            None => {
                warn!(station_id = %entry.id, "availability: could not find station, skipping");
                skipped += 1;
            }
        }
    }
    skipped
}

/// Mark stations closed according to the status report.
///
/// Never reopens a station. Returns the number of closed-list entries that
/// referenced unknown stations.
pub fn merge_status(stations: &mut StationMap, report: &StatusReport) -> usize {
    if report.all_closed {
        for station in stations.values_mut() {
            station.closed = true;
        }
        return 0;
    }

    let mut skipped = 0;
    for id in &report.closed {
        match stations.get_mut(id) {
            Some(station) => station.closed = true,
            None => {
                warn!(station_id = %id, "close station: could not find station, skipping");
                skipped += 1;
            }
        }
    }
    skipped
}
