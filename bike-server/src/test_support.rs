//! Scripted upstream for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::{
    Availability, AvailabilityEntry, AvailabilitySnapshot, Station, StationId, StatusReport,
};
use crate::upstream::{UpstreamError, UpstreamSource};

pub(crate) fn id(n: u32) -> StationId {
    StationId::new(n)
}

pub(crate) fn station(n: u32) -> Station {
    let mut station = Station::new(id(n));
    station.title = format!("Station {n}");
    station
}

pub(crate) fn availability(
    entries: &[(u32, u32, u32)], // (id, bikes, locks)
    updated_at: DateTime<Utc>,
    refresh_secs: u64,
) -> AvailabilitySnapshot {
    AvailabilitySnapshot {
        entries: entries
            .iter()
            .map(|&(n, bikes, locks)| AvailabilityEntry {
                id: id(n),
                availability: Availability::new(bikes, locks),
            })
            .collect(),
        updated_at,
        refresh_rate: Duration::from_secs(refresh_secs),
    }
}

pub(crate) fn status(all_closed: bool, closed: &[u32]) -> StatusReport {
    StatusReport {
        all_closed,
        closed: closed.iter().copied().map(id).collect(),
    }
}

fn scripted_failure() -> UpstreamError {
    UpstreamError::Api {
        status: 500,
        message: "nope".to_string(),
    }
}

/// Upstream that returns whatever the test scripted and counts calls.
pub(crate) struct ScriptedSource {
    stations: Mutex<Vec<Station>>,
    availability: Mutex<AvailabilitySnapshot>,
    status: Mutex<StatusReport>,
    stations_delay: Mutex<Duration>,
    fail_stations: AtomicBool,
    fail_availability: AtomicBool,
    fail_status: AtomicBool,
    station_calls: AtomicUsize,
    availability_calls: AtomicUsize,
    status_calls: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn new(
        stations: Vec<Station>,
        availability: AvailabilitySnapshot,
        status: StatusReport,
    ) -> Self {
        Self {
            stations: Mutex::new(stations),
            availability: Mutex::new(availability),
            status: Mutex::new(status),
            stations_delay: Mutex::new(Duration::ZERO),
            fail_stations: AtomicBool::new(false),
            fail_availability: AtomicBool::new(false),
            fail_status: AtomicBool::new(false),
            station_calls: AtomicUsize::new(0),
            availability_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
        }
    }

    /// One station (ID 1) with 5 bikes and 5 locks, refreshed every 10s.
    pub(crate) fn single_station(updated_at: DateTime<Utc>) -> Self {
        Self::new(
            vec![station(1)],
            availability(&[(1, 5, 5)], updated_at, 10),
            status(false, &[]),
        )
    }

    pub(crate) fn set_stations(&self, stations: Vec<Station>) {
        *self.stations.lock().unwrap() = stations;
    }

    pub(crate) fn set_availability(&self, snapshot: AvailabilitySnapshot) {
        *self.availability.lock().unwrap() = snapshot;
    }

    pub(crate) fn set_status(&self, report: StatusReport) {
        *self.status.lock().unwrap() = report;
    }

    /// Make every station fetch take at least `delay`.
    pub(crate) fn delay_stations(&self, delay: Duration) {
        *self.stations_delay.lock().unwrap() = delay;
    }

    pub(crate) fn fail_stations(&self, fail: bool) {
        self.fail_stations.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_availability(&self, fail: bool) {
        self.fail_availability.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_status(&self, fail: bool) {
        self.fail_status.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn station_calls(&self) -> usize {
        self.station_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn availability_calls(&self) -> usize {
        self.availability_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

impl UpstreamSource for ScriptedSource {
    async fn fetch_stations(&self) -> Result<Vec<Station>, UpstreamError> {
        self.station_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.stations_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.fail_stations.load(Ordering::SeqCst) {
            return Err(scripted_failure());
        }
        Ok(self.stations.lock().unwrap().clone())
    }

    async fn fetch_availability(&self) -> Result<AvailabilitySnapshot, UpstreamError> {
        self.availability_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_availability.load(Ordering::SeqCst) {
            return Err(scripted_failure());
        }
        Ok(self.availability.lock().unwrap().clone())
    }

    async fn fetch_status(&self) -> Result<StatusReport, UpstreamError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_status.load(Ordering::SeqCst) {
            return Err(scripted_failure());
        }
        Ok(self.status.lock().unwrap().clone())
    }
}
