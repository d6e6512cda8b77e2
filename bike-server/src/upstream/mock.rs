//! Mock upstream that serves fixture files.
//!
//! Loads the three upstream responses from JSON files and serves them as if
//! they were live API responses. Useful for development without a client
//! identifier.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::{AvailabilitySnapshot, Station, StatusReport};

use super::convert::{convert_availability, convert_stations, convert_status};
use super::error::UpstreamError;
use super::source::UpstreamSource;
use super::types::{AvailabilityResponse, StationsResponse, StatusEnvelope};

const STATIONS_FILE: &str = "stations.json";
const AVAILABILITY_FILE: &str = "availability.json";
const STATUS_FILE: &str = "status.json";

/// The three parsed fixture documents.
#[derive(Debug, Clone)]
struct Fixtures {
    stations: StationsResponse,
    availability: AvailabilityResponse,
    status: StatusEnvelope,
}

impl Fixtures {
    fn load(dir: &Path) -> Result<Self, UpstreamError> {
        if !dir.is_dir() {
            return Err(UpstreamError::Fixture {
                message: format!("mock data directory not found: {}", dir.display()),
            });
        }

        Ok(Self {
            stations: read_fixture(&dir.join(STATIONS_FILE))?,
            availability: read_fixture(&dir.join(AVAILABILITY_FILE))?,
            status: read_fixture(&dir.join(STATUS_FILE))?,
        })
    }
}

fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<T, UpstreamError> {
    let json = std::fs::read_to_string(path).map_err(|e| UpstreamError::Fixture {
        message: format!("failed to read {}: {}", path.display(), e),
    })?;

    serde_json::from_str(&json).map_err(|e| UpstreamError::Fixture {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

/// Mock upstream that serves data from JSON files.
///
/// Expects `stations.json`, `availability.json` and `status.json` in the
/// data directory, in the same shape the live API returns.
#[derive(Clone)]
pub struct MockUpstream {
    fixtures: Arc<Fixtures>,
}

impl MockUpstream {
    /// Create a mock upstream by loading fixtures from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, UpstreamError> {
        let fixtures = Fixtures::load(data_dir.as_ref())?;

        Ok(Self {
            fixtures: Arc::new(fixtures),
        })
    }
}

impl UpstreamSource for MockUpstream {
    async fn fetch_stations(&self) -> Result<Vec<Station>, UpstreamError> {
        Ok(convert_stations(self.fixtures.stations.clone()))
    }

    async fn fetch_availability(&self) -> Result<AvailabilitySnapshot, UpstreamError> {
        Ok(convert_availability(self.fixtures.availability.clone()))
    }

    async fn fetch_status(&self) -> Result<StatusReport, UpstreamError> {
        Ok(convert_status(self.fixtures.status.status.clone()))
    }
}
