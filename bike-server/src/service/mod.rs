//! Station query service.
//!
//! Read-through facade over the reconciler: every query refreshes the
//! snapshot first, then answers from it. Presentation layers (the HTTP API
//! and the CLI) only talk to this service.

mod error;
mod model;

use std::sync::Arc;

use crate::domain::StationId;
use crate::reconciler::Reconciler;
use crate::upstream::UpstreamSource;

pub use error::{ApiError, ErrorKind};
pub use model::{ApiAvailability, ApiCoord, ApiStation};

/// Serves single-station and list queries.
pub struct StationService<S> {
    reconciler: Arc<Reconciler<S>>,
}

impl<S> Clone for StationService<S> {
    fn clone(&self) -> Self {
        Self {
            reconciler: Arc::clone(&self.reconciler),
        }
    }
}

impl<S: UpstreamSource> StationService<S> {
    /// Create a service backed by a fresh reconciler.
    pub fn new(source: S) -> Self {
        Self::with_reconciler(Arc::new(Reconciler::new(source)))
    }

    /// Create a service sharing an existing reconciler.
    pub fn with_reconciler(reconciler: Arc<Reconciler<S>>) -> Self {
        Self { reconciler }
    }

    /// Look up a single station.
    pub async fn get(&self, id: StationId) -> Result<ApiStation, ApiError> {
        let snapshot = self
            .reconciler
            .stations()
            .await
            .map_err(|e| ApiError::io("failed to read station", e))?;

        snapshot
            .get(id)
            .map(ApiStation::from)
            .ok_or_else(|| ApiError::not_found("could not find station", format!("no such id: {id}")))
    }

    /// List every station, ordered by ID.
    pub async fn list(&self) -> Result<Vec<ApiStation>, ApiError> {
        let snapshot = self
            .reconciler
            .stations()
            .await
            .map_err(|e| ApiError::io("failed to read stations", e))?;

        let mut stations: Vec<ApiStation> =
            snapshot.stations().values().map(ApiStation::from).collect();
        stations.sort_by_key(|s| s.id);
        Ok(stations)
    }
}
