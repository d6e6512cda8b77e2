//! Application state for the web layer.

use crate::service::StationService;
use crate::upstream::UpstreamSource;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
pub struct AppState<S> {
    /// Station query service
    pub stations: StationService<S>,
}

impl<S: UpstreamSource> AppState<S> {
    /// Create a new app state.
    pub fn new(stations: StationService<S>) -> Self {
        Self { stations }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            stations: self.stations.clone(),
        }
    }
}
