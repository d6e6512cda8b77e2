//! The upstream capability consumed by the reconciler.

use std::future::Future;

use crate::domain::{AvailabilitySnapshot, Station, StatusReport};

use super::error::UpstreamError;

/// Trait for fetching the three upstream resources.
///
/// Each fetch is independent and may fail on its own. This abstraction
/// lets the reconciler run against the live API, fixture files, or
/// scripted test data.
pub trait UpstreamSource: Send + Sync {
    /// Fetch the full station list.
    fn fetch_stations(&self) -> impl Future<Output = Result<Vec<Station>, UpstreamError>> + Send;

    /// Fetch the current availability snapshot.
    fn fetch_availability(
        &self,
    ) -> impl Future<Output = Result<AvailabilitySnapshot, UpstreamError>> + Send;

    /// Fetch the open/closed status.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusReport, UpstreamError>> + Send;
}
