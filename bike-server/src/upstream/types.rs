//! Upstream API response DTOs.
//!
//! These types map directly to the Oslo City Bike v1 JSON responses.
//! Conversion to domain types lives in `convert`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response from `GET /stations`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationDto>,
}

/// A station as described by the upstream station list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationDto {
    pub id: u32,

    #[serde(default)]
    pub in_service: bool,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub number_of_locks: u32,

    #[serde(default)]
    pub center: CoordDto,

    /// Polygon outlining the dock area.
    #[serde(default)]
    pub bounds: Vec<CoordDto>,
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct CoordDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response from `GET /stations/availability`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AvailabilityResponse {
    pub stations: Vec<StationAvailabilityDto>,

    /// When upstream generated the snapshot (RFC 3339).
    pub updated_at: DateTime<Utc>,

    /// Seconds clients should wait before fetching again.
    #[serde(default)]
    pub refresh_rate: f32,
}

/// Availability of a single station.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationAvailabilityDto {
    /// Upstream documents this key as `ID`; live responses use `id`.
    #[serde(alias = "ID")]
    pub id: u32,

    pub availability: AvailabilityDto,
}

/// Free bikes and locks.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct AvailabilityDto {
    #[serde(default)]
    pub bikes: u32,

    #[serde(default)]
    pub locks: u32,
}

/// Response from `GET /status`; the payload is wrapped in a `status` key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusEnvelope {
    pub status: StatusDto,
}

/// Network open/closed status.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatusDto {
    #[serde(default)]
    pub all_stations_closed: bool,

    #[serde(default)]
    pub stations_closed: Vec<u32>,
}
