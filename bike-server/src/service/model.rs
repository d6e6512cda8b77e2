//! External station representation.
//!
//! Kept separate from the domain `Station` so the API schema can evolve
//! independently of the upstream model, even though they match today.

use serde::Serialize;

use crate::domain::{Availability, Coord, Station};

/// A station as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiStation {
    pub id: u32,
    pub in_service: bool,
    pub title: String,
    pub subtitle: String,
    pub number_of_locks: u32,
    pub center: ApiCoord,
    pub bounds: Vec<ApiCoord>,
    pub availability: ApiAvailability,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApiCoord {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiAvailability {
    pub bikes: u32,
    pub locks: u32,
}

impl From<Coord> for ApiCoord {
    fn from(coord: Coord) -> Self {
        Self {
            latitude: coord.latitude,
            longitude: coord.longitude,
        }
    }
}

impl From<Availability> for ApiAvailability {
    fn from(availability: Availability) -> Self {
        Self {
            bikes: availability.bikes,
            locks: availability.locks,
        }
    }
}

impl From<&Station> for ApiStation {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id.get(),
            in_service: station.in_service,
            title: station.title.clone(),
            subtitle: station.subtitle.clone(),
            number_of_locks: station.number_of_locks,
            center: station.center.into(),
            bounds: station.bounds.iter().copied().map(ApiCoord::from).collect(),
            availability: station.availability.into(),
            closed: station.closed,
        }
    }
}
