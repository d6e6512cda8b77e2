//! Conversion from upstream DTOs to domain types.

use std::time::Duration;

use crate::domain::{
    Availability, AvailabilityEntry, AvailabilitySnapshot, Coord, Station, StationId,
    StatusReport,
};

use super::types::{
    AvailabilityResponse, CoordDto, StationDto, StationsResponse, StatusDto,
};

/// Convert the station list. New stations start open with no availability.
pub fn convert_stations(response: StationsResponse) -> Vec<Station> {
    response.stations.into_iter().map(convert_station).collect()
}

fn convert_station(dto: StationDto) -> Station {
    Station {
        id: StationId::new(dto.id),
        in_service: dto.in_service,
        title: dto.title,
        subtitle: dto.subtitle,
        number_of_locks: dto.number_of_locks,
        center: convert_coord(dto.center),
        bounds: dto.bounds.into_iter().map(convert_coord).collect(),
        availability: Availability::default(),
        closed: false,
    }
}

fn convert_coord(dto: CoordDto) -> Coord {
    Coord::new(dto.latitude, dto.longitude)
}

/// Convert an availability response.
pub fn convert_availability(response: AvailabilityResponse) -> AvailabilitySnapshot {
    let entries = response
        .stations
        .into_iter()
        .map(|s| AvailabilityEntry {
            id: StationId::new(s.id),
            availability: Availability::new(s.availability.bikes, s.availability.locks),
        })
        .collect();

    AvailabilitySnapshot {
        entries,
        updated_at: response.updated_at,
        refresh_rate: refresh_rate(response.refresh_rate),
    }
}

/// Convert the status payload.
pub fn convert_status(dto: StatusDto) -> StatusReport {
    StatusReport {
        all_closed: dto.all_stations_closed,
        closed: dto
            .stations_closed
            .into_iter()
            .map(StationId::new)
            .collect(),
    }
}

/// Convert upstream's float seconds into a duration, to the millisecond.
///
/// Negative, NaN and infinite rates become zero ("always stale").
pub fn refresh_rate(secs: f32) -> Duration {
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_millis((f64::from(secs) * 1000.0).round() as u64)
}
