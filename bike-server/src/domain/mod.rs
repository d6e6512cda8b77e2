//! Domain types for the bike-share proxy.
//!
//! Stations are keyed by the upstream's integer ID. The availability and
//! status feeds reference stations by that ID only, so merging them is a
//! keyed lookup into the station map.

mod feed;
mod station;

pub use feed::{AvailabilityEntry, AvailabilitySnapshot, StatusReport};
pub use station::{Availability, Coord, InvalidStationId, Station, StationId};
