//! Station types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid station ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station ID {input:?}: {reason}")]
pub struct InvalidStationId {
    input: String,
    reason: &'static str,
}

/// A station identifier assigned by the upstream bike-share API.
///
/// IDs are stable across fetches and are the only key used to match
/// availability and status entries to stations.
///
/// # Examples
///
/// ```
/// use bike_server::domain::StationId;
///
/// let id: StationId = "157".parse().unwrap();
/// assert_eq!(id.get(), 157);
///
/// assert!("gimme".parse::<StationId>().is_err());
/// assert!("-1".parse::<StationId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(u32);

impl StationId {
    /// Wrap a raw upstream ID.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric ID.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidStationId {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }

        s.parse::<u32>().map(StationId).map_err(|_| InvalidStationId {
            input: s.to_string(),
            reason: "must be a non-negative integer",
        })
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coord {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Free bikes and free locks at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Availability {
    pub bikes: u32,
    pub locks: u32,
}

impl Availability {
    pub const fn new(bikes: u32, locks: u32) -> Self {
        Self { bikes, locks }
    }
}

/// A bike-share dock.
///
/// The descriptive fields come from the station list and never change after
/// the station is first seen. `availability` and `closed` are updated by
/// later merges.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub in_service: bool,
    pub title: String,
    pub subtitle: String,
    pub number_of_locks: u32,
    pub center: Coord,
    pub bounds: Vec<Coord>,
    pub availability: Availability,
    pub closed: bool,
}

impl Station {
    /// Create a station with only an ID set.
    ///
    /// Mostly useful in tests; real stations are built from upstream data.
    pub fn new(id: StationId) -> Self {
        Self {
            id,
            in_service: false,
            title: String::new(),
            subtitle: String::new(),
            number_of_locks: 0,
            center: Coord::default(),
            bounds: Vec::new(),
            availability: Availability::default(),
            closed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert_eq!("1".parse::<StationId>().unwrap(), StationId::new(1));
        assert_eq!("0".parse::<StationId>().unwrap(), StationId::new(0));
        assert_eq!("157".parse::<StationId>().unwrap().get(), 157);
    }

    #[test]
    fn reject_non_numeric() {
        assert!("gimme".parse::<StationId>().is_err());
        assert!("1a".parse::<StationId>().is_err());
        assert!(" 1".parse::<StationId>().is_err());
        assert!("".parse::<StationId>().is_err());
    }

    #[test]
    fn reject_negative() {
        assert!("-1".parse::<StationId>().is_err());
    }

    #[test]
    fn error_mentions_input() {
        let err = "gimme".parse::<StationId>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station ID \"gimme\": must be a non-negative integer"
        );
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{id:?}"), "StationId(42)");
    }

    #[test]
    fn new_station_is_open_and_empty() {
        let station = Station::new(StationId::new(7));
        assert_eq!(station.id, StationId::new(7));
        assert!(!station.closed);
        assert_eq!(station.availability, Availability::default());
        assert!(station.bounds.is_empty());
    }
}
