//! Plain-text station table for the CLI.

use askama::Template;

use crate::service::ApiStation;

/// Fixed-width table: station title, free locks, free bikes, closed flag.
#[derive(Template)]
#[template(path = "station_table.txt")]
pub struct StationTable<'a> {
    pub stations: &'a [ApiStation],
}

/// Render stations as a table, one row per station after the header.
pub fn render_table(stations: &[ApiStation]) -> Result<String, askama::Error> {
    StationTable { stations }.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{ApiAvailability, ApiCoord};

    fn station(title: &str, bikes: u32, locks: u32, closed: bool) -> ApiStation {
        ApiStation {
            id: 1,
            in_service: true,
            title: title.to_string(),
            subtitle: String::new(),
            number_of_locks: bikes + locks,
            center: ApiCoord {
                latitude: 0.0,
                longitude: 0.0,
            },
            bounds: Vec::new(),
            availability: ApiAvailability { bikes, locks },
            closed,
        }
    }

    #[test]
    fn header_only_for_empty_list() {
        let table = render_table(&[]).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec![format!("{:<30}{:<10}{:<10}{}", "Station", "Locks", "Bikes", "Closed")]);
    }

    #[test]
    fn one_row_per_station() {
        let stations = vec![
            station("Nylandsveien", 12, 18, false),
            station("Langkaia", 3, 21, true),
        ];
        let table = render_table(&stations).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], format!("{:<30}{:<10}{:<10}{}", "Nylandsveien", 18, 12, false));
        assert_eq!(lines[2], format!("{:<30}{:<10}{:<10}{}", "Langkaia", 21, 3, true));
    }

    #[test]
    fn titles_are_not_escaped() {
        let stations = vec![station("Bj\u{f8}rvika & co", 1, 1, false)];
        let table = render_table(&stations).unwrap();
        assert!(table.contains("Bj\u{f8}rvika & co"));
    }
}
