//! Askama templates for the HTML station list.

use askama::Template;

use crate::service::ApiStation;

/// Station list page, served when the client asks for `text/html`.
#[derive(Template)]
#[template(path = "stations.html")]
pub struct StationListTemplate<'a> {
    pub stations: &'a [ApiStation],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{ApiAvailability, ApiCoord};

    fn station(id: u32, title: &str, closed: bool) -> ApiStation {
        ApiStation {
            id,
            in_service: true,
            title: title.to_string(),
            subtitle: String::new(),
            number_of_locks: 10,
            center: ApiCoord {
                latitude: 59.9,
                longitude: 10.7,
            },
            bounds: Vec::new(),
            availability: ApiAvailability { bikes: 4, locks: 6 },
            closed,
        }
    }

    #[test]
    fn renders_rows() {
        let stations = vec![station(1, "Nylandsveien", false), station(2, "Langkaia", true)];
        let html = StationListTemplate {
            stations: &stations,
        }
        .render()
        .unwrap();

        assert!(html.contains("Nylandsveien"));
        assert!(html.contains("Langkaia"));
        assert!(html.contains("class=\"closed\""));
    }

    #[test]
    fn escapes_titles() {
        let stations = vec![station(1, "<script>", false)];
        let html = StationListTemplate {
            stations: &stations,
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_empty_list() {
        let html = StationListTemplate { stations: &[] }.render().unwrap();
        assert!(html.contains("No stations"));
    }
}
