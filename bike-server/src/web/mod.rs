//! Web layer for the bike-share proxy.
//!
//! Exposes the station service as a small REST API.

mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::StationListTemplate;
