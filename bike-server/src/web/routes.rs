//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::domain::StationId;
use crate::service::{ApiError, ApiStation};
use crate::upstream::UpstreamSource;

use super::state::AppState;
use super::templates::StationListTemplate;

/// Create the application router.
///
/// - `GET /health`
/// - `GET /v1/stations` (and `/v1/stations/`)
/// - `GET /v1/stations/:id`
pub fn create_router<S: UpstreamSource + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/v1/stations", get(list_stations::<S>))
        .route("/v1/stations/", get(list_stations::<S>))
        .route("/v1/stations/:id", get(get_station::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Get a single station by ID.
async fn get_station<S: UpstreamSource>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<ApiStation>, ApiError> {
    let id: StationId = id
        .parse()
        .map_err(|e| ApiError::unmarshal("failed to convert id param to int", e))?;

    let station = state.stations.get(id).await?;
    Ok(Json(station))
}

/// List all stations, as JSON or as an HTML table.
async fn list_stations<S: UpstreamSource>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let stations = state.stations.list().await?;

    if accepts_html(&headers) {
        let html = StationListTemplate {
            stations: &stations,
        }
        .render()
        .map_err(|e| ApiError::marshal("failed to render stations", e))?;

        return Ok(Html(html).into_response());
    }

    Ok(Json(stations).into_response())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        } else {
            debug!(%status, error = %self, "request rejected");
        }

        (status, Json(self)).into_response()
    }
}
