use serde::{Deserialize, Serialize};

use crate::handlers::ScanHandler;
use crate::models::{Coordinate, ScanResult};
use crate::services::{LocationOutcome, PhotoRef};

/// Body of `POST /scan`.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    /// Missing or empty when the camera failed to capture.
    #[serde(default)]
    pub photo_uri: Option<String>,
    /// Client-side location, used only when both halves are present.
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Query of `GET /places`.
#[derive(Debug, Deserialize, Serialize)]
pub struct PlacesQuery {
    pub drink: String,
    pub lat: f64,
    pub lon: f64,
}

/// Run a scan for an incoming request.
pub async fn handle_scan_request(
    handler: &ScanHandler,
    request: ScanRequest,
) -> anyhow::Result<ScanResult> {
    let photo = PhotoRef::from_optional(request.photo_uri.as_deref());
    if photo == PhotoRef::Placeholder {
        log::warn!("⚠️ Scan request without a photo, using placeholder");
    }

    match (request.latitude, request.longitude) {
        (Some(latitude), Some(longitude)) => {
            log::debug!("📍 Client supplied location {},{}", latitude, longitude);
            let outcome = LocationOutcome::Granted(Coordinate {
                latitude,
                longitude,
            });
            handler.scan_with_location(photo, outcome)
        }
        _ => handler.scan_photo(photo).await,
    }
}

// Axum integration (optional - requires axum dependency)
#[cfg(feature = "http-server")]
pub mod server {
    use super::*;
    use crate::models::NearbyPlace;
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };
    use std::sync::Arc;

    pub struct AppState {
        pub scan_handler: Arc<ScanHandler>,
    }

    pub fn create_router(scan_handler: Arc<ScanHandler>) -> Router {
        let state = Arc::new(AppState { scan_handler });

        Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .route("/scan", post(scan_handler_route))
            .route("/places", get(places_handler))
            .with_state(state)
    }

    async fn scan_handler_route(
        State(state): State<Arc<AppState>>,
        body: String,
    ) -> Result<Json<ScanResult>, StatusCode> {
        let request: ScanRequest = if body.trim().is_empty() {
            ScanRequest::default()
        } else {
            match serde_json::from_str(&body) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("❌ Failed to parse scan request: {}", e);
                    return Err(StatusCode::UNPROCESSABLE_ENTITY);
                }
            }
        };

        match handle_scan_request(&state.scan_handler, request).await {
            Ok(result) => Ok(Json(result)),
            Err(e) => {
                log::error!("❌ Scan failed: {}", e);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    async fn places_handler(
        State(state): State<Arc<AppState>>,
        Query(query): Query<PlacesQuery>,
    ) -> Result<Json<Vec<NearbyPlace>>, StatusCode> {
        let origin = Coordinate::new(query.lat, query.lon).map_err(|e| {
            log::warn!("⚠️ Rejected place lookup: {}", e);
            StatusCode::BAD_REQUEST
        })?;

        let places = state
            .scan_handler
            .find_places(&query.drink, origin)
            .map_err(|e| {
                log::error!("❌ Place lookup failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;

        Ok(Json(places))
    }

    async fn root_handler() -> &'static str {
        "Drink Finder - POST /scan to identify a drink, GET /places for nearby venues"
    }

    async fn health_check() -> &'static str {
        "OK"
    }

}
