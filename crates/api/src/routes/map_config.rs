//! Map style proxy.
//!
//! The MapTiler API key never reaches the browser: the style document is
//! fetched server-side with the key and returned as-is.

use axum::{extract::State, Json};
use tracing::error;

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/config/map-style
pub async fn map_style(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let map = &state.config.map;

    if map.maptiler_api_key.is_empty() {
        return Err(ApiError::ServiceUnavailable(
            "Map service is not configured".to_string(),
        ));
    }

    let url = format!(
        "https://api.maptiler.com/maps/{}/style.json?key={}",
        map.style, map.maptiler_api_key
    );

    let response = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to reach map style provider");
            ApiError::ServiceUnavailable("Map service is unreachable".to_string())
        })?;

    if !response.status().is_success() {
        error!(status = %response.status(), "Map style provider returned an error");
        return Err(ApiError::ServiceUnavailable(
            "Map service rejected the request".to_string(),
        ));
    }

    let style: serde_json::Value = response.json().await.map_err(|e| {
        error!(error = %e, "Invalid style document from map provider");
        ApiError::Internal("Invalid style document".to_string())
    })?;

    Ok(Json(style))
}
