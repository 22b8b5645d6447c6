//! Admin gating middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SessionUser;

/// Middleware that requires an authenticated admin session.
///
/// Applied as a `route_layer` on the `/api/admin/...` routers. The resolved
/// session is stored in request extensions so handlers can extract it without
/// a second database lookup.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let user = match <SessionUser as axum::extract::FromRequestParts<AppState>>::from_request_parts(
        &mut parts, &state,
    )
    .await
    {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    if !user.is_admin {
        return ApiError::Forbidden("Admin access required".to_string()).into_response();
    }

    parts.extensions.insert(user);
    req = Request::from_parts(parts, body);

    next.run(req).await
}
