//! Authentication and profile routes.
//!
//! Session-based username/password login: credentials are verified against
//! the stored Argon2id hash, and a database-backed session row is created and
//! handed to the browser as an httpOnly cookie.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use domain::models::user::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use domain::models::User;
use persistence::repositories::{SessionRepository, UserRepository};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SessionUser;
use crate::services::cookies::{build_clear_cookie, build_session_cookie};

/// Register a new account.
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let users = UserRepository::new(state.pool.clone());

    if users.username_exists(&request.username).await? {
        return Err(ApiError::Conflict("Username is already taken".to_string()));
    }

    let password_hash = shared::password::hash_password(&request.password)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = users
        .create(
            Uuid::new_v4(),
            &request.username,
            &password_hash,
            &request.email,
            request.first_name.as_deref(),
            request.last_name.as_deref(),
            false,
        )
        .await?;

    // Log the fresh account straight in
    let cookie = establish_session(&state, user.id).await?;

    info!(user_id = %user.id, username = %request.username, "User registered");

    Ok((
        StatusCode::CREATED,
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(User::from(user)),
    ))
}

/// Log in with username and password.
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let users = UserRepository::new(state.pool.clone());

    let user = users
        .find_by_username(&request.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid username or password".to_string()))?;

    let hash = user
        .password_hash
        .as_deref()
        .ok_or_else(|| ApiError::Unauthorized("Invalid username or password".to_string()))?;

    let valid = shared::password::verify_password(&request.password, hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if !valid {
        warn!(username = %request.username, "Failed login attempt");
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    if !user.is_active {
        return Err(ApiError::Unauthorized("Account is deactivated".to_string()));
    }

    // Reap stale sessions while we are here
    let sessions = SessionRepository::new(state.pool.clone());
    if let Err(e) = sessions.delete_expired().await {
        warn!(error = %e, "Failed to reap expired sessions");
    }

    let cookie = establish_session(&state, user.id).await?;

    info!(user_id = %user.id, username = %request.username, "User logged in");

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(User::from(user))))
}

/// Log out: delete the session row and clear the cookie.
///
/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<impl IntoResponse, ApiError> {
    SessionRepository::new(state.pool.clone())
        .delete(&user.token_hash)
        .await?;

    info!(user_id = %user.user_id, "User logged out");

    Ok((
        StatusCode::NO_CONTENT,
        AppendHeaders([(SET_COOKIE, build_clear_cookie(&state.config.session))]),
    ))
}

/// Current user.
///
/// GET /api/user and GET /api/auth/user
pub async fn current_user(
    State(state): State<AppState>,
    session: SessionUser,
) -> Result<Json<User>, ApiError> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(session.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Account no longer exists".to_string()))?;

    Ok(Json(user.into()))
}

/// Update the current user's profile (upsert semantics).
///
/// PUT /api/auth/user
pub async fn update_profile(
    State(state): State<AppState>,
    session: SessionUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    request.validate()?;

    let user = UserRepository::new(state.pool.clone())
        .upsert_profile(session.user_id, &request)
        .await?;

    Ok(Json(user.into()))
}

async fn establish_session(state: &AppState, user_id: Uuid) -> Result<String, ApiError> {
    let token = shared::token::generate_session_token();
    let token_hash = shared::token::hash_token(&token);

    SessionRepository::new(state.pool.clone())
        .create(&token_hash, user_id, state.config.session.ttl_secs)
        .await?;

    Ok(build_session_cookie(&state.config.session, &token))
}
