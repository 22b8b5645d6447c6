//! Session authentication extractor.
//!
//! Resolves the session cookie to a user on every request: the cookie token
//! is hashed and looked up in the database-backed session store, so sessions
//! survive process restarts and revocation is immediate.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use persistence::repositories::SessionRepository;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::cookies::extract_cookie;

/// Authenticated user information resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub is_admin: bool,
    /// Hash of the presented token; used to delete the session on logout.
    pub token_hash: String,
}

impl SessionUser {
    async fn resolve(parts: &Parts, state: &AppState) -> Result<Self, ApiError> {
        let token = extract_cookie(&parts.headers, &state.config.session.cookie_name)
            .ok_or_else(|| ApiError::Unauthorized("Not logged in".to_string()))?;

        let token_hash = shared::token::hash_token(token);

        let session = SessionRepository::new(state.pool.clone())
            .find_live_session(&token_hash)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Session expired or invalid".to_string()))?;

        if !session.user_is_active {
            return Err(ApiError::Unauthorized("Account is deactivated".to_string()));
        }

        Ok(SessionUser {
            user_id: session.user_id,
            is_admin: session.is_admin,
            token_hash: session.token_hash,
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Middleware may already have resolved the session
        if let Some(user) = parts.extensions.get::<SessionUser>() {
            return Ok(user.clone());
        }

        Self::resolve(parts, state).await
    }
}

/// Optional session authentication.
///
/// Lets public routes (e.g. booking creation) associate a user when one is
/// logged in without rejecting anonymous requests.
#[derive(Debug, Clone)]
pub struct OptionalSessionUser(pub Option<SessionUser>);

#[async_trait]
impl FromRequestParts<AppState> for OptionalSessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<SessionUser>() {
            return Ok(OptionalSessionUser(Some(user.clone())));
        }

        if extract_cookie(&parts.headers, &state.config.session.cookie_name).is_none() {
            return Ok(OptionalSessionUser(None));
        }

        // A cookie was presented; a stale one is treated as anonymous rather
        // than an error so old browsers can still book.
        match SessionUser::resolve(parts, state).await {
            Ok(user) => Ok(OptionalSessionUser(Some(user))),
            Err(ApiError::Unauthorized(_)) => Ok(OptionalSessionUser(None)),
            Err(e) => Err(e),
        }
    }
}
