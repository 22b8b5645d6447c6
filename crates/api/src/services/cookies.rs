//! Session cookie helpers.
//!
//! The session token travels in a single httpOnly cookie; these helpers build
//! the Set-Cookie values and read the token back out of request headers.

use axum::http::HeaderMap;

use crate::config::SessionConfig;

/// Build the Set-Cookie header value establishing a session.
pub fn build_session_cookie(config: &SessionConfig, token: &str) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        config.cookie_name, token, config.ttl_secs
    );

    if config.cookie_secure {
        cookie.push_str("; Secure");
    }

    cookie
}

/// Build the Set-Cookie header value clearing the session (logout).
pub fn build_clear_cookie(config: &SessionConfig) -> String {
    let mut cookie = format!(
        "{}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax",
        config.cookie_name
    );

    if config.cookie_secure {
        cookie.push_str("; Secure");
    }

    cookie
}

/// Extract a cookie value from request headers by name.
pub fn extract_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(axum::http::header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|cookie_header| {
            cookie_header.split(';').map(|s| s.trim()).find_map(|cookie| {
                let (cookie_name, cookie_value) = cookie.split_once('=')?;
                if cookie_name == name {
                    Some(cookie_value)
                } else {
                    None
                }
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn test_config(secure: bool) -> SessionConfig {
        SessionConfig {
            ttl_secs: 604_800,
            cookie_name: "journey_session".to_string(),
            cookie_secure: secure,
        }
    }

    #[test]
    fn test_build_session_cookie() {
        let cookie = build_session_cookie(&test_config(true), "tok123");
        assert!(cookie.contains("journey_session=tok123"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_build_session_cookie_insecure_for_local_dev() {
        let cookie = build_session_cookie(&test_config(false), "tok123");
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_build_clear_cookie() {
        let cookie = build_clear_cookie(&test_config(true));
        assert!(cookie.contains("journey_session="));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("other=value; journey_session=abc123; x=y"),
        );
        assert_eq!(extract_cookie(&headers, "journey_session"), Some("abc123"));
    }

    #[test]
    fn test_extract_cookie_not_found() {
        let headers = HeaderMap::new();
        assert_eq!(extract_cookie(&headers, "journey_session"), None);
    }
}
