// ============================================================================
// Luxe API - Admin Guard
// File: crates/luxe-api/src/middleware/admin_guard.rs
// ============================================================================
//! `AdminGuard` extractor. Handlers opt in by taking `AdminGuard` as a
//! parameter; the wrapped session is the one `authorize` accepted.

use axum::extract::{FromRequestParts, Query};
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap, Uri};
use serde::Deserialize;
use tracing::warn;

use luxe_core::domain::AdminSession;
use luxe_core::error::{AuthFailure, DomainError};
use luxe_security::bearer_token;

use crate::error::ApiError;
use crate::state::AppState;

pub struct AdminGuard(pub AdminSession);

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Bearer header first, then `?token=` when enabled. Malformed headers
/// fall through to the query parameter.
pub fn extract_token(headers: &HeaderMap, uri: &Uri, allow_query: bool) -> Option<String> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token);
    if let Some(token) = from_header {
        return Some(token.to_string());
    }

    if !allow_query {
        return None;
    }

    let token = Query::<TokenQuery>::try_from_uri(uri)
        .ok()
        .and_then(|Query(q)| q.token)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())?;

    warn!("Admin token supplied in query string on {}", uri.path());
    Some(token)
}

impl FromRequestParts<AppState> for AdminGuard {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers, &parts.uri, state.allow_query_token)
            .ok_or(DomainError::Unauthorized(AuthFailure::MissingToken))?;

        let session = state.auth.authorize(&token).await?;
        Ok(AdminGuard(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(auth: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(auth).unwrap());
        headers
    }

    #[test]
    fn test_header_token() {
        let uri: Uri = "/api/admin/verify".parse().unwrap();
        assert_eq!(
            extract_token(&headers("bearer  abc "), &uri, true).as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_wrong_scheme_falls_through_to_query() {
        let uri: Uri = "/api/admin/verify?token=%20q1%20".parse().unwrap();
        assert_eq!(extract_token(&headers("Basic xyz"), &uri, true).as_deref(), Some("q1"));

        let bare: Uri = "/api/admin/verify".parse().unwrap();
        assert_eq!(extract_token(&headers("Basic xyz"), &bare, true), None);
    }

    #[test]
    fn test_query_token_can_be_disabled() {
        let uri: Uri = "/api/admin/verify?token=q1".parse().unwrap();
        assert_eq!(extract_token(&HeaderMap::new(), &uri, false), None);
        assert_eq!(extract_token(&HeaderMap::new(), &uri, true).as_deref(), Some("q1"));
    }

    #[test]
    fn test_empty_tokens_ignored() {
        let uri: Uri = "/api/admin/verify?token=%20".parse().unwrap();
        assert_eq!(extract_token(&headers("Bearer "), &uri, true), None);
    }
}
