use crate::db::DbPool;
use crate::models::Cook;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use uuid::Uuid;

use super::db::get_session_cook;
use super::SESSION_COOKIE;

/// Extractor providing the authenticated cook plus the id of the session
/// row (which carries per-session state such as the visit counter).
///
/// Use this in any handler that requires a logged-in cook:
/// ```ignore
/// async fn my_handler(session: AuthSession) -> impl IntoResponse {
///     // session.cook is the authenticated Cook
/// }
/// ```
pub struct AuthSession {
    pub cook: Cook,
    pub session_id: Uuid,
}

/// Every unauthenticated request is answered the same way: a redirect to
/// the login view carrying the originally requested path.
pub struct LoginRedirect {
    next: String,
}

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        crate::api::redirect(&format!("/login?next={}", self.next))
    }
}

/// Session token from the `kitchen_session` cookie, or from an
/// `Authorization: Bearer` header for non-browser clients.
fn token_from_parts(parts: &Parts) -> Option<String> {
    if let Some(cookies) = parts
        .headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
    {
        for pair in cookies.split(';') {
            if let Some(token) = pair
                .trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
            {
                return Some(token.to_string());
            }
        }
    }

    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
    Arc<DbPool>: FromRef<S>,
{
    type Rejection = LoginRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let next = parts.uri.path().to_string();
        let pool = Arc::<DbPool>::from_ref(state);

        let Some(token) = token_from_parts(parts) else {
            return Err(LoginRedirect { next });
        };

        match get_session_cook(&pool, &token).await {
            Some((session_id, cook)) => Ok(AuthSession { cook, session_id }),
            None => Err(LoginRedirect { next }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/dishes/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_token_from_session_cookie() {
        let parts = parts_with_headers(&[("cookie", "kitchen_session=abc123")]);
        assert_eq!(token_from_parts(&parts), Some("abc123".to_string()));
    }

    #[test]
    fn test_token_found_among_other_cookies() {
        let parts =
            parts_with_headers(&[("cookie", "theme=dark; kitchen_session=abc123; lang=en")]);
        assert_eq!(token_from_parts(&parts), Some("abc123".to_string()));
    }

    #[test]
    fn test_token_from_bearer_header() {
        let parts = parts_with_headers(&[("authorization", "Bearer tok")]);
        assert_eq!(token_from_parts(&parts), Some("tok".to_string()));
    }

    #[test]
    fn test_no_credentials_yields_no_token() {
        let parts = parts_with_headers(&[]);
        assert_eq!(token_from_parts(&parts), None);

        let parts = parts_with_headers(&[("cookie", "theme=dark")]);
        assert_eq!(token_from_parts(&parts), None);
    }
}
