pub mod cooks;
pub mod dashboard;
pub mod dish_types;
pub mod dishes;
pub mod ingredients;
pub mod session;
pub mod suggestions;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Serialize;
use thiserror::Error;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request failure taxonomy. Every handler returns `Result<_, ApiError>`;
/// the conversion below fixes the HTTP status per failure class, so the
/// mapping lives in exactly one place.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad or missing form input; the request is not applied.
    #[error("{0}")]
    Validation(String),
    /// Login with a bad username/password pair.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Denied by the permission policy; terminal for the request.
    #[error("Permission denied")]
    Forbidden,
    /// Unknown primary key.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] DieselError),
    #[error(transparent)]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("Failed to hash password")]
    PasswordHash,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Permission denied".to_string()),
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Database(DieselError::NotFound) => {
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            ApiError::Database(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            )) => (StatusCode::CONFLICT, "Already exists".to_string()),
            // A bad foreign key means the referenced entity is gone
            ApiError::Database(DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                _,
            )) => (StatusCode::NOT_FOUND, "Referenced record not found".to_string()),
            ApiError::Database(DieselError::DatabaseError(
                DatabaseErrorKind::CheckViolation,
                _,
            )) => (StatusCode::BAD_REQUEST, "Invalid field value".to_string()),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Pool(e) => {
                tracing::error!("Connection pool error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database connection failed".to_string(),
                )
            }
            ApiError::PasswordHash => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to hash password".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// 302 to the canonical follow-up view. Successful mutations and
/// unauthenticated requests both answer with this shape.
pub fn redirect(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components and security
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse, crate::pagination::PageMeta)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(crate::auth::SESSION_COOKIE))),
        );
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        session::ApiDoc::openapi(),
        dashboard::ApiDoc::openapi(),
        dishes::ApiDoc::openapi(),
        ingredients::ApiDoc::openapi(),
        dish_types::ApiDoc::openapi(),
        cooks::ApiDoc::openapi(),
        suggestions::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation("name cannot be empty".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("dish").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(DieselError::NotFound)
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_redirect_is_302_with_location() {
        let response = redirect("/dishes/");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/dishes/"
        );
    }
}
