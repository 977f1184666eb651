use crate::api::{ApiError, ErrorResponse};
use crate::auth::{create_session, verify_password, SESSION_COOKIE};
use crate::models::Cook;
use crate::schema::cooks;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const SESSION_COOKIE_MAX_AGE_SECS: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LoginFormParams {
    /// Path to return to after logging in
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginFormResponse {
    pub next: Option<String>,
}

/// The login view unauthenticated requests are redirected to.
#[utoipa::path(
    get,
    path = "/login",
    tag = "session",
    params(LoginFormParams),
    responses(
        (status = 200, description = "Login form context", body = LoginFormResponse)
    )
)]
pub async fn login_form(Query(params): Query<LoginFormParams>) -> Json<LoginFormResponse> {
    Json(LoginFormResponse { next: params.next })
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Path to redirect to on success; defaults to the dashboard
    pub next: Option<String>,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "session",
    request_body(content = LoginRequest, example = json!({"username": "cook", "password": "password"})),
    responses(
        (status = 302, description = "Logged in; session cookie set, redirect to the dashboard"),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(pool): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let mut conn = pool.get()?;

    // Usernames are matched case-insensitively
    let cook: Cook = cooks::table
        .filter(
            diesel::dsl::sql::<diesel::sql_types::Bool>("LOWER(username) = LOWER(")
                .bind::<diesel::sql_types::Text, _>(&req.username)
                .sql(")"),
        )
        .select(Cook::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&req.password, &cook.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_session(&mut conn, cook.id)?;
    tracing::info!(username = %cook.username, "cook logged in");

    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_COOKIE_MAX_AGE_SECS}"
    );
    let next = req.next.unwrap_or_else(|| "/".to_string());

    Ok((
        StatusCode::FOUND,
        [(header::SET_COOKIE, cookie), (header::LOCATION, next)],
    )
        .into_response())
}
