use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::{hash_password, AuthSession};
use crate::policy::{require, Action};
use crate::schema::cooks;
use crate::validate::non_empty;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PasswordResetFormResponse {
    pub id: Uuid,
    pub username: String,
}

/// The reset form context; staff or the cook themself only.
#[utoipa::path(
    get,
    path = "/cooks/{id}/password-reset/",
    tag = "cooks",
    params(("id" = Uuid, Path, description = "Cook ID")),
    responses(
        (status = 200, description = "Reset form context", body = PasswordResetFormResponse),
        (status = 403, description = "Neither staff nor the cook themself", body = ErrorResponse),
        (status = 404, description = "Cook not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn password_reset_form(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PasswordResetFormResponse>, ApiError> {
    require(&session.cook, Action::ManageCook { target: id })?;

    let mut conn = pool.get()?;

    let username: String = cooks::table
        .find(id)
        .select(cooks::username)
        .first(&mut conn)
        .optional()?
        .ok_or(ApiError::NotFound("Cook"))?;

    Ok(Json(PasswordResetFormResponse { id, username }))
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PasswordResetRequest {
    pub new_password: String,
}

#[utoipa::path(
    post,
    path = "/cooks/{id}/password-reset/",
    tag = "cooks",
    params(("id" = Uuid, Path, description = "Cook ID")),
    request_body = PasswordResetRequest,
    responses(
        (status = 302, description = "Password replaced, redirect to the cook detail"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 403, description = "Neither staff nor the cook themself", body = ErrorResponse),
        (status = 404, description = "Cook not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn password_reset(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PasswordResetRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCook { target: id })?;

    non_empty("new_password", &request.new_password)?;

    let password_hash = hash_password(&request.new_password).map_err(|_| ApiError::PasswordHash)?;

    let mut conn = pool.get()?;

    let updated = diesel::update(cooks::table.find(id))
        .set((
            cooks::password_hash.eq(&password_hash),
            cooks::updated_at.eq(Utc::now()),
        ))
        .execute(&mut conn)?;
    if updated == 0 {
        return Err(ApiError::NotFound("Cook"));
    }

    tracing::info!(cook_id = %id, "password reset");

    Ok(redirect(&format!("/cooks/{id}/")))
}
