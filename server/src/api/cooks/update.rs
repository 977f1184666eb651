use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::cooks;
use crate::validate::{non_empty, non_negative_years};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCookRequest {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub years_of_experience: i32,
}

#[utoipa::path(
    post,
    path = "/cooks/{id}/update/",
    tag = "cooks",
    params(("id" = Uuid, Path, description = "Cook ID")),
    request_body = UpdateCookRequest,
    responses(
        (status = 302, description = "Cook updated, redirect to the cook detail"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 403, description = "Neither staff nor the cook themself", body = ErrorResponse),
        (status = 404, description = "Cook not found", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn update_cook(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCookRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCook { target: id })?;

    let username = non_empty("username", &request.username)?;
    non_negative_years(request.years_of_experience)?;

    let mut conn = pool.get()?;

    let updated = diesel::update(cooks::table.find(id))
        .set((
            cooks::username.eq(&username),
            cooks::first_name.eq(request.first_name.trim()),
            cooks::last_name.eq(request.last_name.trim()),
            cooks::email.eq(request.email.trim()),
            cooks::years_of_experience.eq(request.years_of_experience),
            cooks::updated_at.eq(Utc::now()),
        ))
        .execute(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => ApiError::Conflict("Username already exists".to_string()),
            other => ApiError::Database(other),
        })?;

    if updated == 0 {
        return Err(ApiError::NotFound("Cook"));
    }

    Ok(redirect(&format!("/cooks/{id}/")))
}
