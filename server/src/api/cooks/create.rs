use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::{hash_password, AuthSession};
use crate::models::NewCook;
use crate::policy::{require, Action};
use crate::schema::cooks;
use crate::validate::{non_empty, non_negative_years};
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCookRequest {
    pub username: String,
    pub password: String,
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
    path = "/cooks/create/",
    tag = "cooks",
    request_body = CreateCookRequest,
    responses(
        (status = 302, description = "Cook created, redirect to the cook list"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn create_cook(
    session: AuthSession,
    State(pool): State<AppState>,
    Json(request): Json<CreateCookRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::CreateCook)?;

    let username = non_empty("username", &request.username)?;
    non_empty("password", &request.password)?;
    non_negative_years(request.years_of_experience)?;

    let password_hash = hash_password(&request.password).map_err(|_| ApiError::PasswordHash)?;

    let mut conn = pool.get()?;

    let new_cook = NewCook {
        username: &username,
        first_name: request.first_name.trim(),
        last_name: request.last_name.trim(),
        email: request.email.trim(),
        password_hash: &password_hash,
        is_staff: false,
        years_of_experience: request.years_of_experience,
    };

    let cook_id: Uuid = diesel::insert_into(cooks::table)
        .values(&new_cook)
        .returning(cooks::id)
        .get_result(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => ApiError::Conflict("Username already exists".to_string()),
            other => ApiError::Database(other),
        })?;

    tracing::info!(%cook_id, username = %username, "cook registered");

    Ok(redirect("/cooks/"))
}
