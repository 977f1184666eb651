use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::suggestions;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use diesel::prelude::*;
use uuid::Uuid;

/// One-way transition from submitted to approved. Re-approving an already
/// approved suggestion leaves it approved.
#[utoipa::path(
    get,
    path = "/suggestions/{id}/approve/",
    tag = "suggestions",
    params(("id" = Uuid, Path, description = "Suggestion ID")),
    responses(
        (status = 302, description = "Suggestion approved, redirect to its detail"),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Suggestion not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn approve_suggestion(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ApproveSuggestion)?;

    let mut conn = pool.get()?;

    let updated = diesel::update(suggestions::table.find(id))
        .set(suggestions::approved.eq(true))
        .execute(&mut conn)?;
    if updated == 0 {
        return Err(ApiError::NotFound("Suggestion"));
    }

    tracing::info!(suggestion_id = %id, approved_by = %session.cook.username, "suggestion approved");

    Ok(redirect(&format!("/suggestions/{id}/")))
}
