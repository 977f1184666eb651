use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::cooks;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use diesel::prelude::*;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/cooks/{id}/delete/",
    tag = "cooks",
    params(("id" = Uuid, Path, description = "Cook ID")),
    responses(
        (status = 302, description = "Cook deleted (sessions and suggestions cascade), redirect to the cook list"),
        (status = 403, description = "Neither staff nor the cook themself", body = ErrorResponse),
        (status = 404, description = "Cook not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_cook(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCook { target: id })?;

    let mut conn = pool.get()?;

    let deleted = diesel::delete(cooks::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Cook"));
    }

    tracing::info!(cook_id = %id, "cook deleted");

    Ok(redirect("/cooks/"))
}
