use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::ingredients;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use diesel::prelude::*;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/ingredients/{id}/delete/",
    tag = "ingredients",
    params(("id" = Uuid, Path, description = "Ingredient ID")),
    responses(
        (status = 302, description = "Ingredient deleted, redirect to the ingredient list"),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_ingredient(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let mut conn = pool.get()?;

    let deleted = diesel::delete(ingredients::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Ingredient"));
    }

    Ok(redirect("/ingredients/"))
}
