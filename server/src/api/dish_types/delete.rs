use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::dish_types;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use diesel::prelude::*;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/dish_types/{id}/delete/",
    tag = "dish_types",
    params(("id" = Uuid, Path, description = "Dish type ID")),
    responses(
        (status = 302, description = "Dish type deleted (its dishes cascade), redirect to the dish type list"),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Dish type not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_dish_type(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let mut conn = pool.get()?;

    let deleted = diesel::delete(dish_types::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Dish type"));
    }

    tracing::info!(dish_type_id = %id, "dish type deleted with its dishes");

    Ok(redirect("/dish_types/"))
}
