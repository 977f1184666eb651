use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::dishes;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use diesel::prelude::*;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/dishes/{id}/delete/",
    tag = "dishes",
    params(("id" = Uuid, Path, description = "Dish ID")),
    responses(
        (status = 302, description = "Dish deleted (suggestions cascade), redirect to the dish list"),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_dish(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let mut conn = pool.get()?;

    let deleted = diesel::delete(dishes::table.find(id)).execute(&mut conn)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Dish"));
    }

    tracing::info!(dish_id = %id, "dish deleted");

    Ok(redirect("/dishes/"))
}
