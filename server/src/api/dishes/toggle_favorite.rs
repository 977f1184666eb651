use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::{dish_cooks, dishes};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use diesel::prelude::*;
use uuid::Uuid;

/// Flip the requesting cook's favorite relation to a dish. Toggling twice
/// restores the original state.
///
/// Concurrent double-toggles are a single delete/insert pair each; the
/// ON CONFLICT clause keeps an interleaved second insert a no-op.
#[utoipa::path(
    get,
    path = "/dishes/{id}/toggle-button/",
    tag = "dishes",
    params(("id" = Uuid, Path, description = "Dish ID")),
    responses(
        (status = 302, description = "Favorite toggled, redirect to the dish detail"),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn toggle_favorite(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ToggleFavorite)?;

    let mut conn = pool.get()?;

    dishes::table
        .find(id)
        .select(dishes::id)
        .first::<Uuid>(&mut conn)
        .optional()?
        .ok_or(ApiError::NotFound("Dish"))?;

    let removed = diesel::delete(dish_cooks::table.find((id, session.cook.id)))
        .execute(&mut conn)?;

    if removed == 0 {
        diesel::insert_into(dish_cooks::table)
            .values((
                dish_cooks::dish_id.eq(id),
                dish_cooks::cook_id.eq(session.cook.id),
            ))
            .on_conflict_do_nothing()
            .execute(&mut conn)?;
    }

    Ok(redirect(&format!("/dishes/{id}/")))
}
