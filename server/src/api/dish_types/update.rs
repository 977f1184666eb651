use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::dish_types;
use crate::validate::non_empty;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateDishTypeRequest {
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/dish_types/{id}/update/",
    tag = "dish_types",
    params(("id" = Uuid, Path, description = "Dish type ID")),
    request_body = UpdateDishTypeRequest,
    responses(
        (status = 302, description = "Dish type updated, redirect to the dish type list"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Dish type not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn update_dish_type(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDishTypeRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let name = non_empty("name", &request.name)?;

    let mut conn = pool.get()?;

    let updated = diesel::update(dish_types::table.find(id))
        .set(dish_types::name.eq(&name))
        .execute(&mut conn)?;
    if updated == 0 {
        return Err(ApiError::NotFound("Dish type"));
    }

    Ok(redirect("/dish_types/"))
}
