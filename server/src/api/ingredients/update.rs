use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::ingredients;
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
pub struct UpdateIngredientRequest {
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/ingredients/{id}/update/",
    tag = "ingredients",
    params(("id" = Uuid, Path, description = "Ingredient ID")),
    request_body = UpdateIngredientRequest,
    responses(
        (status = 302, description = "Ingredient updated, redirect to the ingredient list"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn update_ingredient(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateIngredientRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let name = non_empty("name", &request.name)?;

    let mut conn = pool.get()?;

    let updated = diesel::update(ingredients::table.find(id))
        .set(ingredients::name.eq(&name))
        .execute(&mut conn)?;
    if updated == 0 {
        return Err(ApiError::NotFound("Ingredient"));
    }

    Ok(redirect("/ingredients/"))
}
