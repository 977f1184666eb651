use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::NewIngredient;
use crate::policy::{require, Action};
use crate::schema::ingredients;
use crate::validate::non_empty;
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIngredientRequest {
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/ingredients/create/",
    tag = "ingredients",
    request_body = CreateIngredientRequest,
    responses(
        (status = 302, description = "Ingredient created, redirect to the ingredient list"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn create_ingredient(
    session: AuthSession,
    State(pool): State<AppState>,
    Json(request): Json<CreateIngredientRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let name = non_empty("name", &request.name)?;

    let mut conn = pool.get()?;

    diesel::insert_into(ingredients::table)
        .values(&NewIngredient { name: &name })
        .execute(&mut conn)?;

    Ok(redirect("/ingredients/"))
}
