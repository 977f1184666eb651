use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::NewDishType;
use crate::policy::{require, Action};
use crate::schema::dish_types;
use crate::validate::non_empty;
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDishTypeRequest {
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/dish_types/create/",
    tag = "dish_types",
    request_body = CreateDishTypeRequest,
    responses(
        (status = 302, description = "Dish type created, redirect to the dish type list"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn create_dish_type(
    session: AuthSession,
    State(pool): State<AppState>,
    Json(request): Json<CreateDishTypeRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let name = non_empty("name", &request.name)?;

    let mut conn = pool.get()?;

    diesel::insert_into(dish_types::table)
        .values(&NewDishType { name: &name })
        .execute(&mut conn)?;

    Ok(redirect("/dish_types/"))
}
