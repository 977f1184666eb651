use crate::api::ApiError;
use crate::auth::{record_visit, AuthSession};
use crate::schema::{cooks, dish_types, dishes, ingredients};
use crate::AppState;
use axum::{extract::State, Json};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub num_dishes: i64,
    pub num_ingredients: i64,
    pub num_dish_types: i64,
    pub num_cooks: i64,
    /// How many times this session has opened the dashboard
    pub num_visits: i32,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "dashboard",
    responses(
        (status = 200, description = "Entity counts and the per-session visit counter", body = DashboardResponse),
        (status = 302, description = "Redirect to the login view when unauthenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn index(
    session: AuthSession,
    State(pool): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let mut conn = pool.get()?;

    let num_dishes: i64 = dishes::table.count().get_result(&mut conn)?;
    let num_ingredients: i64 = ingredients::table.count().get_result(&mut conn)?;
    let num_dish_types: i64 = dish_types::table.count().get_result(&mut conn)?;
    let num_cooks: i64 = cooks::table.count().get_result(&mut conn)?;

    let num_visits = record_visit(&mut conn, session.session_id)?;

    Ok(Json(DashboardResponse {
        num_dishes,
        num_ingredients,
        num_dish_types,
        num_cooks,
        num_visits,
    }))
}

#[derive(OpenApi)]
#[openapi(paths(index), components(schemas(DashboardResponse)))]
pub struct ApiDoc;
