use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::policy::{require, Action};
use crate::schema::dishes;
use crate::validate::{non_empty, non_negative_price};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateDishRequest {
    pub name: String,
    pub description: String,
    /// Decimal string, e.g. "12.50"
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub dish_type_id: Uuid,
    /// Full replacement for the dish's ingredient set
    #[serde(default)]
    pub ingredient_ids: Vec<Uuid>,
    /// Full replacement for the dish's favorited-by set
    #[serde(default)]
    pub cook_ids: Vec<Uuid>,
}

#[utoipa::path(
    post,
    path = "/dishes/{id}/update/",
    tag = "dishes",
    params(("id" = Uuid, Path, description = "Dish ID")),
    request_body = UpdateDishRequest,
    responses(
        (status = 302, description = "Dish updated, redirect to the dish detail"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Dish or referenced entity not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn update_dish(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDishRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let name = non_empty("name", &request.name)?;
    let description = non_empty("description", &request.description)?;
    non_negative_price(&request.price)?;

    let mut conn = pool.get()?;

    conn.transaction(|conn| {
        let updated = diesel::update(dishes::table.find(id))
            .set((
                dishes::name.eq(&name),
                dishes::description.eq(&description),
                dishes::price.eq(&request.price),
                dishes::dish_type_id.eq(request.dish_type_id),
            ))
            .execute(conn)?;

        if updated == 0 {
            return Err(diesel::result::Error::NotFound);
        }

        super::replace_relations(conn, id, &request.ingredient_ids, &request.cook_ids)
    })?;

    Ok(redirect(&format!("/dishes/{id}/")))
}
