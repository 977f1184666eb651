use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::DishType;
use crate::policy::{require, Action};
use crate::schema::{dish_types, dishes};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DishOfType {
    pub id: Uuid,
    pub name: String,
    /// Decimal string, e.g. "12.50"
    #[schema(value_type = String)]
    pub price: BigDecimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DishTypeResponse {
    pub id: Uuid,
    pub name: String,
    pub dishes: Vec<DishOfType>,
}

#[utoipa::path(
    get,
    path = "/dish_types/{id}/",
    tag = "dish_types",
    params(("id" = Uuid, Path, description = "Dish type ID")),
    responses(
        (status = 200, description = "Dish type with its dishes", body = DishTypeResponse),
        (status = 404, description = "Dish type not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn dish_type_detail(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DishTypeResponse>, ApiError> {
    require(&session.cook, Action::ReadCatalog)?;

    let mut conn = pool.get()?;

    let dish_type: DishType = dish_types::table
        .find(id)
        .select(DishType::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or(ApiError::NotFound("Dish type"))?;

    let type_dishes: Vec<(Uuid, String, BigDecimal)> = dishes::table
        .filter(dishes::dish_type_id.eq(id))
        .select((dishes::id, dishes::name, dishes::price))
        .order(dishes::name.asc())
        .load(&mut conn)?;

    Ok(Json(DishTypeResponse {
        id: dish_type.id,
        name: dish_type.name,
        dishes: type_dishes
            .into_iter()
            .map(|(id, name, price)| DishOfType { id, name, price })
            .collect(),
    }))
}
