use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::{Dish, DishType, Ingredient};
use crate::policy::{require, Action};
use crate::schema::{cooks, dish_cooks, dish_ingredients, dish_types, dishes, ingredients};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DishTypeRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CookRef {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DishResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Decimal string, e.g. "12.50"
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub dish_type: DishTypeRef,
    pub ingredients: Vec<IngredientRef>,
    /// Cooks who favorited the dish
    pub cooks: Vec<CookRef>,
    /// Whether the requesting cook has favorited the dish
    pub is_favorite: bool,
}

#[utoipa::path(
    get,
    path = "/dishes/{id}/",
    tag = "dishes",
    params(("id" = Uuid, Path, description = "Dish ID")),
    responses(
        (status = 200, description = "Dish with its type, ingredients, and favorited-by cooks", body = DishResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn dish_detail(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DishResponse>, ApiError> {
    require(&session.cook, Action::ReadCatalog)?;

    let mut conn = pool.get()?;

    let (dish, dish_type): (Dish, DishType) = dishes::table
        .inner_join(dish_types::table)
        .filter(dishes::id.eq(id))
        .select((Dish::as_select(), DishType::as_select()))
        .first(&mut conn)
        .optional()?
        .ok_or(ApiError::NotFound("Dish"))?;

    let attached_ingredients: Vec<Ingredient> = dish_ingredients::table
        .inner_join(ingredients::table)
        .filter(dish_ingredients::dish_id.eq(id))
        .select(Ingredient::as_select())
        .order(ingredients::name.asc())
        .load(&mut conn)?;

    let favorited_by: Vec<(Uuid, String)> = dish_cooks::table
        .inner_join(cooks::table)
        .filter(dish_cooks::dish_id.eq(id))
        .select((cooks::id, cooks::username))
        .order(cooks::username.asc())
        .load(&mut conn)?;

    let is_favorite = favorited_by
        .iter()
        .any(|(cook_id, _)| *cook_id == session.cook.id);

    Ok(Json(DishResponse {
        id: dish.id,
        name: dish.name,
        description: dish.description,
        price: dish.price,
        dish_type: DishTypeRef {
            id: dish_type.id,
            name: dish_type.name,
        },
        ingredients: attached_ingredients
            .into_iter()
            .map(|i| IngredientRef {
                id: i.id,
                name: i.name,
            })
            .collect(),
        cooks: favorited_by
            .into_iter()
            .map(|(id, username)| CookRef { id, username })
            .collect(),
        is_favorite,
    }))
}
