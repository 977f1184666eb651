pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod toggle_favorite;
pub mod update;

use crate::schema::{dish_cooks, dish_ingredients};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use diesel::prelude::*;
use utoipa::OpenApi;
use uuid::Uuid;

/// Returns the router for dish endpoints (mounted at /dishes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_dishes))
        .route("/create/", post(create::create_dish))
        .route("/{id}/", get(detail::dish_detail))
        .route("/{id}/update/", post(update::update_dish))
        .route("/{id}/delete/", post(delete::delete_dish))
        .route(
            "/{id}/toggle-button/",
            get(toggle_favorite::toggle_favorite).post(toggle_favorite::toggle_favorite),
        )
}

/// Replace a dish's ingredient and favorited-by sets. Runs inside the
/// caller's transaction so a failed attach never leaves a half-updated dish.
pub(crate) fn replace_relations(
    conn: &mut PgConnection,
    dish_id: Uuid,
    ingredient_ids: &[Uuid],
    cook_ids: &[Uuid],
) -> Result<(), diesel::result::Error> {
    diesel::delete(dish_ingredients::table.filter(dish_ingredients::dish_id.eq(dish_id)))
        .execute(conn)?;
    diesel::delete(dish_cooks::table.filter(dish_cooks::dish_id.eq(dish_id))).execute(conn)?;

    let ingredient_rows: Vec<_> = ingredient_ids
        .iter()
        .map(|&ingredient_id| {
            (
                dish_ingredients::dish_id.eq(dish_id),
                dish_ingredients::ingredient_id.eq(ingredient_id),
            )
        })
        .collect();
    diesel::insert_into(dish_ingredients::table)
        .values(&ingredient_rows)
        .execute(conn)?;

    let cook_rows: Vec<_> = cook_ids
        .iter()
        .map(|&cook_id| {
            (
                dish_cooks::dish_id.eq(dish_id),
                dish_cooks::cook_id.eq(cook_id),
            )
        })
        .collect();
    diesel::insert_into(dish_cooks::table)
        .values(&cook_rows)
        .execute(conn)?;

    Ok(())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_dishes,
        detail::dish_detail,
        create::create_dish,
        update::update_dish,
        delete::delete_dish,
        toggle_favorite::toggle_favorite,
    ),
    components(schemas(
        list::ListDishesResponse,
        list::DishSummary,
        detail::DishResponse,
        detail::DishTypeRef,
        detail::IngredientRef,
        detail::CookRef,
        create::CreateDishRequest,
        update::UpdateDishRequest,
    ))
)]
pub struct ApiDoc;
