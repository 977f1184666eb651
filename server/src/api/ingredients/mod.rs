pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for ingredient endpoints (mounted at /ingredients)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_ingredients))
        .route("/create/", post(create::create_ingredient))
        .route("/{id}/update/", post(update::update_ingredient))
        .route("/{id}/delete/", post(delete::delete_ingredient))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_ingredients,
        create::create_ingredient,
        update::update_ingredient,
        delete::delete_ingredient,
    ),
    components(schemas(
        list::ListIngredientsResponse,
        list::IngredientSummary,
        create::CreateIngredientRequest,
        update::UpdateIngredientRequest,
    ))
)]
pub struct ApiDoc;
