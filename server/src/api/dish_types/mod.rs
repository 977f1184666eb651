pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for dish type endpoints (mounted at /dish_types)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_dish_types))
        .route("/create/", post(create::create_dish_type))
        .route("/{id}/", get(detail::dish_type_detail))
        .route("/{id}/update/", post(update::update_dish_type))
        .route("/{id}/delete/", post(delete::delete_dish_type))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_dish_types,
        detail::dish_type_detail,
        create::create_dish_type,
        update::update_dish_type,
        delete::delete_dish_type,
    ),
    components(schemas(
        list::ListDishTypesResponse,
        list::DishTypeSummary,
        detail::DishTypeResponse,
        detail::DishOfType,
        create::CreateDishTypeRequest,
        update::UpdateDishTypeRequest,
    ))
)]
pub struct ApiDoc;
