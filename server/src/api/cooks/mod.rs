pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod password_reset;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for cook endpoints (mounted at /cooks)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_cooks))
        .route("/create/", post(create::create_cook))
        .route("/{id}/", get(detail::cook_detail))
        .route("/{id}/update/", post(update::update_cook))
        .route("/{id}/delete/", post(delete::delete_cook))
        .route(
            "/{id}/password-reset/",
            get(password_reset::password_reset_form).post(password_reset::password_reset),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_cooks,
        detail::cook_detail,
        create::create_cook,
        update::update_cook,
        delete::delete_cook,
        password_reset::password_reset_form,
        password_reset::password_reset,
    ),
    components(schemas(
        list::ListCooksResponse,
        list::CookSummary,
        detail::CookResponse,
        detail::FavoriteDish,
        create::CreateCookRequest,
        update::UpdateCookRequest,
        password_reset::PasswordResetFormResponse,
        password_reset::PasswordResetRequest,
    ))
)]
pub struct ApiDoc;
