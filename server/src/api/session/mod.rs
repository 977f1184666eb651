pub mod login;
pub mod logout;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the login/logout endpoints (mounted at the root)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login::login_form).post(login::login))
        .route("/logout", post(logout::logout))
}

#[derive(OpenApi)]
#[openapi(
    paths(login::login_form, login::login, logout::logout),
    components(schemas(login::LoginRequest, login::LoginFormResponse))
)]
pub struct ApiDoc;
