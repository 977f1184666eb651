pub mod approve;
pub mod create;
pub mod detail;
pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for suggestion endpoints (mounted at /suggestions)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_suggestions))
        .route(
            "/{id}/create/",
            get(create::suggestion_form).post(create::create_suggestion),
        )
        .route("/{id}/", get(detail::suggestion_detail))
        .route(
            "/{id}/approve/",
            get(approve::approve_suggestion).post(approve::approve_suggestion),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_suggestions,
        detail::suggestion_detail,
        create::suggestion_form,
        create::create_suggestion,
        approve::approve_suggestion,
    ),
    components(schemas(
        list::ListSuggestionsResponse,
        list::SuggestionSummary,
        create::SuggestionFormResponse,
        create::CreateSuggestionRequest,
    ))
)]
pub struct ApiDoc;
