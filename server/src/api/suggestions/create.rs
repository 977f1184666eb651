use super::list::SuggestionSummary;
use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::{NewSuggestion, Suggestion};
use crate::policy::{require, Action};
use crate::schema::{dishes, suggestions};
use crate::validate::non_empty;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestionFormResponse {
    pub dish_id: Uuid,
    pub dish_name: String,
}

/// The form context for suggesting against a dish.
#[utoipa::path(
    get,
    path = "/suggestions/{dish_id}/create/",
    tag = "suggestions",
    params(("dish_id" = Uuid, Path, description = "Dish ID")),
    responses(
        (status = 200, description = "Suggestion form context", body = SuggestionFormResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn suggestion_form(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(dish_id): Path<Uuid>,
) -> Result<Json<SuggestionFormResponse>, ApiError> {
    require(&session.cook, Action::CreateSuggestion)?;

    let mut conn = pool.get()?;

    let dish_name: String = dishes::table
        .find(dish_id)
        .select(dishes::name)
        .first(&mut conn)
        .optional()?
        .ok_or(ApiError::NotFound("Dish"))?;

    Ok(Json(SuggestionFormResponse { dish_id, dish_name }))
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSuggestionRequest {
    pub text: String,
}

/// The author and dish are bound from the request context; text is the only
/// user-supplied field.
#[utoipa::path(
    post,
    path = "/suggestions/{dish_id}/create/",
    tag = "suggestions",
    params(("dish_id" = Uuid, Path, description = "Dish ID")),
    request_body = CreateSuggestionRequest,
    responses(
        (status = 302, description = "Suggestion submitted, redirect to the suggestion list"),
        (status = 400, description = "Empty text", body = ErrorResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn create_suggestion(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(dish_id): Path<Uuid>,
    Json(request): Json<CreateSuggestionRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::CreateSuggestion)?;

    let text = non_empty("text", &request.text)?;

    let mut conn = pool.get()?;

    let dish_name: String = dishes::table
        .find(dish_id)
        .select(dishes::name)
        .first(&mut conn)
        .optional()?
        .ok_or(ApiError::NotFound("Dish"))?;

    let suggestion: Suggestion = diesel::insert_into(suggestions::table)
        .values(&NewSuggestion {
            cook_id: session.cook.id,
            dish_id,
            text: &text,
        })
        .returning(Suggestion::as_returning())
        .get_result(&mut conn)?;

    let summary = SuggestionSummary {
        id: suggestion.id,
        text: suggestion.text,
        approved: suggestion.approved,
        created_at: suggestion.created_at,
        cook_username: session.cook.username.clone(),
        dish_name,
    };
    tracing::info!("created {}", summary);

    Ok(redirect("/suggestions/"))
}
