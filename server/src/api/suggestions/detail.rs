use super::list::SuggestionSummary;
use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::Suggestion;
use crate::policy::{require, Action};
use crate::schema::{cooks, dishes, suggestions};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use diesel::prelude::*;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/suggestions/{id}/",
    tag = "suggestions",
    params(("id" = Uuid, Path, description = "Suggestion ID")),
    responses(
        (status = 200, description = "Suggestion details", body = SuggestionSummary),
        (status = 403, description = "Neither staff nor the author", body = ErrorResponse),
        (status = 404, description = "Suggestion not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn suggestion_detail(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuggestionSummary>, ApiError> {
    let mut conn = pool.get()?;

    let (suggestion, cook_username, dish_name): (Suggestion, String, String) = suggestions::table
        .inner_join(cooks::table)
        .inner_join(dishes::table)
        .filter(suggestions::id.eq(id))
        .select((Suggestion::as_select(), cooks::username, dishes::name))
        .first(&mut conn)
        .optional()?
        .ok_or(ApiError::NotFound("Suggestion"))?;

    require(
        &session.cook,
        Action::ReadSuggestion {
            author: suggestion.cook_id,
        },
    )?;

    Ok(Json(SuggestionSummary {
        id: suggestion.id,
        text: suggestion.text,
        approved: suggestion.approved,
        created_at: suggestion.created_at,
        cook_username,
        dish_name,
    }))
}
