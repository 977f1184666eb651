use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::Suggestion;
use crate::pagination::{Page, PageMeta, SUGGESTION_PAGE_SIZE};
use crate::policy::{require, suggestion_author_scope, Action};
use crate::raw_sql;
use crate::schema::{cooks, dishes, suggestions};
use crate::search::like_pattern;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListSuggestionsParams {
    /// Case-insensitive substring filter on the related dish's name
    pub dish_name: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestionSummary {
    pub id: Uuid,
    pub text: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub cook_username: String,
    pub dish_name: String,
}

impl fmt::Display for SuggestionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Suggestion by {} on {}",
            self.cook_username, self.dish_name
        )
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListSuggestionsResponse {
    pub suggestions: Vec<SuggestionSummary>,
    pub pagination: PageMeta,
}

/// Staff sees every suggestion; everyone else only their own. Unapproved
/// suggestions sort first, newest first within each group.
#[utoipa::path(
    get,
    path = "/suggestions/",
    tag = "suggestions",
    params(ListSuggestionsParams),
    responses(
        (status = 200, description = "Paginated suggestions visible to the requester", body = ListSuggestionsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_suggestions(
    session: AuthSession,
    State(pool): State<AppState>,
    Query(params): Query<ListSuggestionsParams>,
) -> Result<Json<ListSuggestionsResponse>, ApiError> {
    require(&session.cook, Action::CreateSuggestion)?;

    let page = Page::new(params.page, SUGGESTION_PAGE_SIZE);
    let mut conn = pool.get()?;

    let mut query = suggestions::table
        .inner_join(cooks::table)
        .inner_join(dishes::table)
        .into_boxed();

    if let Some(author) = suggestion_author_scope(&session.cook) {
        query = query.filter(suggestions::cook_id.eq(author));
    }
    if let Some(pattern) = like_pattern(params.dish_name.as_deref()) {
        query = query.filter(dishes::name.ilike(pattern));
    }

    let rows: Vec<(Suggestion, String, String, i64)> = query
        .order((
            suggestions::approved.asc(),
            suggestions::created_at.desc(),
        ))
        .select((
            Suggestion::as_select(),
            cooks::username,
            dishes::name,
            raw_sql::count_over(),
        ))
        .limit(page.limit())
        .offset(page.offset())
        .load(&mut conn)?;

    let total = rows.first().map(|r| r.3).unwrap_or(0);
    let suggestions = rows
        .into_iter()
        .map(|(suggestion, cook_username, dish_name, _)| SuggestionSummary {
            id: suggestion.id,
            text: suggestion.text,
            approved: suggestion.approved,
            created_at: suggestion.created_at,
            cook_username,
            dish_name,
        })
        .collect();

    Ok(Json(ListSuggestionsResponse {
        suggestions,
        pagination: PageMeta::new(page, total),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(cook_username: &str, dish_name: &str) -> SuggestionSummary {
        SuggestionSummary {
            id: Uuid::new_v4(),
            text: "More salt".to_string(),
            approved: false,
            created_at: Utc::now(),
            cook_username: cook_username.to_string(),
            dish_name: dish_name.to_string(),
        }
    }

    #[test]
    fn test_display_names_cook_and_dish() {
        assert_eq!(
            summary("ann", "Pizza").to_string(),
            "Suggestion by ann on Pizza"
        );
    }

    #[test]
    fn test_list_order_puts_unapproved_first_then_newest() {
        // The query orders by (approved ASC, created_at DESC); the same
        // comparison over the orderable tuple must rank an unapproved
        // suggestion before an approved one, and a newer one before an
        // older one within a group.
        let earlier = Utc::now();
        let later = earlier + chrono::Duration::seconds(10);

        let mut entries = vec![
            (true, later, "approved-new"),
            (false, earlier, "pending-old"),
            (true, earlier, "approved-old"),
            (false, later, "pending-new"),
        ];
        entries.sort_by_key(|&(approved, created_at, _)| (approved, std::cmp::Reverse(created_at)));

        let order: Vec<_> = entries.iter().map(|e| e.2).collect();
        assert_eq!(
            order,
            vec!["pending-new", "pending-old", "approved-new", "approved-old"]
        );
    }
}
