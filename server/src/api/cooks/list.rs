use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::pagination::{Page, PageMeta, COOK_PAGE_SIZE};
use crate::policy::{require, Action};
use crate::raw_sql;
use crate::schema::cooks;
use crate::search::like_pattern;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCooksParams {
    /// Case-insensitive substring matched against username, first name,
    /// or last name
    pub username: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CookSummary {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub years_of_experience: i32,
    /// Number of dishes the cook has favorited
    pub dish_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListCooksResponse {
    pub cooks: Vec<CookSummary>,
    pub pagination: PageMeta,
}

#[utoipa::path(
    get,
    path = "/cooks/",
    tag = "cooks",
    params(ListCooksParams),
    responses(
        (status = 200, description = "Paginated cooks matching the filter", body = ListCooksResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_cooks(
    session: AuthSession,
    State(pool): State<AppState>,
    Query(params): Query<ListCooksParams>,
) -> Result<Json<ListCooksResponse>, ApiError> {
    require(&session.cook, Action::ReadCatalog)?;

    let page = Page::new(params.page, COOK_PAGE_SIZE);
    let mut conn = pool.get()?;

    let mut query = cooks::table.into_boxed();
    if let Some(pattern) = like_pattern(params.username.as_deref()) {
        query = query.filter(
            cooks::username
                .ilike(pattern.clone())
                .or(cooks::first_name.ilike(pattern.clone()))
                .or(cooks::last_name.ilike(pattern)),
        );
    }

    let rows: Vec<(Uuid, String, String, String, bool, i32, i64, i64)> = query
        .order(cooks::username.asc())
        .select((
            cooks::id,
            cooks::username,
            cooks::first_name,
            cooks::last_name,
            cooks::is_staff,
            cooks::years_of_experience,
            raw_sql::favorites_per_cook(),
            raw_sql::count_over(),
        ))
        .limit(page.limit())
        .offset(page.offset())
        .load(&mut conn)?;

    let total = rows.first().map(|r| r.7).unwrap_or(0);
    let cooks = rows
        .into_iter()
        .map(
            |(id, username, first_name, last_name, is_staff, years_of_experience, dish_count, _)| {
                CookSummary {
                    id,
                    username,
                    first_name,
                    last_name,
                    is_staff,
                    years_of_experience,
                    dish_count,
                }
            },
        )
        .collect();

    Ok(Json(ListCooksResponse {
        cooks,
        pagination: PageMeta::new(page, total),
    }))
}
