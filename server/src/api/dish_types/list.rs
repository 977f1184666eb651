use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::pagination::{Page, PageMeta, DISH_TYPE_PAGE_SIZE};
use crate::policy::{require, Action};
use crate::raw_sql;
use crate::schema::dish_types;
use crate::search::like_pattern;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListDishTypesParams {
    /// Case-insensitive substring filter on the dish type name
    pub name: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DishTypeSummary {
    pub id: Uuid,
    pub name: String,
    /// Number of dishes of this type
    pub dish_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListDishTypesResponse {
    pub dish_types: Vec<DishTypeSummary>,
    pub pagination: PageMeta,
}

#[utoipa::path(
    get,
    path = "/dish_types/",
    tag = "dish_types",
    params(ListDishTypesParams),
    responses(
        (status = 200, description = "Paginated dish types matching the filter", body = ListDishTypesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_dish_types(
    session: AuthSession,
    State(pool): State<AppState>,
    Query(params): Query<ListDishTypesParams>,
) -> Result<Json<ListDishTypesResponse>, ApiError> {
    require(&session.cook, Action::ReadCatalog)?;

    let page = Page::new(params.page, DISH_TYPE_PAGE_SIZE);
    let mut conn = pool.get()?;

    let mut query = dish_types::table.into_boxed();
    if let Some(pattern) = like_pattern(params.name.as_deref()) {
        query = query.filter(dish_types::name.ilike(pattern));
    }

    let rows: Vec<(Uuid, String, i64, i64)> = query
        .order(dish_types::name.asc())
        .select((
            dish_types::id,
            dish_types::name,
            raw_sql::dishes_per_type(),
            raw_sql::count_over(),
        ))
        .limit(page.limit())
        .offset(page.offset())
        .load(&mut conn)?;

    let total = rows.first().map(|r| r.3).unwrap_or(0);
    let dish_types = rows
        .into_iter()
        .map(|(id, name, dish_count, _)| DishTypeSummary {
            id,
            name,
            dish_count,
        })
        .collect();

    Ok(Json(ListDishTypesResponse {
        dish_types,
        pagination: PageMeta::new(page, total),
    }))
}
