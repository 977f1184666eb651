use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::pagination::{Page, PageMeta, INGREDIENT_PAGE_SIZE};
use crate::policy::{require, Action};
use crate::raw_sql;
use crate::schema::ingredients;
use crate::search::like_pattern;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListIngredientsParams {
    /// Case-insensitive substring filter on the ingredient name
    pub name: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientSummary {
    pub id: Uuid,
    pub name: String,
    /// Number of dishes using this ingredient
    pub dish_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListIngredientsResponse {
    pub ingredients: Vec<IngredientSummary>,
    pub pagination: PageMeta,
}

#[utoipa::path(
    get,
    path = "/ingredients/",
    tag = "ingredients",
    params(ListIngredientsParams),
    responses(
        (status = 200, description = "Paginated ingredients matching the filter", body = ListIngredientsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_ingredients(
    session: AuthSession,
    State(pool): State<AppState>,
    Query(params): Query<ListIngredientsParams>,
) -> Result<Json<ListIngredientsResponse>, ApiError> {
    require(&session.cook, Action::ReadCatalog)?;

    let page = Page::new(params.page, INGREDIENT_PAGE_SIZE);
    let mut conn = pool.get()?;

    let mut query = ingredients::table.into_boxed();
    if let Some(pattern) = like_pattern(params.name.as_deref()) {
        query = query.filter(ingredients::name.ilike(pattern));
    }

    let rows: Vec<(Uuid, String, i64, i64)> = query
        .order(ingredients::name.asc())
        .select((
            ingredients::id,
            ingredients::name,
            raw_sql::dishes_per_ingredient(),
            raw_sql::count_over(),
        ))
        .limit(page.limit())
        .offset(page.offset())
        .load(&mut conn)?;

    let total = rows.first().map(|r| r.3).unwrap_or(0);
    let ingredients = rows
        .into_iter()
        .map(|(id, name, dish_count, _)| IngredientSummary {
            id,
            name,
            dish_count,
        })
        .collect();

    Ok(Json(ListIngredientsResponse {
        ingredients,
        pagination: PageMeta::new(page, total),
    }))
}
