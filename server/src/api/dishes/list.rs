use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::pagination::{Page, PageMeta, DISH_PAGE_SIZE};
use crate::policy::{require, Action};
use crate::raw_sql;
use crate::schema::{dish_types, dishes};
use crate::search::like_pattern;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListDishesParams {
    /// Case-insensitive substring filter on the dish name
    pub name: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DishSummary {
    pub id: Uuid,
    pub name: String,
    /// Decimal string, e.g. "12.50"
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub dish_type: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListDishesResponse {
    pub dishes: Vec<DishSummary>,
    pub pagination: PageMeta,
}

#[utoipa::path(
    get,
    path = "/dishes/",
    tag = "dishes",
    params(ListDishesParams),
    responses(
        (status = 200, description = "Paginated dishes matching the filter", body = ListDishesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn list_dishes(
    session: AuthSession,
    State(pool): State<AppState>,
    Query(params): Query<ListDishesParams>,
) -> Result<Json<ListDishesResponse>, ApiError> {
    require(&session.cook, Action::ReadCatalog)?;

    let page = Page::new(params.page, DISH_PAGE_SIZE);
    let mut conn = pool.get()?;

    let mut query = dishes::table.inner_join(dish_types::table).into_boxed();
    if let Some(pattern) = like_pattern(params.name.as_deref()) {
        query = query.filter(dishes::name.ilike(pattern));
    }

    let rows: Vec<(Uuid, String, BigDecimal, String, i64)> = query
        .order(dishes::name.asc())
        .select((
            dishes::id,
            dishes::name,
            dishes::price,
            dish_types::name,
            raw_sql::count_over(),
        ))
        .limit(page.limit())
        .offset(page.offset())
        .load(&mut conn)?;

    let total = rows.first().map(|r| r.4).unwrap_or(0);
    let dishes = rows
        .into_iter()
        .map(|(id, name, price, dish_type, _)| DishSummary {
            id,
            name,
            price,
            dish_type,
        })
        .collect();

    Ok(Json(ListDishesResponse {
        dishes,
        pagination: PageMeta::new(page, total),
    }))
}
