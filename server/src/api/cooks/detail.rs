use crate::api::{ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::Cook;
use crate::policy::{require, Action};
use crate::schema::{cooks, dish_cooks, dish_types, dishes};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteDish {
    pub id: Uuid,
    pub name: String,
    pub dish_type: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CookResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_staff: bool,
    pub years_of_experience: i32,
    pub favorite_dishes: Vec<FavoriteDish>,
}

#[utoipa::path(
    get,
    path = "/cooks/{id}/",
    tag = "cooks",
    params(("id" = Uuid, Path, description = "Cook ID")),
    responses(
        (status = 200, description = "Cook profile with favorite dishes", body = CookResponse),
        (status = 404, description = "Cook not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn cook_detail(
    session: AuthSession,
    State(pool): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CookResponse>, ApiError> {
    require(&session.cook, Action::ReadCatalog)?;

    let mut conn = pool.get()?;

    let cook: Cook = cooks::table
        .find(id)
        .select(Cook::as_select())
        .first(&mut conn)
        .optional()?
        .ok_or(ApiError::NotFound("Cook"))?;

    let favorite_dishes: Vec<(Uuid, String, String)> = dish_cooks::table
        .inner_join(dishes::table.inner_join(dish_types::table))
        .filter(dish_cooks::cook_id.eq(id))
        .select((dishes::id, dishes::name, dish_types::name))
        .order(dishes::name.asc())
        .load(&mut conn)?;

    Ok(Json(CookResponse {
        id: cook.id,
        username: cook.username,
        first_name: cook.first_name,
        last_name: cook.last_name,
        email: cook.email,
        is_staff: cook.is_staff,
        years_of_experience: cook.years_of_experience,
        favorite_dishes: favorite_dishes
            .into_iter()
            .map(|(id, name, dish_type)| FavoriteDish {
                id,
                name,
                dish_type,
            })
            .collect(),
    }))
}
