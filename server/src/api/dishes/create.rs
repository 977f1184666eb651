use crate::api::{redirect, ApiError, ErrorResponse};
use crate::auth::AuthSession;
use crate::models::NewDish;
use crate::policy::{require, Action};
use crate::schema::dishes;
use crate::validate::{non_empty, non_negative_price};
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDishRequest {
    pub name: String,
    pub description: String,
    /// Decimal string, e.g. "12.50"
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub dish_type_id: Uuid,
    /// Ingredients to attach
    #[serde(default)]
    pub ingredient_ids: Vec<Uuid>,
    /// Cooks favoriting the dish from the start
    #[serde(default)]
    pub cook_ids: Vec<Uuid>,
}

#[utoipa::path(
    post,
    path = "/dishes/create/",
    tag = "dishes",
    request_body = CreateDishRequest,
    responses(
        (status = 302, description = "Dish created, redirect to the dish list"),
        (status = 400, description = "Invalid form input", body = ErrorResponse),
        (status = 403, description = "Not staff", body = ErrorResponse),
        (status = 404, description = "Referenced dish type, ingredient, or cook not found", body = ErrorResponse)
    ),
    security(("session_cookie" = []))
)]
pub async fn create_dish(
    session: AuthSession,
    State(pool): State<AppState>,
    Json(request): Json<CreateDishRequest>,
) -> Result<Response, ApiError> {
    require(&session.cook, Action::ManageCatalog)?;

    let name = non_empty("name", &request.name)?;
    let description = non_empty("description", &request.description)?;
    non_negative_price(&request.price)?;

    let mut conn = pool.get()?;

    let dish_id = conn.transaction(|conn| {
        let new_dish = NewDish {
            name: &name,
            description: &description,
            price: &request.price,
            dish_type_id: request.dish_type_id,
        };

        let dish_id: Uuid = diesel::insert_into(dishes::table)
            .values(&new_dish)
            .returning(dishes::id)
            .get_result(conn)?;

        super::replace_relations(conn, dish_id, &request.ingredient_ids, &request.cook_ids)?;

        Ok::<_, diesel::result::Error>(dish_id)
    })?;

    tracing::info!(%dish_id, name = %name, "dish created");

    Ok(redirect("/dishes/"))
}
