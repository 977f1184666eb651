use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::fmt;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::cooks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Cook {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub years_of_experience: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cooks)]
pub struct NewCook<'a> {
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub is_staff: bool,
    pub years_of_experience: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::dish_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DishType {
    pub id: Uuid,
    pub name: String,
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dish_types)]
pub struct NewDishType<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredient<'a> {
    pub name: &'a str,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::dishes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub dish_type_id: Uuid,
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dishes)]
pub struct NewDish<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: &'a BigDecimal,
    pub dish_type_id: Uuid,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::suggestions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Suggestion {
    pub id: Uuid,
    pub cook_id: Uuid,
    pub dish_id: Uuid,
    pub text: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::suggestions)]
pub struct NewSuggestion<'a> {
    pub cook_id: Uuid,
    pub dish_id: Uuid,
    pub text: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Session {
    pub id: Uuid,
    pub cook_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub visit_count: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub cook_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::FromPrimitive;

    #[test]
    fn test_catalog_entities_display_as_their_name() {
        let dish_type = DishType {
            id: Uuid::new_v4(),
            name: "Dessert".to_string(),
        };
        assert_eq!(dish_type.to_string(), "Dessert");

        let ingredient = Ingredient {
            id: Uuid::new_v4(),
            name: "Tomato".to_string(),
        };
        assert_eq!(ingredient.to_string(), "Tomato");

        let dish = Dish {
            id: Uuid::new_v4(),
            name: "Cake".to_string(),
            description: "Chocolate cake".to_string(),
            price: BigDecimal::from_f64(5.00).unwrap(),
            dish_type_id: dish_type.id,
        };
        assert_eq!(dish.to_string(), "Cake");
    }
}
