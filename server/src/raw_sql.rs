//! Raw SQL fragments that can't be expressed in Diesel's type-safe DSL.
//!
//! Every fragment here is a static string with no user input; anything that
//! takes user data elsewhere in the crate goes through `.bind()`.

use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::sql_types::BigInt;

/// `COUNT(*) OVER()` — total row count of the filtered set, computed before
/// LIMIT/OFFSET. Diesel has no native window-function support, so each list
/// query selects this alongside its page of rows.
pub fn count_over() -> SqlLiteral<BigInt> {
    sql::<BigInt>("COUNT(*) OVER()")
}

/// Number of dishes using an ingredient, correlated to the outer
/// `ingredients` row. Diesel can't express a correlated scalar subquery.
pub fn dishes_per_ingredient() -> SqlLiteral<BigInt> {
    sql::<BigInt>(
        "(SELECT COUNT(*) FROM dish_ingredients \
         WHERE dish_ingredients.ingredient_id = ingredients.id)",
    )
}

/// Number of dishes of a dish type, correlated to the outer `dish_types` row.
pub fn dishes_per_type() -> SqlLiteral<BigInt> {
    sql::<BigInt>("(SELECT COUNT(*) FROM dishes WHERE dishes.dish_type_id = dish_types.id)")
}

/// Number of dishes a cook has favorited, correlated to the outer `cooks` row.
pub fn favorites_per_cook() -> SqlLiteral<BigInt> {
    sql::<BigInt>("(SELECT COUNT(*) FROM dish_cooks WHERE dish_cooks.cook_id = cooks.id)")
}
