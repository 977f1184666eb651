use crate::db::DbPool;
use crate::models::{Cook, NewSession};
use crate::schema::{cooks, sessions};
use chrono::{Duration, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::crypto::{generate_token, hash_token};

const SESSION_TTL_DAYS: i64 = 30;

/// Create a session row for the cook and return the raw token. Only the
/// sha-256 digest of the token is persisted.
pub fn create_session(
    conn: &mut PgConnection,
    cook_id: Uuid,
) -> Result<String, diesel::result::Error> {
    let token = generate_token();
    let token_hash = hash_token(&token);

    let new_session = NewSession {
        cook_id,
        token_hash: &token_hash,
        expires_at: Utc::now() + Duration::days(SESSION_TTL_DAYS),
    };

    diesel::insert_into(sessions::table)
        .values(&new_session)
        .execute(conn)?;

    Ok(token)
}

/// Resolve a raw token to its unexpired session and cook.
pub async fn get_session_cook(pool: &DbPool, token: &str) -> Option<(Uuid, Cook)> {
    let mut conn = pool.get().ok()?;
    let token_hash = hash_token(token);

    sessions::table
        .inner_join(cooks::table)
        .filter(sessions::token_hash.eq(&token_hash))
        .filter(sessions::expires_at.gt(Utc::now()))
        .select((sessions::id, Cook::as_select()))
        .first(&mut conn)
        .ok()
}

pub fn delete_session(
    conn: &mut PgConnection,
    session_id: Uuid,
) -> Result<usize, diesel::result::Error> {
    diesel::delete(sessions::table.find(session_id)).execute(conn)
}

/// Bump and return the session's dashboard visit counter. The counter lives
/// on the session row, not in process state.
pub fn record_visit(
    conn: &mut PgConnection,
    session_id: Uuid,
) -> Result<i32, diesel::result::Error> {
    diesel::update(sessions::table.find(session_id))
        .set(sessions::visit_count.eq(sessions::visit_count + 1))
        .returning(sessions::visit_count)
        .get_result(conn)
}
