use crate::api::ApiError;
use crate::auth::{delete_session, AuthSession, SESSION_COOKIE};
use crate::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

#[utoipa::path(
    post,
    path = "/logout",
    tag = "session",
    responses(
        (status = 302, description = "Session deleted, cookie cleared, redirect to the login view")
    ),
    security(("session_cookie" = []))
)]
pub async fn logout(
    session: AuthSession,
    State(pool): State<AppState>,
) -> Result<Response, ApiError> {
    let mut conn = pool.get()?;
    delete_session(&mut conn, session.session_id)?;

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");

    Ok((
        StatusCode::FOUND,
        [
            (header::SET_COOKIE, cookie),
            (header::LOCATION, "/login".to_string()),
        ],
    )
        .into_response())
}
