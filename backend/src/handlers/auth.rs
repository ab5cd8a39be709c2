use super::{AppState, Envelope};
use crate::db;
use crate::error::ApiError;
use crate::utils::token::{generate_api_token, generate_guest_name};
use axum::http::{header, HeaderMap, StatusCode};
use axum::{extract::State, response::Json};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize)]
pub struct GuestUser {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GuestData {
    pub user: GuestUser,
    pub token: String,
}

/// POST /api/auth/guest — creates a guest actor and issues its bearer token.
pub async fn register_guest(
    State((pool, _config)): State<AppState>,
) -> Result<(StatusCode, Json<Envelope<GuestData>>), ApiError> {
    let name = generate_guest_name();
    let token = generate_api_token();

    let user = db::users::create_guest(&pool, &name, &token).await?;
    tracing::info!(user_id = user.id, "registered guest user");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(
            "Guest user created successfully",
            GuestData {
                user: GuestUser {
                    id: user.id,
                    name: user.name,
                },
                token,
            },
        )),
    ))
}

/// Pulls the token out of an `Authorization: Bearer ...` header, if any.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the acting user from the request headers. Absent or unknown
/// tokens resolve to None: the action is then recorded unattributed.
pub(crate) async fn current_user_id(
    pool: &PgPool,
    headers: &HeaderMap,
) -> Result<Option<i64>, ApiError> {
    let Some(token) = bearer_token(headers) else {
        return Ok(None);
    };

    let user = db::users::get_user_by_token(pool, token).await?;
    Ok(user.map(|u| u.id))
}
