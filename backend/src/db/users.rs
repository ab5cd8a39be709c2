use crate::models::User;
use anyhow::Result;
use sqlx::PgPool;

/// Registers a guest actor: no email, auto-generated name, opaque token.
pub async fn create_guest(pool: &PgPool, name: &str, api_token: &str) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, api_token)
        VALUES ($1, NULL, $2)
        RETURNING id, name, email, api_token, created_at
        "#,
    )
    .bind(name)
    .bind(api_token)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_token(pool: &PgPool, api_token: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, api_token, created_at
        FROM users
        WHERE api_token = $1
        "#,
    )
    .bind(api_token)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
