use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered or guest actor. Guests carry no email and are identified
/// by the opaque api_token issued at registration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    #[serde(skip_serializing, default)]
    pub api_token: Option<String>,
    pub created_at: DateTime<Utc>,
}
