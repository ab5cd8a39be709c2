use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A person with like/dislike counts derived from the activity log.
/// The counts are computed on every read; they are never stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PersonWithCounts {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub image_url: Option<String>,
    pub likes_count: i64,
    pub dislikes_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-person like tally used by the popularity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct PersonLikeCount {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub likes_count: i64,
}

#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub age: i32,
    pub location: String,
    pub image_url: Option<String>,
}
