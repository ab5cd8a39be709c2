use super::AppState;
use crate::db;
use crate::error::ApiError;
use crate::models::{ActionType, ActivityWithPerson};
use crate::utils::pagination::{lenient_i64, ActivityMeta, PageParams, PageQuery};
use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Feed responses carry `meta` alongside `data` at the top level.
#[derive(Debug, Serialize)]
pub struct FeedEnvelope<T> {
    pub status: &'static str,
    pub message: String,
    pub data: Vec<T>,
    pub meta: ActivityMeta,
}

#[derive(Debug, Serialize)]
pub struct LikedRow {
    pub activity_id: i64,
    pub person_id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub photo_url: Option<String>,
    pub liked_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DislikedRow {
    pub activity_id: i64,
    pub person_id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub photo_url: Option<String>,
    pub disliked_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ActivityRow {
    pub activity_id: i64,
    pub person_id: i64,
    pub name: String,
    pub age: i32,
    pub location: String,
    pub photo_url: Option<String>,
    pub action_type: String,
    pub action_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ActivitiesQuery {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub per_page: Option<i64>,
    pub action_type: Option<String>,
}

/// GET /api/people/activities/liked — newest likes first.
pub async fn liked(
    State((pool, _config)): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<FeedEnvelope<LikedRow>>, ApiError> {
    let (rows, meta) = feed_page(&pool, Some(ActionType::Like), query).await?;

    let data = rows
        .into_iter()
        .map(|a| LikedRow {
            activity_id: a.activity_id,
            person_id: a.person_id,
            name: a.name,
            age: a.age,
            location: a.location,
            photo_url: a.image_url,
            liked_at: a.action_at,
        })
        .collect();

    Ok(Json(FeedEnvelope {
        status: "success",
        message: "Liked people retrieved successfully".to_string(),
        data,
        meta,
    }))
}

/// GET /api/people/activities/disliked — newest dislikes first.
pub async fn disliked(
    State((pool, _config)): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<FeedEnvelope<DislikedRow>>, ApiError> {
    let (rows, meta) = feed_page(&pool, Some(ActionType::Dislike), query).await?;

    let data = rows
        .into_iter()
        .map(|a| DislikedRow {
            activity_id: a.activity_id,
            person_id: a.person_id,
            name: a.name,
            age: a.age,
            location: a.location,
            photo_url: a.image_url,
            disliked_at: a.action_at,
        })
        .collect();

    Ok(Json(FeedEnvelope {
        status: "success",
        message: "Disliked people retrieved successfully".to_string(),
        data,
        meta,
    }))
}

/// GET /api/people/activities/all — both action types interleaved, with
/// an optional `action_type` filter. Unknown filter values are ignored.
pub async fn all(
    State((pool, _config)): State<AppState>,
    Query(query): Query<ActivitiesQuery>,
) -> Result<Json<FeedEnvelope<ActivityRow>>, ApiError> {
    let filter = query
        .action_type
        .as_deref()
        .and_then(|s| s.parse::<ActionType>().ok());

    let page_query = PageQuery {
        page: query.page,
        per_page: query.per_page,
    };
    let (rows, meta) = feed_page(&pool, filter, page_query).await?;

    let data = rows
        .into_iter()
        .map(|a| ActivityRow {
            activity_id: a.activity_id,
            person_id: a.person_id,
            name: a.name,
            age: a.age,
            location: a.location,
            photo_url: a.image_url,
            action_type: a.action_type,
            action_at: a.action_at,
        })
        .collect();

    Ok(Json(FeedEnvelope {
        status: "success",
        message: "Activities retrieved successfully".to_string(),
        data,
        meta,
    }))
}

async fn feed_page(
    pool: &PgPool,
    filter: Option<ActionType>,
    query: PageQuery,
) -> Result<(Vec<ActivityWithPerson>, ActivityMeta), ApiError> {
    let params = PageParams::from_query(&query);
    let total = db::activities::count_activities(pool, filter).await?;
    let rows = db::activities::list_activities(pool, filter, params).await?;

    Ok((rows, ActivityMeta::new(params, total)))
}
