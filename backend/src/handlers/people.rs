use super::{auth, AppState, Envelope};
use crate::db;
use crate::db::people::PeopleOrder;
use crate::error::ApiError;
use crate::models::{ActionType, PersonWithCounts};
use crate::utils::pagination::{PageParams, PageQuery, Pagination};
use axum::http::HeaderMap;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Serialize)]
pub struct PeopleData {
    pub people: Vec<PersonWithCounts>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct ReactionData {
    pub person_id: i64,
    pub name: String,
    pub likes_count: i64,
    pub dislikes_count: i64,
}

/// GET /api/people/recommended — recency-ordered catalog.
pub async fn recommended(
    State((pool, _config)): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Envelope<PeopleData>>, ApiError> {
    list_page(
        &pool,
        query,
        PeopleOrder::RecentFirst,
        "/api/people/recommended",
        "Recommended people retrieved successfully",
    )
    .await
}

/// GET /api/people — plain catalog in primary-key order.
pub async fn index(
    State((pool, _config)): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Envelope<PeopleData>>, ApiError> {
    list_page(
        &pool,
        query,
        PeopleOrder::Unordered,
        "/api/people",
        "People retrieved successfully",
    )
    .await
}

async fn list_page(
    pool: &PgPool,
    query: PageQuery,
    order: PeopleOrder,
    path: &str,
    message: &str,
) -> Result<Json<Envelope<PeopleData>>, ApiError> {
    let params = PageParams::from_query(&query);
    let total = db::people::count_people(pool).await?;
    let people = db::people::list_people(pool, params, order).await?;

    Ok(Json(Envelope::success(
        message,
        PeopleData {
            people,
            pagination: Pagination::new(params, total, path),
        },
    )))
}

/// GET /api/people/{id} — single profile with derived counts.
pub async fn show(
    State((pool, _config)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope<PersonWithCounts>>, ApiError> {
    let person = db::people::get_person(&pool, id)
        .await?
        .ok_or(ApiError::PersonNotFound)?;

    Ok(Json(Envelope::success(
        "Person retrieved successfully",
        person,
    )))
}

/// POST /api/people/{id}/like
pub async fn like(
    State((pool, _config)): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Envelope<ReactionData>>, ApiError> {
    react(&pool, id, &headers, ActionType::Like).await
}

/// POST /api/people/{id}/dislike
pub async fn dislike(
    State((pool, _config)): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Envelope<ReactionData>>, ApiError> {
    react(&pool, id, &headers, ActionType::Dislike).await
}

/// Shared like/dislike path: verify the person exists, append one
/// activity attributed to the current actor (None when unauthenticated),
/// then re-read both counts from the log.
async fn react(
    pool: &PgPool,
    person_id: i64,
    headers: &HeaderMap,
    action: ActionType,
) -> Result<Json<Envelope<ReactionData>>, ApiError> {
    let person = db::people::get_person(pool, person_id)
        .await?
        .ok_or(ApiError::PersonNotFound)?;

    let user_id = auth::current_user_id(pool, headers).await?;
    db::activities::record_activity(pool, person.id, user_id, action).await?;

    let likes_count = db::activities::count_by_type(pool, person.id, ActionType::Like).await?;
    let dislikes_count =
        db::activities::count_by_type(pool, person.id, ActionType::Dislike).await?;

    let message = match action {
        ActionType::Like => "Person liked successfully",
        ActionType::Dislike => "Person disliked successfully",
    };

    Ok(Json(Envelope::success(
        message,
        ReactionData {
            person_id: person.id,
            name: person.name,
            likes_count,
            dislikes_count,
        },
    )))
}
