use crate::models::{ActionType, Activity, ActivityWithPerson};
use crate::utils::pagination::PageParams;
use anyhow::Result;
use sqlx::PgPool;

/// Appends one immutable activity. The caller is responsible for having
/// checked that `person_id` exists; the actor is passed explicitly and is
/// None for unauthenticated requests.
pub async fn record_activity(
    pool: &PgPool,
    person_id: i64,
    user_id: Option<i64>,
    action: ActionType,
) -> Result<Activity> {
    let activity = sqlx::query_as::<_, Activity>(
        r#"
        INSERT INTO person_activities (user_id, person_id, action_type)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, person_id, action_type, action_at
        "#,
    )
    .bind(user_id)
    .bind(person_id)
    .bind(action.as_str())
    .fetch_one(pool)
    .await?;

    Ok(activity)
}

/// Canonical definition of likes_count / dislikes_count: the number of
/// matching rows in the activity log.
pub async fn count_by_type(pool: &PgPool, person_id: i64, action: ActionType) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM person_activities
        WHERE person_id = $1 AND action_type = $2
        "#,
    )
    .bind(person_id)
    .bind(action.as_str())
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn count_activities(pool: &PgPool, filter: Option<ActionType>) -> Result<i64> {
    let count = match filter {
        Some(action) => {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM person_activities WHERE action_type = $1",
            )
            .bind(action.as_str())
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM person_activities")
                .fetch_one(pool)
                .await?
        }
    };

    Ok(count)
}

/// One page of activities joined with the person they target, newest
/// first. With `filter` set, only that action type is returned.
pub async fn list_activities(
    pool: &PgPool,
    filter: Option<ActionType>,
    params: PageParams,
) -> Result<Vec<ActivityWithPerson>> {
    let base = r#"
        SELECT a.id AS activity_id, p.id AS person_id, p.name, p.age,
               p.location, p.image_url, a.action_type, a.action_at
        FROM person_activities a
        JOIN people p ON p.id = a.person_id
    "#;

    let activities = match filter {
        Some(action) => {
            let query = format!(
                "{base} WHERE a.action_type = $1 ORDER BY a.action_at DESC, a.id DESC LIMIT $2 OFFSET $3"
            );
            sqlx::query_as::<_, ActivityWithPerson>(&query)
                .bind(action.as_str())
                .bind(params.per_page)
                .bind(params.offset())
                .fetch_all(pool)
                .await?
        }
        None => {
            let query = format!(
                "{base} ORDER BY a.action_at DESC, a.id DESC LIMIT $1 OFFSET $2"
            );
            sqlx::query_as::<_, ActivityWithPerson>(&query)
                .bind(params.per_page)
                .bind(params.offset())
                .fetch_all(pool)
                .await?
        }
    };

    Ok(activities)
}
