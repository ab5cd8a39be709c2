use crate::models::{NewPerson, Person, PersonLikeCount, PersonWithCounts};
use crate::utils::pagination::PageParams;
use anyhow::Result;
use sqlx::PgPool;

/// Ordering applied to a people listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeopleOrder {
    /// Most recently created first ("recommended" feed).
    RecentFirst,
    /// Plain primary-key order for generic enumeration.
    Unordered,
}

const PEOPLE_WITH_COUNTS: &str = r#"
    SELECT p.id, p.name, p.age, p.location, p.image_url,
           COUNT(a.id) FILTER (WHERE a.action_type = 'like') AS likes_count,
           COUNT(a.id) FILTER (WHERE a.action_type = 'dislike') AS dislikes_count,
           p.created_at, p.updated_at
    FROM people p
    LEFT JOIN person_activities a ON a.person_id = p.id
"#;

pub async fn create_person(pool: &PgPool, new_person: &NewPerson) -> Result<Person> {
    let person = sqlx::query_as::<_, Person>(
        r#"
        INSERT INTO people (name, age, location, image_url)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, age, location, image_url, created_at, updated_at
        "#,
    )
    .bind(&new_person.name)
    .bind(new_person.age)
    .bind(&new_person.location)
    .bind(&new_person.image_url)
    .fetch_one(pool)
    .await?;

    Ok(person)
}

pub async fn count_people(pool: &PgPool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM people")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// One page of people, each carrying derived like/dislike counts.
pub async fn list_people(
    pool: &PgPool,
    params: PageParams,
    order: PeopleOrder,
) -> Result<Vec<PersonWithCounts>> {
    let order_clause = match order {
        PeopleOrder::RecentFirst => "ORDER BY p.created_at DESC, p.id DESC",
        PeopleOrder::Unordered => "ORDER BY p.id ASC",
    };

    let query = format!(
        "{PEOPLE_WITH_COUNTS} GROUP BY p.id {order_clause} LIMIT $1 OFFSET $2"
    );

    let people = sqlx::query_as::<_, PersonWithCounts>(&query)
        .bind(params.per_page)
        .bind(params.offset())
        .fetch_all(pool)
        .await?;

    Ok(people)
}

pub async fn get_person(pool: &PgPool, person_id: i64) -> Result<Option<PersonWithCounts>> {
    let query = format!("{PEOPLE_WITH_COUNTS} WHERE p.id = $1 GROUP BY p.id");

    let person = sqlx::query_as::<_, PersonWithCounts>(&query)
        .bind(person_id)
        .fetch_optional(pool)
        .await?;

    Ok(person)
}

/// Like tallies for every person, for the popularity check. Dislikes are
/// deliberately excluded from the count.
pub async fn like_counts(pool: &PgPool) -> Result<Vec<PersonLikeCount>> {
    let rows = sqlx::query_as::<_, PersonLikeCount>(
        r#"
        SELECT p.id, p.name, p.age, p.location,
               COUNT(a.id) FILTER (WHERE a.action_type = 'like') AS likes_count
        FROM people p
        LEFT JOIN person_activities a ON a.person_id = p.id
        GROUP BY p.id
        ORDER BY p.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
