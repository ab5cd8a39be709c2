pub mod activities;
pub mod auth;
pub mod people;

use crate::utils::Config;
use axum::http::{HeaderValue, Method};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

pub type AppState = (PgPool, Config);

/// The uniform success envelope: `{status, message, data}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: "success",
            message: message.to_string(),
            data,
        }
    }
}

pub fn create_router(pool: PgPool, config: Config) -> Router {
    let cors_layer = create_cors_layer(&config);
    let app_state = (pool, config);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/test", get(api_test))
        // Auth
        .route("/api/auth/guest", post(auth::register_guest))
        // People catalog
        .route("/api/people/recommended", get(people::recommended))
        .route("/api/people", get(people::index))
        .route("/api/people/{id}", get(people::show))
        .route("/api/people/{id}/like", post(people::like))
        .route("/api/people/{id}/dislike", post(people::dislike))
        // Activity audit feeds
        .route("/api/people/activities/liked", get(activities::liked))
        .route("/api/people/activities/disliked", get(activities::disliked))
        .route("/api/people/activities/all", get(activities::all))
        .layer(cors_layer)
        .with_state(app_state)
}

fn create_cors_layer(_config: &Config) -> CorsLayer {
    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    // ALLOWED_ORIGINS restricts CORS to a comma-separated origin list
    if let Ok(cors_origins) = std::env::var("ALLOWED_ORIGINS") {
        let origins: Vec<HeaderValue> = cors_origins
            .split(',')
            .filter_map(|origin| {
                let trimmed = origin.trim();
                if !trimmed.is_empty() {
                    trimmed.parse().ok()
                } else {
                    None
                }
            })
            .collect();

        if !origins.is_empty() {
            cors = cors.allow_origin(origins);
        } else {
            cors = cors.allow_origin(Any);
        }
    } else {
        // Default to permissive for development
        cors = cors.allow_origin(Any);
    }

    cors
}

async fn health_check() -> &'static str {
    "OK"
}

async fn api_test(
    State((pool, _config)): State<AppState>,
) -> Result<Json<serde_json::Value>, crate::error::ApiError> {
    let people_count = crate::db::people::count_people(&pool).await?;

    Ok(Json(serde_json::json!({
        "message": "API is working!",
        "timestamp": Utc::now(),
        "people_count": people_count,
    })))
}
