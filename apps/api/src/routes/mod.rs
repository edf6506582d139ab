pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::conversations::handlers as conversations;
use crate::mentors::handlers as mentors;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches", post(mentors::handle_find_matches))
        .route(
            "/api/v1/matches/preview",
            post(mentors::handle_preview_matches),
        )
        .route("/api/v1/roles", get(mentors::handle_list_roles))
        // Conversations API
        .route(
            "/api/v1/conversations",
            post(conversations::handle_start_conversation),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::matching::scorer::{DisplayPolicy, WeightedOverlapScorer};

    // The pool never connects: these routes do not reach the database.
    fn test_state(display_policy: DisplayPolicy) -> AppState {
        let db = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/mentor_match_test")
            .unwrap();
        AppState {
            db,
            config: Config {
                database_url: "postgres://localhost/mentor_match_test".to_string(),
                database_max_connections: 1,
                port: 0,
                rust_log: "debug".to_string(),
                display_policy,
                role_groups: None,
            },
            scorer: Arc::new(WeightedOverlapScorer::default()),
        }
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn preview_body() -> Value {
        json!({
            "criteria": {
                "skills": "java, sql",
                "target_role": "Software Engineer",
                "target_companies": "google"
            },
            "candidates": [
                {
                    "id": Uuid::new_v4(),
                    "skills": ["Figma"],
                    "title": "Product Designer",
                    "company": "Flipkart",
                    "years_of_experience": 9
                },
                {
                    "id": Uuid::new_v4(),
                    "name": "Priya Sharma",
                    "skills": ["Java", "Python", "System Design"],
                    "title": "Software Engineer",
                    "company": "Google",
                    "years_of_experience": 5
                },
                {
                    "id": Uuid::new_v4(),
                    "skills": ["Java", "SQL"],
                    "title": "Software Engineer",
                    "company": "Google",
                    "years_of_experience": 12,
                    "availability": false
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state(DisplayPolicy::FixedCap));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_preview_ranks_and_excludes_unavailable() {
        let router = build_router(test_state(DisplayPolicy::FixedCap));
        let (status, body) = post_json(router, "/api/v1/matches/preview", preview_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy"], "fixed_cap");
        assert_eq!(body["scorer_backend"], "weighted_overlap");

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["candidate"]["name"], "Priya Sharma");
        assert_eq!(results[0]["raw_score"], 10);
        assert_eq!(results[0]["display_percentage"], 56);
        assert_eq!(results[0]["skill_matches"], json!(["Java"]));
        assert_eq!(results[1]["raw_score"], 0);
        assert_eq!(
            results[1]["explanation"],
            "Matched based on general profile relevance (9+ years of experience)"
        );
    }

    #[tokio::test]
    async fn test_preview_rank_relative_policy() {
        let router = build_router(test_state(DisplayPolicy::RankRelative));
        let (status, body) = post_json(router, "/api/v1/matches/preview", preview_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy"], "rank_relative");
        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["display_percentage"], 85);
        // 15 + (0 + 0.15 * 1/2) * 70 = 20.25
        assert_eq!(results[1]["display_percentage"], 20);
    }

    #[tokio::test]
    async fn test_preview_rejects_oversized_batch() {
        let router = build_router(test_state(DisplayPolicy::FixedCap));
        let candidates: Vec<Value> = (0..=mentors::MAX_PREVIEW_CANDIDATES)
            .map(|_| json!({ "id": Uuid::new_v4() }))
            .collect();
        let body = json!({ "criteria": {}, "candidates": candidates });

        let (status, body) = post_json(router, "/api/v1/matches/preview", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_conversation_with_self_rejected_before_db() {
        let router = build_router(test_state(DisplayPolicy::FixedCap));
        let id = Uuid::new_v4();
        let (status, body) = post_json(
            router,
            "/api/v1/conversations",
            json!({ "student_id": id, "mentor_id": id }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
