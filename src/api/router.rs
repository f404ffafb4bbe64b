use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::courses;
use super::health;
use super::query;
use super::state::AppState;

/// Create the application router
///
/// CORS is intentionally wide open; the API is meant for local /
/// development deployments fronted by the course materials UI.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/api/query", post(query::query_documents))
        .route("/api/courses", get(courses::get_course_stats))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::api::state::mock::MockRagService;
    use crate::infrastructure::services::CourseAnalytics;

    fn app() -> Router {
        app_with(MockRagService::default())
    }

    fn app_with(service: MockRagService) -> Router {
        create_router_with_state(AppState::new(Arc::new(service)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        (status, json)
    }

    fn post_query(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // --- /api/query ---

    #[tokio::test]
    async fn test_query_with_session_id() {
        let (status, data) = send(
            app(),
            post_query(serde_json::json!({
                "query": "What is Python?",
                "session_id": "test-session-123"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["session_id"], "test-session-123");
        assert!(data["answer"].is_string());
        assert!(data["sources"].is_array());
    }

    #[tokio::test]
    async fn test_query_without_session_id_mints_one() {
        let (status, data) = send(
            app(),
            post_query(serde_json::json!({"query": "What is Python?"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["session_id"], "session-123");
    }

    #[tokio::test]
    async fn test_query_empty_session_id_treated_as_absent() {
        let (status, data) = send(
            app(),
            post_query(serde_json::json!({"query": "q", "session_id": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["session_id"], "session-123");
    }

    #[tokio::test]
    async fn test_query_response_structure() {
        let (status, data) = send(
            app(),
            post_query(serde_json::json!({"query": "Tell me about AI"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(!data["answer"].as_str().unwrap().is_empty());

        let sources = data["sources"].as_array().unwrap();
        assert!(!sources.is_empty());
        for source in sources {
            assert!(source["title"].is_string());
            // url key is always present, possibly null
            assert!(source.as_object().unwrap().contains_key("url"));
        }
        assert_eq!(sources[0]["url"], serde_json::Value::Null);
        assert_eq!(sources[1]["url"], "https://example.com/course2");
    }

    #[tokio::test]
    async fn test_query_with_empty_query_is_accepted() {
        let (status, _) = send(app(), post_query(serde_json::json!({"query": ""}))).await;

        // Validation of query text is not the facade's concern
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_query_with_long_query() {
        let long_query = "What is Python? ".repeat(100);
        let (status, data) =
            send(app(), post_query(serde_json::json!({"query": long_query}))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(data["session_id"].is_string());
    }

    #[tokio::test]
    async fn test_query_invalid_json_returns_422() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("invalid json"))
            .unwrap();

        let (status, data) = send(app(), request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(data["detail"].is_string());
    }

    #[tokio::test]
    async fn test_query_missing_required_field_returns_422() {
        let (status, data) = send(
            app(),
            post_query(serde_json::json!({"session_id": "test-session"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(data["detail"].as_str().unwrap().contains("query"));
    }

    #[tokio::test]
    async fn test_query_rejects_form_data() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/query")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("query=Test"))
            .unwrap();

        let (status, _) = send(app(), request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_query_sequential_calls_keep_session() {
        let app = app();
        let mut session_id: Option<String> = None;

        for i in 0..3 {
            let mut body = serde_json::json!({"query": format!("Question {}", i)});
            if let Some(id) = &session_id {
                body["session_id"] = serde_json::json!(id);
            }

            let (status, data) = send(app.clone(), post_query(body)).await;

            assert_eq!(status, StatusCode::OK);
            let returned = data["session_id"].as_str().unwrap().to_string();
            if let Some(previous) = &session_id {
                assert_eq!(&returned, previous);
            }
            session_id = Some(returned);
        }
    }

    #[tokio::test]
    async fn test_query_error_returns_500_with_detail() {
        let app = app_with(MockRagService::failing("Custom error message"));

        let (status, data) = send(app, post_query(serde_json::json!({"query": "Test"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = data["detail"].as_str().unwrap();
        assert!(detail.contains("Custom error message"));
    }

    // --- /api/courses ---

    #[tokio::test]
    async fn test_courses_returns_stats() {
        let (status, data) = send(app(), get_request("/api/courses")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["total_courses"], 2);
        assert_eq!(data["course_titles"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_courses_count_matches_titles() {
        let (status, data) = send(app(), get_request("/api/courses")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            data["total_courses"].as_u64().unwrap() as usize,
            data["course_titles"].as_array().unwrap().len()
        );
        for title in data["course_titles"].as_array().unwrap() {
            assert!(!title.as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_courses_repeated_calls_are_consistent() {
        let app = app();

        let (_, first) = send(app.clone(), get_request("/api/courses")).await;
        let (_, second) = send(app, get_request("/api/courses")).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_courses_with_no_courses() {
        let app = app_with(MockRagService::with_analytics(CourseAnalytics {
            total_courses: 0,
            course_titles: vec![],
        }));

        let (status, data) = send(app, get_request("/api/courses")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["total_courses"], 0);
        assert_eq!(data["course_titles"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_courses_with_many_courses() {
        let titles: Vec<String> = (0..100).map(|i| format!("Course {}", i)).collect();
        let app = app_with(MockRagService::with_analytics(CourseAnalytics {
            total_courses: titles.len(),
            course_titles: titles,
        }));

        let (status, data) = send(app, get_request("/api/courses")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["total_courses"], 100);
        assert_eq!(data["course_titles"].as_array().unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_courses_error_returns_500_with_detail() {
        let app = app_with(MockRagService::failing("Test error"));

        let (status, data) = send(app, get_request("/api/courses")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(data["detail"].as_str().unwrap().contains("Test error"));
    }

    // --- / ---

    #[tokio::test]
    async fn test_root_endpoint() {
        let (status, data) = send(app(), get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(data["status"], "ok");
        assert!(data["message"].as_str().unwrap().contains("RAG API"));
    }

    #[tokio::test]
    async fn test_responses_are_json() {
        let response = app().oneshot(get_request("/api/courses")).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap(),
            "application/json"
        );
    }
}
