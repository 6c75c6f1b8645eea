//! Axum router configuration for task endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{get_account, list_title_orders, task_pdf};

/// Create the task router.
///
/// # Routes
/// - `GET /titleorder/tasks` - Title order tasks
/// - `GET /titleorder/tasks/:task_id/pdf` - PDF built from one task
/// - `GET /data` - Authorized user
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/titleorder/tasks", get(list_title_orders))
        .route("/titleorder/tasks/:task_id/pdf", get(task_pdf))
        .route("/data", get(get_account))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::state;
    use crate::application::handlers::test_support::{StubGenerator, StubTracker, STUB_PDF};
    use crate::ports::TrackerError;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn tasks_require_authentication() {
        let app = task_routes().with_state(state(
            StubTracker::default(),
            StubGenerator::default(),
            None,
        ));

        let response = get(app, "/titleorder/tasks").await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(response).await["error_code"], "NOT_AUTHENTICATED");
    }

    #[tokio::test]
    async fn tasks_return_tasks_array() {
        let tracker = StubTracker::default()
            .with_response("list/901/task", json!({"tasks": [{"id": "t1", "name": "Deed"}]}));
        let app = task_routes().with_state(state(tracker, StubGenerator::default(), Some("pk")));

        let response = get(app, "/titleorder/tasks").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([{"id": "t1", "name": "Deed"}]));
    }

    #[tokio::test]
    async fn data_returns_user() {
        let tracker = StubTracker::default().with_response("user", json!({"user": {"id": 7}}));
        let app = task_routes().with_state(state(tracker, StubGenerator::default(), Some("pk")));

        let response = get(app, "/data").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["user"]["id"], 7);
    }

    #[tokio::test]
    async fn upstream_failure_is_api_error_without_detail() {
        let tracker = StubTracker::failing(TrackerError::Api {
            status: 500,
            message: "internal trace id 123".to_string(),
        });
        let app = task_routes().with_state(state(tracker, StubGenerator::default(), Some("pk")));

        let response = get(app, "/data").await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = json_body(response).await;
        assert_eq!(json["error_code"], "API_ERROR");
        assert!(!json.to_string().contains("trace id"));
    }

    #[tokio::test]
    async fn task_pdf_streams_named_attachment() {
        let tracker = StubTracker::default().with_response(
            "task/86abc?include_subtasks=true",
            json!({"id": "86abc", "name": "Smith Estate #42", "custom_fields": [
                {"id": "1", "name": "Date Ordered", "type": "date", "value": "1767225600000"}
            ]}),
        );
        let app = task_routes().with_state(state(tracker, StubGenerator::default(), Some("pk")));

        let response = get(app, "/titleorder/tasks/86abc/pdf").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Smith_Estate_42_01-01-2026.pdf\""
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.as_ref(), STUB_PDF);
    }

    #[tokio::test]
    async fn task_pdf_generation_failure_is_opaque() {
        let tracker = StubTracker::default()
            .with_response("task/86abc?include_subtasks=true", json!({"id": "86abc", "name": "X"}));
        let app = task_routes().with_state(state(tracker, StubGenerator::failing(), Some("pk")));

        let response = get(app, "/titleorder/tasks/86abc/pdf").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error_code"], "PDF_GENERATION_FAILED");
        assert!(!json.to_string().contains("output.pdf"));
    }

    #[tokio::test]
    async fn task_pdf_requires_authentication() {
        let app = task_routes().with_state(state(
            StubTracker::default(),
            StubGenerator::default(),
            None,
        ));

        let response = get(app, "/titleorder/tasks/86abc/pdf").await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn task_pdf_rejects_encoded_path_traversal() {
        let tracker = StubTracker::default().with_response("team", json!({"teams": []}));
        let app = task_routes().with_state(state(tracker, StubGenerator::default(), Some("pk")));

        let response = get(app, "/titleorder/tasks/..%2F..%2Fteam/pdf").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error_code"], "INVALID_TASK_ID");
    }
}
