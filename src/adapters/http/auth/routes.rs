//! Axum router configuration for the OAuth endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{oauth_callback, start_authorization};

/// Create the OAuth router.
///
/// # Routes
/// - `GET /auth` - Redirect to ClickUp authorization
/// - `GET /callback` - OAuth callback
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth", get(start_authorization))
        .route("/callback", get(oauth_callback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::state;
    use crate::application::handlers::test_support::{StubGenerator, StubTracker};
    use crate::ports::TrackerError;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn auth_redirects_to_authorize_url() {
        let app = auth_routes().with_state(state(
            StubTracker::default(),
            StubGenerator::default(),
            None,
        ));

        let response = get(app, "/auth").await;

        assert!(response.status().is_redirection());
        assert!(location(&response).starts_with("https://app.clickup.com/api?client_id=stub"));
    }

    #[tokio::test]
    async fn callback_stores_token_and_redirects_to_frontend() {
        let state = state(StubTracker::default(), StubGenerator::default(), None);
        let store = state.token_store.clone();
        let app = auth_routes().with_state(state);

        let response = get(app, "/callback?code=abc").await;

        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "http://localhost:5173?auth=success");
        assert_eq!(store.current().await.unwrap().expose(), "token-for-abc");
    }

    #[tokio::test]
    async fn callback_without_code_is_bad_request() {
        let app = auth_routes().with_state(state(
            StubTracker::default(),
            StubGenerator::default(),
            None,
        ));

        let response = get(app, "/callback").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_exchange_is_oauth_error() {
        let tracker = StubTracker::failing(TrackerError::Api {
            status: 401,
            message: "bad code".to_string(),
        });
        let app = auth_routes().with_state(state(tracker, StubGenerator::default(), None));

        let response = get(app, "/callback?code=nope").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error_code"], "OAUTH_ERROR");
        assert!(!json["message"].as_str().unwrap().contains("bad code"));
    }
}
