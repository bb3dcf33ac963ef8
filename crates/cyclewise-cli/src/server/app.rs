//! Axum application setup.

use std::future::Future;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Largest accepted upload.
const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Dataset
        .route(
            "/upload",
            post(handlers::upload_dataset).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/summary", get(handlers::get_summary))
        .route("/data", get(handlers::get_data_preview))
        // Suggestions
        .route("/metrics", get(handlers::get_metric_ranges))
        .route("/suggestions", post(handlers::post_suggestions))
        // Session
        .route(
            "/session",
            get(handlers::get_session).delete(handlers::reset_session),
        );

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server and run until `shutdown` resolves.
pub async fn run_server<F>(
    state: AppState,
    port: u16,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use cyclewise::SessionContext;
    use serde_json::Value;
    use tower::ServiceExt;

    const CYCLE_LOG: &str = "cycle_length,sleep_hours,flow\n28,7,light\n30,,heavy\n,6,\n";

    fn router() -> Router {
        create_router(AppState::new(SessionContext::new()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn metrics_body(sleep: i64, stress: i64, exercise: i64) -> Body {
        Body::from(
            serde_json::json!({
                "cycle_length": 28,
                "bleeding_duration": 5,
                "sleep_hours": sleep,
                "stress_level": stress,
                "exercise_frequency": exercise,
            })
            .to_string(),
        )
    }

    #[tokio::test]
    async fn test_suggestions_without_upload_is_conflict() {
        let app = router();
        let (status, json) =
            send(&app, Method::POST, "/api/suggestions", metrics_body(8, 8, 4)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "Please upload a CSV file.");
    }

    #[tokio::test]
    async fn test_upload_then_suggest() {
        let app = router();
        let (status, summary) = send(
            &app,
            Method::POST,
            "/api/upload?filename=log.csv",
            Body::from(CYCLE_LOG),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["file"], "log.csv");
        assert_eq!(summary["rows"], 3);
        assert_eq!(summary["imputed_cells"], 3);

        let (status, json) =
            send(&app, Method::POST, "/api/suggestions", metrics_body(5, 5, 1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 2);
        assert_eq!(json["lines"][0], "Here are some suggestions for you:");
    }

    #[tokio::test]
    async fn test_no_rules_fired_renders_fallback_line() {
        let app = router();
        send(&app, Method::POST, "/api/upload", Body::from(CYCLE_LOG)).await;

        let (status, json) =
            send(&app, Method::POST, "/api/suggestions", metrics_body(8, 3, 5)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["lines"][0], "No specific suggestions at this time.");
    }

    #[tokio::test]
    async fn test_out_of_range_metric_is_bad_request() {
        let app = router();
        let (status, json) =
            send(&app, Method::POST, "/api/suggestions", metrics_body(13, 5, 1)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_metric");
    }

    #[tokio::test]
    async fn test_malformed_metrics_body_is_bad_request() {
        let app = router();
        let (status, json) = send(
            &app,
            Method::POST,
            "/api/suggestions",
            Body::from(r#"{"cycle_length": 28}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_header_only_upload_clears_session() {
        let app = router();
        send(&app, Method::POST, "/api/upload", Body::from(CYCLE_LOG)).await;

        let (status, json) =
            send(&app, Method::POST, "/api/upload", Body::from("a,b\n")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "empty_dataset");

        let (status, _) = send(&app, Method::GET, "/api/data", Body::empty()).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_preview_and_reset() {
        let app = router();
        send(&app, Method::POST, "/api/upload", Body::from(CYCLE_LOG)).await;

        let (status, preview) = send(&app, Method::GET, "/api/data?limit=2", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(preview["rows"].as_array().unwrap().len(), 2);
        assert_eq!(preview["total_rows"], 3);
        assert_eq!(preview["truncated"], true);

        let (status, json) = send(&app, Method::DELETE, "/api/session", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["has_dataset"], false);

        let (status, _) = send(&app, Method::GET, "/api/summary", Body::empty()).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_metric_ranges() {
        let app = router();
        let (status, json) = send(&app, Method::GET, "/api/metrics", Body::empty()).await;

        assert_eq!(status, StatusCode::OK);
        let ranges = json["ranges"].as_array().unwrap();
        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges[0]["field"], "cycle_length");
        assert_eq!(ranges[0]["min"], 21);
        assert_eq!(json["defaults"]["exercise_frequency"], 0);
    }

    #[tokio::test]
    async fn test_index_is_served() {
        let app = router();
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/html");
    }
}
