//! HTTP bootstrap for the Identbase link service.
//!
//! Wires the single shared [`InMemoryStore`](link_store::InMemoryStore) into
//! the axum application state and wraps every route in request tracing,
//! panic recovery, CORS, a request timeout, and a body read timeout.
//! Protocol modules mount on top of the router built here.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::LinkServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use link_store::{InMemoryStore, Keyed, KeyedStore, PublicKey};
    use tower::util::ServiceExt;

    fn app_with(store: Arc<InMemoryStore>) -> Router {
        router::build_router(AppState::new(store), &ServerConfig::default()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = app_with(Arc::new(InMemoryStore::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint_reports_store_size() {
        let store: Arc<InMemoryStore> = Arc::new(InMemoryStore::new());
        for id in ["0", "1"] {
            let pk: Arc<dyn Keyed> = Arc::new(PublicKey::new("ed25519", id, "abc"));
            store.put(pk).unwrap();
        }

        let app = app_with(store);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/info")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["name"], "link-server");
        assert_eq!(body["entries"], 2);
    }

    #[tokio::test]
    async fn cors_preflight_allows_any_origin() {
        let app = app_with(Arc::new(InMemoryStore::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/v1/health")
                    .header(header::ORIGIN, "https://client.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("DELETE"));
    }

    #[tokio::test]
    async fn cors_echoes_listed_origin() {
        let config = ServerConfig {
            allowed_origins: vec!["https://client.example".to_string()],
            ..ServerConfig::default()
        };
        let app =
            router::build_router(AppState::new(Arc::new(InMemoryStore::new())), &config).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .header(header::ORIGIN, "https://client.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://client.example"
        );
    }

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn panicking_handler_becomes_500() {
        let app = router::apply_middleware(
            Router::new().route("/boom", get(boom)),
            &ServerConfig::default(),
        )
        .unwrap();
        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    async fn echo(body: String) -> String {
        body
    }

    fn stalled_body() -> Body {
        let chunks = futures::stream::pending::<Result<axum::body::Bytes, std::io::Error>>();
        Body::from_stream(chunks)
    }

    #[tokio::test]
    async fn stalled_request_body_times_out() {
        let config = ServerConfig {
            read_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let app = router::apply_middleware(Router::new().route("/echo", post(echo)), &config)
            .unwrap();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .body(stalled_body())
            .unwrap();

        let response = tokio::time::timeout(Duration::from_secs(10), app.oneshot(request))
            .await
            .expect("body read should be cut off by the read timeout")
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn prompt_request_body_is_read() {
        let config = ServerConfig {
            read_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let app = router::apply_middleware(Router::new().route("/echo", post(echo)), &config)
            .unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/echo")
                    .body(Body::from("ed25519:0"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ed25519:0");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = app_with(Arc::new(InMemoryStore::new()));
        let response = app
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
