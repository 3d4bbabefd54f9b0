use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all service endpoints and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> ServerResult<Router> {
    let routes = Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .with_state(state);
    apply_middleware(routes, config)
}

pub(crate) fn apply_middleware(router: Router, config: &ServerConfig) -> ServerResult<Router> {
    Ok(router
        .layer(RequestBodyTimeoutLayer::new(config.read_timeout()))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config)?)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &ServerConfig) -> ServerResult<CorsLayer> {
    let origins = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let values = config
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|e| ServerError::Config(format!("invalid origin {o:?}: {e}")))
            })
            .collect::<ServerResult<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
}
