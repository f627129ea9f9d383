// src/presentation/http/routes.rs
use crate::config::RateLimitConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::slugs,
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    /// `None` disables per-client rate limiting on the slug endpoint.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            rate_limit: None,
        }
    }
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let origins: Vec<HeaderValue> = options
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut slug_routes = Router::new().route("/api/listings/slug", get(slugs::slug));
    if let Some(layer) = options.rate_limit.and_then(rate_limit_layer) {
        slug_routes = slug_routes.layer(layer);
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(slug_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
