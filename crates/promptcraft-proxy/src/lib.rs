//! Promptcraft Proxy
//!
//! Same-origin intermediary for the chat-completion endpoint. Requests are
//! forwarded to OpenRouter with a server-held key through whichever
//! [`ProxyAdapter`] matches the deployment target.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use promptcraft::ProxyAdapter;

pub mod adapters;
pub mod config;
pub mod models;
pub mod routes;

pub use adapters::build_adapter;
pub use config::{ProxyConfig, ProxyVariant};

use models::HealthCheck;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<dyn ProxyAdapter>,
}

impl AppState {
    pub fn new(adapter: Arc<dyn ProxyAdapter>) -> Self {
        Self { adapter }
    }
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Proxy is running", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Promptcraft proxy is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        variant: state.adapter.variant_name().to_string(),
    })
}

/// Build the full router
pub fn router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::openrouter::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_variant() {
        let config = ProxyConfig {
            variant: ProxyVariant::Platform,
            ..ProxyConfig::default()
        };
        let app = router(AppState::new(build_adapter(&config)));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let health: HealthCheck = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.variant, "platform");
    }

    #[tokio::test]
    async fn test_preflight_is_answered_permissively() {
        let app = router(AppState::new(build_adapter(&ProxyConfig::default())));

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(promptcraft::PROXY_PATH)
                    .header("origin", "https://elsewhere.example")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}
