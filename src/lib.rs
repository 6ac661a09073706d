pub mod api;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod models;
pub mod services;

use crate::config::ServerConfig;
use crate::services::catalog::CatalogService;
use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Archive Vault API"),
    paths(
        api::handlers::archives::list_images,
        api::handlers::archives::list_documents,
        api::handlers::health::health_check,
    ),
    components(
        schemas(
            models::ArchivePage,
            models::MediaItemResponse,
            models::ItemKind,
            api::handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "archives", description = "Catalog listing endpoints"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(db)),
            config,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/v1/health", get(api::handlers::health::health_check))
        .route(
            "/api/v1/archives/images",
            get(api::handlers::archives::list_images),
        )
        .route(
            "/api/v1/archives/docs",
            get(api::handlers::archives::list_documents),
        )
        .layer(from_fn(api::middleware::metrics::metrics_middleware))
        // Inside the request-id layer so spans see the assigned id.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get(api::middleware::request_id::REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    info!("📥 {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        info!(
                            "📤 Finished in {:?} with status {}",
                            latency,
                            response.status()
                        );
                    },
                ),
        )
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
