pub mod health;
pub mod trends;

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::series;

#[derive(OpenApi)]
#[openapi(
    paths(health::healthz, trends::get_device_trends),
    components(
        schemas(
            trends::TrendsResponse,
            series::TrendPoint,
            series::TrendSummary,
            series::TimeRange,
            series::ParameterSummaries,
            series::ParameterStats,
            series::DataSource,
            series::Trend,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "trends", description = "Water-quality trend series per device"),
    ),
    info(
        title = "Blue Horizon API",
        description = "Water-quality trends API with hybrid mock fill",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    // The dashboard origin is allowed explicitly when configured; local
    // development falls back to a permissive policy.
    let cors = match config
        .frontend_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => {
            tracing::info!(origin = ?origin, "CORS restricted to dashboard origin");
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let api_routes = Router::new()
        .route("/trends/{device_id}", get(trends::get_device_trends))
        .layer(RequestBodyLimitLayer::new(1024 * 1024)); // 1MB body limit

    // Health check routes
    let health_routes = Router::new()
        .route("/", get(health::banner))
        .route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
