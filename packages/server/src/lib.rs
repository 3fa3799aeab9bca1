pub mod config;
pub mod error;
pub mod handlers;
pub mod in_flight;
pub mod models;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Json;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Skipwatch API",
        version = "1.0.0",
        description = "Flags Codeforces contests in which every submission of a user was skipped"
    ),
    tags((name = "Checks", description = "Suspicious-contest checks")),
)]
struct ApiDoc;

/// Build the CORS layer, or `None` when no origins are configured.
fn cors_layer(cors: &CorsConfig) -> Option<CorsLayer> {
    if cors.allow_origins.is_empty() {
        return None;
    }

    let allow_origin = if cors.allow_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins = cors.allow_origins.iter().filter_map(|o| {
            HeaderValue::from_str(o)
                .inspect_err(|e| tracing::warn!(origin = %o, error = %e, "Ignoring CORS origin"))
                .ok()
        });
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET])
            .max_age(Duration::from_secs(cors.max_age)),
    )
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    let openapi_json = api.clone();
    let router: axum::Router = router
        .with_state(state)
        .route("/api-docs/openapi.json", get(move || async move { Json(openapi_json) }))
        .merge(Scalar::with_url("/scalar", api));

    match cors {
        Some(layer) => router.layer(layer),
        None => router,
    }
}
