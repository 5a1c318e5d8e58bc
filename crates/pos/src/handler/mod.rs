mod category;
mod product;

use crate::state::AppState;
use anyhow::Result;
use axum::{
    Json, Router,
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{
    domain::responses::HealthResponse,
    errors::{HttpError, ServiceError},
    utils::{Deadline, shutdown_signal},
};
use std::{future::Future, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::category::category_routes;
pub use self::product::product_routes;

pub(crate) const READ_TIMEOUT: Duration = Duration::from_secs(5);
pub(crate) const CREATE_TIMEOUT: Duration = Duration::from_secs(3);
pub(crate) const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

const BODY_LIMIT: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Health", description = "Liveness check"),
    )
)]
struct ApiDoc;

/// Why a bounded service call did not produce a value.
pub(crate) enum Failure {
    Deadline,
    Service(ServiceError),
}

/// Races a service call against `ctx`. Any error observed once the
/// deadline has passed is reported as [`Failure::Deadline`].
pub(crate) async fn bounded<F, T>(ctx: &Deadline, fut: F) -> Result<T, Failure>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    match ctx.within(fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) if !ctx.is_expired() && !e.is_deadline_exceeded() => Err(Failure::Service(e)),
        _ => Err(Failure::Deadline),
    }
}

pub(crate) async fn method_not_allowed() -> HttpError {
    HttpError::MethodNotAllowed
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: format!("API successfully running on port: {}", state.port),
    })
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        Body::from(buffer),
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/health", get(health_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(product_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        abstract_trait::{category::MockCategoryServiceTrait, product::MockProductServiceTrait},
        di::DependenciesInject,
        state::AppState,
    };
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use prometheus_client::registry::Registry;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    pub fn state(
        products: MockProductServiceTrait,
        categories: MockCategoryServiceTrait,
    ) -> AppState {
        AppState {
            di_container: DependenciesInject {
                product_service: Arc::new(products),
                category_service: Arc::new(categories),
            },
            registry: Arc::new(Registry::default()),
            port: 8080,
        }
    }

    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }
}
