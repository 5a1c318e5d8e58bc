use super::{CREATE_TIMEOUT, Failure, READ_TIMEOUT, WRITE_TIMEOUT, bounded, method_not_allowed};
use crate::{
    abstract_trait::product::DynProductService,
    domain::{requests::ProductRequest, response::ProductResponse},
    middleware::{PathId, Resource, ValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    domain::responses::{ApiResponse, MessageResponse},
    errors::HttpError,
    utils::Deadline,
};
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

pub struct ProductPath;

impl Resource for ProductPath {
    const NAME: &'static str = "product";
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error"),
        (status = 504, description = "Request timeout")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(READ_TIMEOUT);

    let products = bounded(&ctx, service.get_all(&ctx))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::Timeout,
            Failure::Service(e) => {
                error!("❌ Failed to list products: {e}");
                HttpError::Internal("failed to fetch products".to_string())
            }
        })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(products))))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid product ID"),
        (status = 404, description = "Product not found"),
        (status = 504, description = "Request timeout")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    PathId(id, ..): PathId<ProductPath>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(READ_TIMEOUT);

    let product = bounded(&ctx, service.get_by_id(&ctx, id))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::Timeout,
            Failure::Service(_) => HttpError::NotFound {
                code: "PRODUCT_NOT_FOUND",
                message: "product not found".to_string(),
            },
        })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid body, validation error or store failure"),
        (status = 504, description = "Request timeout")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    ValidatedJson(body): ValidatedJson<ProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(CREATE_TIMEOUT);

    let product = bounded(&ctx, service.create(&ctx, &body))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::Timeout,
            Failure::Service(e) => HttpError::OperationFailed {
                code: "CREATE_FAILED",
                message: e.to_string(),
            },
        })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid input or update failed"),
        (status = 408, description = "Request timed out")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    PathId(id, ..): PathId<ProductPath>,
    ValidatedJson(body): ValidatedJson<ProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(WRITE_TIMEOUT);

    let product = bounded(&ctx, service.update(&ctx, id, &body))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::RequestTimeout,
            Failure::Service(e) => HttpError::OperationFailed {
                code: "UPDATE_FAILED",
                message: e.to_string(),
            },
        })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(product))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<MessageResponse>),
        (status = 400, description = "Invalid ID or delete failed"),
        (status = 408, description = "Request timed out")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    PathId(id, ..): PathId<ProductPath>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(WRITE_TIMEOUT);

    bounded(&ctx, service.delete(&ctx, id))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::RequestTimeout,
            Failure::Service(e) => HttpError::OperationFailed {
                code: "DELETE_FAILED",
                message: e.to_string(),
            },
        })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(MessageResponse::new(
            "product successfully deleted",
        ))),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/v1/products",
            get(get_products)
                .post(create_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/v1/products/{id}",
            get(get_product)
                .put(update_product)
                .patch(update_product)
                .delete(delete_product)
                .fallback(method_not_allowed),
        )
        .layer(Extension(app_state.di_container.product_service.clone()))
}
