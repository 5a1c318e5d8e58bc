use super::{CREATE_TIMEOUT, Failure, READ_TIMEOUT, WRITE_TIMEOUT, bounded, method_not_allowed};
use crate::{
    abstract_trait::category::DynCategoryService,
    domain::{requests::CategoryRequest, response::CategoryResponse},
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

pub struct CategoryPath;

impl Resource for CategoryPath {
    const NAME: &'static str = "category";
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Category",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 500, description = "Internal server error"),
        (status = 504, description = "Request timeout")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryService>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(READ_TIMEOUT);

    let categories = bounded(&ctx, service.get_all(&ctx))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::Timeout,
            Failure::Service(e) => {
                error!("❌ Failed to list categories: {e}");
                HttpError::Internal("failed to fetch categories".to_string())
            }
        })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(categories))))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid category ID"),
        (status = 404, description = "Category not found"),
        (status = 504, description = "Request timeout")
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryService>,
    PathId(id, ..): PathId<CategoryPath>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(READ_TIMEOUT);

    let category = bounded(&ctx, service.get_by_id(&ctx, id))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::Timeout,
            Failure::Service(_) => HttpError::NotFound {
                code: "CATEGORY_NOT_FOUND",
                message: "category not found".to_string(),
            },
        })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(category))))
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "Category",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid body, validation error or store failure"),
        (status = 504, description = "Request timeout")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    ValidatedJson(body): ValidatedJson<CategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(CREATE_TIMEOUT);

    let category = bounded(&ctx, service.create(&ctx, &body))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::Timeout,
            Failure::Service(e) => HttpError::OperationFailed {
                code: "CREATE_FAILED",
                message: e.to_string(),
            },
        })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(category))))
}

#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid input or update failed"),
        (status = 408, description = "Request timed out")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    PathId(id, ..): PathId<CategoryPath>,
    ValidatedJson(body): ValidatedJson<CategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let ctx = Deadline::after(WRITE_TIMEOUT);

    let category = bounded(&ctx, service.update(&ctx, id, &body))
        .await
        .map_err(|failure| match failure {
            Failure::Deadline => HttpError::RequestTimeout,
            Failure::Service(e) => HttpError::OperationFailed {
                code: "UPDATE_FAILED",
                message: e.to_string(),
            },
        })?;

    Ok((StatusCode::OK, Json(ApiResponse::new(category))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<MessageResponse>),
        (status = 400, description = "Invalid ID or delete failed"),
        (status = 408, description = "Request timed out")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryService>,
    PathId(id, ..): PathId<CategoryPath>,
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
            "category successfully deleted",
        ))),
    ))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/v1/categories",
            get(get_categories)
                .post(create_category)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/v1/categories/{id}",
            get(get_category)
                .put(update_category)
                .patch(update_category)
                .delete(delete_category)
                .fallback(method_not_allowed),
        )
        .layer(Extension(app_state.di_container.category_service.clone()))
}
