use crate::{
    abstract_trait::category::{CategoryServiceTrait, DynCategoryRepository},
    domain::{requests::CategoryRequest, response::CategoryResponse},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Deadline, Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryService {
    repository: DynCategoryRepository,
    metrics: Metrics,
}

impl CategoryService {
    pub fn new(repository: DynCategoryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("category_service", registry);

        Self {
            repository,
            metrics,
        }
    }

    fn complete<T>(
        &self,
        operation: &str,
        method: Method,
        start_time: Instant,
        result: &Result<T, ServiceError>,
    ) {
        let status = match result {
            Ok(_) => {
                info!("✅ Operation completed successfully: {operation}");
                Status::Success
            }
            Err(e) => {
                error!("❌ Operation failed: {operation}: {e}");
                Status::Error
            }
        };

        self.metrics
            .record(method, status, start_time.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn get_all(&self, ctx: &Deadline) -> Result<Vec<CategoryResponse>, ServiceError> {
        let start_time = Instant::now();

        let result = self
            .repository
            .get_all(ctx)
            .await
            .map(|rows| rows.into_iter().map(CategoryResponse::from).collect())
            .map_err(ServiceError::from);

        self.complete("category_get_all", Method::Get, start_time, &result);
        result
    }

    async fn get_by_id(&self, ctx: &Deadline, id: i32) -> Result<CategoryResponse, ServiceError> {
        let start_time = Instant::now();

        let result = self
            .repository
            .get_by_id(ctx, id)
            .await
            .map(CategoryResponse::from)
            .map_err(ServiceError::from);

        self.complete("category_get_by_id", Method::Get, start_time, &result);
        result
    }

    async fn create(
        &self,
        ctx: &Deadline,
        req: &CategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        info!("🏗️ Creating new category: {}", req.name);
        let start_time = Instant::now();

        let result = self
            .repository
            .create(ctx, req)
            .await
            .map(CategoryResponse::from)
            .map_err(ServiceError::from);

        self.complete("category_create", Method::Post, start_time, &result);
        result
    }

    async fn update(
        &self,
        ctx: &Deadline,
        id: i32,
        req: &CategoryRequest,
    ) -> Result<CategoryResponse, ServiceError> {
        info!("✏️ Updating category with ID: {id}");
        let start_time = Instant::now();

        let result = async {
            self.repository.update(ctx, id, req).await?;
            let category = self.repository.get_by_id(ctx, id).await?;
            Ok::<_, ServiceError>(CategoryResponse::from(category))
        }
        .await;

        self.complete("category_update", Method::Put, start_time, &result);
        result
    }

    async fn delete(&self, ctx: &Deadline, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting category with ID: {id}");
        let start_time = Instant::now();

        let result = self
            .repository
            .delete(ctx, id)
            .await
            .map_err(ServiceError::from);

        self.complete("category_delete", Method::Delete, start_time, &result);
        result
    }
}
