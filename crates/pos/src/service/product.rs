use crate::{
    abstract_trait::product::{DynProductRepository, ProductServiceTrait},
    domain::{requests::ProductRequest, response::ProductResponse},
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
pub struct ProductService {
    repository: DynProductRepository,
    metrics: Metrics,
}

impl ProductService {
    pub fn new(repository: DynProductRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("product_service", registry);

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
        let elapsed = start_time.elapsed().as_secs_f64();

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

        self.metrics.record(method, status, elapsed);
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn get_all(&self, ctx: &Deadline) -> Result<Vec<ProductResponse>, ServiceError> {
        let start_time = Instant::now();

        let result = self
            .repository
            .get_all(ctx)
            .await
            .map(|products| products.into_iter().map(ProductResponse::from).collect())
            .map_err(ServiceError::from);

        self.complete("product_get_all", Method::Get, start_time, &result);
        result
    }

    async fn get_by_id(&self, ctx: &Deadline, id: i32) -> Result<ProductResponse, ServiceError> {
        let start_time = Instant::now();

        let result = self
            .repository
            .get_by_id(ctx, id)
            .await
            .map(ProductResponse::from)
            .map_err(ServiceError::from);

        self.complete("product_get_by_id", Method::Get, start_time, &result);
        result
    }

    async fn create(
        &self,
        ctx: &Deadline,
        req: &ProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating new product: {}", req.name);
        let start_time = Instant::now();

        let result = self
            .repository
            .create(ctx, req)
            .await
            .map(ProductResponse::from)
            .map_err(ServiceError::from);

        self.complete("product_create", Method::Post, start_time, &result);
        result
    }

    async fn update(
        &self,
        ctx: &Deadline,
        id: i32,
        req: &ProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("✏️ Updating product with ID: {id}");
        let start_time = Instant::now();

        // Not transactional: a delete landing between the two calls
        // surfaces as NotFound from the re-read.
        let result = async {
            self.repository.update(ctx, id, req).await?;
            let product = self.repository.get_by_id(ctx, id).await?;
            Ok::<_, ServiceError>(ProductResponse::from(product))
        }
        .await;

        self.complete("product_update", Method::Put, start_time, &result);
        result
    }

    async fn delete(&self, ctx: &Deadline, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product with ID: {id}");
        let start_time = Instant::now();

        let result = self
            .repository
            .delete(ctx, id)
            .await
            .map_err(ServiceError::from);

        self.complete("product_delete", Method::Delete, start_time, &result);
        result
    }
}
