use crate::domain::{requests::ProductRequest, response::ProductResponse};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::Deadline};
use std::sync::Arc;

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductServiceTrait {
    async fn get_all(&self, ctx: &Deadline) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn get_by_id(&self, ctx: &Deadline, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn create(
        &self,
        ctx: &Deadline,
        req: &ProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    /// Writes then re-reads, returning the post-update state.
    async fn update(
        &self,
        ctx: &Deadline,
        id: i32,
        req: &ProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete(&self, ctx: &Deadline, id: i32) -> Result<(), ServiceError>;
}
