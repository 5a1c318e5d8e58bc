use crate::domain::{requests::CategoryRequest, response::CategoryResponse};
use async_trait::async_trait;
use shared::{errors::ServiceError, utils::Deadline};
use std::sync::Arc;

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryServiceTrait {
    async fn get_all(&self, ctx: &Deadline) -> Result<Vec<CategoryResponse>, ServiceError>;
    async fn get_by_id(&self, ctx: &Deadline, id: i32) -> Result<CategoryResponse, ServiceError>;
    async fn create(
        &self,
        ctx: &Deadline,
        req: &CategoryRequest,
    ) -> Result<CategoryResponse, ServiceError>;
    async fn update(
        &self,
        ctx: &Deadline,
        id: i32,
        req: &CategoryRequest,
    ) -> Result<CategoryResponse, ServiceError>;
    async fn delete(&self, ctx: &Deadline, id: i32) -> Result<(), ServiceError>;
}
