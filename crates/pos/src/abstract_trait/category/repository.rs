use crate::{domain::requests::CategoryRequest, model::category::Category as CategoryModel};
use async_trait::async_trait;
use shared::{errors::RepositoryError, utils::Deadline};
use std::sync::Arc;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn get_all(&self, ctx: &Deadline) -> Result<Vec<CategoryModel>, RepositoryError>;
    async fn get_by_id(&self, ctx: &Deadline, id: i32) -> Result<CategoryModel, RepositoryError>;
    async fn create(
        &self,
        ctx: &Deadline,
        req: &CategoryRequest,
    ) -> Result<CategoryModel, RepositoryError>;
    async fn update(
        &self,
        ctx: &Deadline,
        id: i32,
        req: &CategoryRequest,
    ) -> Result<(), RepositoryError>;
    async fn delete(&self, ctx: &Deadline, id: i32) -> Result<(), RepositoryError>;
}
