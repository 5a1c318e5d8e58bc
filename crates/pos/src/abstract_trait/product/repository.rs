use crate::{domain::requests::ProductRequest, model::product::Product as ProductModel};
use async_trait::async_trait;
use shared::{errors::RepositoryError, utils::Deadline};
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepositoryTrait {
    async fn get_all(&self, ctx: &Deadline) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn get_by_id(&self, ctx: &Deadline, id: i32) -> Result<ProductModel, RepositoryError>;
    async fn create(
        &self,
        ctx: &Deadline,
        req: &ProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update(
        &self,
        ctx: &Deadline,
        id: i32,
        req: &ProductRequest,
    ) -> Result<(), RepositoryError>;
    async fn delete(&self, ctx: &Deadline, id: i32) -> Result<(), RepositoryError>;
}
