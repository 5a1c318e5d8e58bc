use crate::{
    abstract_trait::{category::DynCategoryService, product::DynProductService},
    repository::{CategoryRepository, ProductRepository},
    service::{CategoryService, ProductService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: DynProductService,
    pub category_service: DynCategoryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &"DynProductService")
            .field("category_service", &"DynCategoryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let product_repo = Arc::new(ProductRepository::new(pool.clone()));
        let category_repo = Arc::new(CategoryRepository::new(pool));

        let product_service: DynProductService =
            Arc::new(ProductService::new(product_repo, registry));
        let category_service: DynCategoryService =
            Arc::new(CategoryService::new(category_repo, registry));

        Self {
            product_service,
            category_service,
        }
    }
}
