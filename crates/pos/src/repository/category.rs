use crate::{
    abstract_trait::category::CategoryRepositoryTrait, domain::requests::CategoryRequest,
    model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, utils::Deadline};
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn get_all(&self, ctx: &Deadline) -> Result<Vec<CategoryModel>, RepositoryError> {
        info!("🔍 Fetching all categories");

        let categories = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query_as::<_, CategoryModel>(
                    r#"
                    SELECT id, name, description, created_at, updated_at
                    FROM categories
                    ORDER BY id
                    "#,
                )
                .fetch_all(&mut *conn)
                .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch categories: {:?}", e);
                e
            })?;

        Ok(categories)
    }

    async fn get_by_id(&self, ctx: &Deadline, id: i32) -> Result<CategoryModel, RepositoryError> {
        info!("🆔 Fetching category by ID: {}", id);

        let category = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query_as::<_, CategoryModel>(
                    r#"
                    SELECT id, name, description, created_at, updated_at
                    FROM categories
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(&mut *conn)
                .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch category {}: {:?}", id, e);
                e
            })?;

        category.ok_or(RepositoryError::NotFound("category"))
    }

    async fn create(
        &self,
        ctx: &Deadline,
        req: &CategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let category = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query_as::<_, CategoryModel>(
                    r#"
                    INSERT INTO categories (name, description)
                    VALUES ($1, $2)
                    RETURNING id, name, description, created_at, updated_at
                    "#,
                )
                .bind(&req.name)
                .bind(&req.description)
                .fetch_one(&mut *conn)
                .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to create category {}: {:?}", req.name, e);
                e
            })?;

        info!("✅ Created category ID {} ({})", category.id, category.name);
        Ok(category)
    }

    async fn update(
        &self,
        ctx: &Deadline,
        id: i32,
        req: &CategoryRequest,
    ) -> Result<(), RepositoryError> {
        let result = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query(
                    r#"
                    UPDATE categories
                    SET name = $1,
                        description = $2,
                        updated_at = CURRENT_TIMESTAMP
                    WHERE id = $3
                    "#,
                )
                .bind(&req.name)
                .bind(&req.description)
                .bind(id)
                .execute(&mut *conn)
                .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to update category ID {}: {:?}", id, e);
                e
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("category"));
        }

        info!("🔄 Updated category ID {}", id);
        Ok(())
    }

    async fn delete(&self, ctx: &Deadline, id: i32) -> Result<(), RepositoryError> {
        info!("❌ Deleting category: {}", id);

        let result = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query("DELETE FROM categories WHERE id = $1")
                    .bind(id)
                    .execute(&mut *conn)
                    .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to delete category {}: {:?}", id, e);
                e
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("category"));
        }

        info!("✅ Category ID {} permanently deleted", id);
        Ok(())
    }
}
