use crate::{
    abstract_trait::product::ProductRepositoryTrait, domain::requests::ProductRequest,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{config::ConnectionPool, errors::RepositoryError, utils::Deadline};
use tracing::{error, info};

const SELECT_PRODUCT: &str = r#"
    SELECT
        p.id,
        p.name,
        p.description,
        p.price,
        p.stock,
        p.category_id,
        p.created_at,
        p.updated_at,
        c.name AS category_name,
        c.description AS category_description
    FROM products p
    JOIN categories c ON p.category_id = c.id
"#;

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn get_all(&self, ctx: &Deadline) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching all products");

        let query = format!("{SELECT_PRODUCT} ORDER BY p.id");

        let products = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query_as::<_, ProductModel>(&query)
                    .fetch_all(&mut *conn)
                    .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                e
            })?;

        info!("✅ Fetched {} products", products.len());
        Ok(products)
    }

    async fn get_by_id(&self, ctx: &Deadline, id: i32) -> Result<ProductModel, RepositoryError> {
        info!("🆔 Fetching product by ID: {}", id);

        let query = format!("{SELECT_PRODUCT} WHERE p.id = $1");

        let product = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query_as::<_, ProductModel>(&query)
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch product {}: {:?}", id, e);
                e
            })?;

        product.ok_or(RepositoryError::NotFound("product"))
    }

    async fn create(
        &self,
        ctx: &Deadline,
        req: &ProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let (id, created_at, _updated_at) = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query_as::<_, (i32, DateTime<Utc>, DateTime<Utc>)>(
                    r#"
                    INSERT INTO products (name, price, stock, description, category_id)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, created_at, updated_at
                    "#,
                )
                .bind(&req.name)
                .bind(req.price)
                .bind(req.stock)
                .bind(&req.description)
                .bind(req.category_id)
                .fetch_one(&mut *conn)
                .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to create product {}: {:?}", req.name, e);
                e
            })?;

        info!("✅ Created product ID {} ({}) at {}", id, req.name, created_at);

        self.get_by_id(ctx, id).await
    }

    async fn update(
        &self,
        ctx: &Deadline,
        id: i32,
        req: &ProductRequest,
    ) -> Result<(), RepositoryError> {
        let result = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query(
                    r#"
                    UPDATE products
                    SET name = $1,
                        price = $2,
                        stock = $3,
                        description = $4,
                        category_id = $5,
                        updated_at = CURRENT_TIMESTAMP
                    WHERE id = $6
                    "#,
                )
                .bind(&req.name)
                .bind(req.price)
                .bind(req.stock)
                .bind(&req.description)
                .bind(req.category_id)
                .bind(id)
                .execute(&mut *conn)
                .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to update product ID {}: {:?}", id, e);
                e
            })?;

        // the statement succeeds on a missing id; only the row count tells
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("product"));
        }

        info!("🔄 Updated product ID {}", id);
        Ok(())
    }

    async fn delete(&self, ctx: &Deadline, id: i32) -> Result<(), RepositoryError> {
        info!("❌ Deleting product: {}", id);

        let result = ctx
            .run(async {
                let mut conn = self.db.acquire().await?;
                sqlx::query("DELETE FROM products WHERE id = $1")
                    .bind(id)
                    .execute(&mut *conn)
                    .await
            })
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", id, e);
                e
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("product"));
        }

        info!("✅ Product ID {} permanently deleted", id);
        Ok(())
    }
}
