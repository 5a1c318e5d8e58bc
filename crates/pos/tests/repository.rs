//! Store round-trips against a real Postgres. Skipped when `DATABASE_URL`
//! is not set.

use pos::{
    abstract_trait::{category::CategoryRepositoryTrait, product::ProductRepositoryTrait},
    domain::requests::{CategoryRequest, ProductRequest},
    repository::{CategoryRepository, ProductRepository},
};
use rust_decimal::Decimal;
use shared::{
    config::{ConnectionManager, ConnectionPool, PoolSettings},
    errors::RepositoryError,
    utils::Deadline,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

async fn pool() -> Option<ConnectionPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skipping repository tests");
        return None;
    };

    let settings = PoolSettings {
        max_connections: 4,
        min_connections: 1,
        ..PoolSettings::default()
    };
    let pool = ConnectionManager::new_pool(&url, &settings)
        .await
        .expect("connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    Some(pool)
}

fn ctx() -> Deadline {
    Deadline::after(Duration::from_secs(5))
}

fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}

async fn seed_category(repo: &CategoryRepository) -> i32 {
    let req = CategoryRequest {
        name: unique("Food"),
        description: Some("Main dishes".to_string()),
    };
    repo.create(&ctx(), &req).await.unwrap().id
}

fn product_request(name: &str, category_id: i32) -> ProductRequest {
    ProductRequest {
        name: name.to_string(),
        description: Some("Fried rice".to_string()),
        price: Decimal::new(1500000, 2),
        stock: 10,
        category_id,
    }
}

#[tokio::test]
async fn product_lifecycle() {
    let Some(pool) = pool().await else { return };
    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool);

    let category_id = seed_category(&categories).await;
    let name = unique("Nasi Goreng");

    let created = products
        .create(&ctx(), &product_request(&name, category_id))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, name);
    assert_eq!(created.price, Decimal::new(15000, 0));
    assert_eq!(created.category_id, category_id);
    assert!(created.category_name.starts_with("Food-"));

    let all = products.get_all(&ctx()).await.unwrap();
    assert!(all.iter().any(|p| p.id == created.id));

    tokio::time::sleep(Duration::from_millis(20)).await;

    let mut req = product_request(&name, category_id);
    req.stock = 3;
    products.update(&ctx(), created.id, &req).await.unwrap();

    let updated = products.get_by_id(&ctx(), created.id).await.unwrap();
    assert_eq!(updated.stock, 3);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    products.delete(&ctx(), created.id).await.unwrap();
    let gone = products.get_by_id(&ctx(), created.id).await.unwrap_err();
    assert!(gone.is_not_found());

    categories.delete(&ctx(), category_id).await.unwrap();
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let Some(pool) = pool().await else { return };
    let products = ProductRepository::new(pool.clone());
    let categories = CategoryRepository::new(pool);
    let missing = i32::MAX;

    let err = products.get_by_id(&ctx(), missing).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound("product")));

    let err = products
        .update(&ctx(), missing, &product_request("Ghost", 1))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = products.delete(&ctx(), missing).await.unwrap_err();
    assert!(err.is_not_found());

    let err = categories.get_by_id(&ctx(), missing).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound("category")));

    let err = categories.delete(&ctx(), missing).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn category_update_rewrites_row() {
    let Some(pool) = pool().await else { return };
    let categories = CategoryRepository::new(pool);

    let id = seed_category(&categories).await;
    let before = categories.get_by_id(&ctx(), id).await.unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;

    let req = CategoryRequest {
        name: unique("Drinks"),
        description: None,
    };
    categories.update(&ctx(), id, &req).await.unwrap();

    let after = categories.get_by_id(&ctx(), id).await.unwrap();
    assert_eq!(after.name, req.name);
    assert_eq!(after.description, None);
    assert!(after.updated_at > before.updated_at);

    categories.delete(&ctx(), id).await.unwrap();
}

#[tokio::test]
async fn unknown_category_fails_insert() {
    let Some(pool) = pool().await else { return };
    let products = ProductRepository::new(pool);

    let err = products
        .create(&ctx(), &product_request(&unique("Orphan"), i32::MAX))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Sqlx(_)));
}

#[tokio::test]
async fn expired_deadline_skips_the_query() {
    let Some(pool) = pool().await else { return };
    let products = ProductRepository::new(pool);

    let expired = Deadline::after(Duration::ZERO);
    let err = products.get_all(&expired).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DeadlineExceeded));
}

#[tokio::test]
async fn expired_deadline_fails_category_lookup() {
    let Some(pool) = pool().await else { return };
    let categories = CategoryRepository::new(pool);

    let expired = Deadline::after(Duration::ZERO);
    let err = categories.get_by_id(&expired, 1).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DeadlineExceeded));
}
