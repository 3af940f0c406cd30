#![allow(dead_code)]

use shared::{
    config::{ConnectionPool, run_migrations},
    domain::requests::{CreateCategoryRequest, CreateProductRequest},
};
use sqlx::{
    Connection, Executor, PgConnection,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Creates a fresh migrated database for one test, or `None` when
/// `TEST_DATABASE_URL` is unset.
pub async fn test_pool() -> Option<ConnectionPool> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping store test");
        return None;
    };

    let admin_options: PgConnectOptions = url.parse().expect("valid TEST_DATABASE_URL");
    let database = format!("storefront_test_{:016x}", rand::random::<u64>());

    let mut admin = PgConnection::connect_with(&admin_options)
        .await
        .expect("connect to TEST_DATABASE_URL");
    admin
        .execute(format!(r#"CREATE DATABASE "{database}""#).as_str())
        .await
        .expect("create test database");
    admin.close().await.ok();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(admin_options.database(&database))
        .await
        .expect("connect to test database");

    run_migrations(&pool).await.expect("run migrations");

    Some(pool)
}

pub fn new_category(name: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        description: format!("{name} and friends"),
    }
}

pub fn new_product(name: &str, category_id: i64) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: String::new(),
        category_id,
        price: 1999,
        quantity: 10,
    }
}
