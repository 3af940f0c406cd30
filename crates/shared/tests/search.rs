mod common;

use common::{new_category, new_product, test_pool};
use shared::{
    abstract_trait::{
        CategoryCommandRepositoryTrait, ProductCommandRepositoryTrait, SearchRepositoryTrait,
    },
    errors::RepositoryError,
    model::SearchResult,
    repository::{CategoryRepository, ProductRepository, SearchRepository},
};

#[tokio::test]
async fn categories_come_before_products() {
    let Some(pool) = test_pool().await else { return };
    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool.clone());
    let search = SearchRepository::new(pool);

    let oak = categories
        .command
        .create_category(&new_category("Oak furniture"))
        .await
        .unwrap();
    let pine = categories
        .command
        .create_category(&new_category("Pine furniture"))
        .await
        .unwrap();
    products
        .command
        .create_product(&new_product("Oak chair", pine.id))
        .await
        .unwrap();
    products
        .command
        .create_product(&new_product("Pine shelf", pine.id))
        .await
        .unwrap();

    let hits = search.search("oak").await.unwrap();

    assert_eq!(hits.len(), 2);
    assert!(matches!(&hits[0], SearchResult::Category(c) if c.id == oak.id));
    assert!(matches!(&hits[1], SearchResult::Product(p) if p.name == "Oak chair"));
}

#[tokio::test]
async fn products_only_hits_are_returned() {
    let Some(pool) = test_pool().await else { return };
    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool.clone());
    let search = SearchRepository::new(pool);

    let category = categories
        .command
        .create_category(&new_category("Seating"))
        .await
        .unwrap();
    products
        .command
        .create_product(&new_product("Walnut stool", category.id))
        .await
        .unwrap();

    let hits = search.search("walnut").await.unwrap();

    assert_eq!(hits.len(), 1);
    assert!(matches!(&hits[0], SearchResult::Product(_)));
}

#[tokio::test]
async fn nothing_matching_is_no_search_result() {
    let Some(pool) = test_pool().await else { return };
    let categories = CategoryRepository::new(pool.clone());
    let search = SearchRepository::new(pool);

    categories
        .command
        .create_category(&new_category("Seating"))
        .await
        .unwrap();

    assert!(matches!(
        search.search("marble").await,
        Err(RepositoryError::NoSearchResult)
    ));
}

#[tokio::test]
async fn malformed_query_is_invalid_input() {
    let Some(pool) = test_pool().await else { return };
    let search = SearchRepository::new(pool);

    assert!(matches!(
        search.search("oak &").await,
        Err(RepositoryError::InvalidInput(_))
    ));
}
