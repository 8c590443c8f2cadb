//! Tests for SqliteCategoryRepository.

use crate::db::{Database, DbError, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_category() {
    let db = setup_db().await;
    let repo = db.categories();

    let created = repo.create("Science").await.expect("Create should succeed");
    assert!(created.id > 0);
    assert_eq!(created.kind, "Science");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_nonexistent_category_returns_not_found() {
    let db = setup_db().await;

    let result = db.categories().get(999).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_categories_ordered_by_id() {
    let db = setup_db().await;
    let repo = db.categories();

    repo.create("Science").await.expect("Create should succeed");
    repo.create("Art").await.expect("Create should succeed");
    repo.create("Sports").await.expect("Create should succeed");

    let categories = repo.list().await.expect("List should succeed");
    assert_eq!(categories.len(), 3);

    let kinds: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();
    assert_eq!(kinds, vec!["Science", "Art", "Sports"]);

    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_category_with_empty_type_is_rejected() {
    let db = setup_db().await;

    let result = db.categories().create("").await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
}
