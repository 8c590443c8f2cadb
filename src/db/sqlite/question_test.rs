//! Tests for SqliteQuestionRepository.

use crate::db::{Database, DbError, NewQuestion, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: "42".to_string(),
        category,
        difficulty: 3,
        rating: 4,
    }
}

/// Create a category and `count` questions in it; returns the category id.
async fn seed_questions(db: &SqliteDatabase, kind: &str, count: usize) -> i64 {
    let category = db
        .categories()
        .create(kind)
        .await
        .expect("Create category should succeed");

    for i in 0..count {
        db.questions()
            .create(&new_question(&format!("{kind} question {i}"), category.id))
            .await
            .expect("Create question should succeed");
    }

    category.id
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_question() {
    let db = setup_db().await;
    let category = seed_questions(&db, "Science", 0).await;

    let created = db
        .questions()
        .create(&new_question("What is entropy?", category))
        .await
        .expect("Create should succeed");
    assert!(created.id > 0);

    let retrieved = db
        .questions()
        .get(created.id)
        .await
        .expect("Get should succeed");
    assert_eq!(retrieved, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_question_with_unknown_category_is_rejected() {
    let db = setup_db().await;

    let result = db.questions().create(&new_question("Orphan?", 999)).await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_question_with_empty_text_is_rejected() {
    let db = setup_db().await;
    let category = seed_questions(&db, "Science", 0).await;

    let result = db.questions().create(&new_question("", category)).await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_question_removes_it() {
    let db = setup_db().await;
    let category = seed_questions(&db, "Science", 0).await;

    let created = db
        .questions()
        .create(&new_question("Short lived?", category))
        .await
        .expect("Create should succeed");

    db.questions()
        .delete(created.id)
        .await
        .expect("Delete should succeed");

    let result = db.questions().get(created.id).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_nonexistent_question_returns_not_found() {
    let db = setup_db().await;

    let result = db.questions().delete(999).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn count_reflects_inserts() {
    let db = setup_db().await;

    assert_eq!(db.questions().count().await.expect("Count should succeed"), 0);

    seed_questions(&db, "Science", 3).await;
    assert_eq!(db.questions().count().await.expect("Count should succeed"), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_page_applies_offset_and_limit_in_id_order() {
    let db = setup_db().await;
    seed_questions(&db, "Science", 25).await;

    let page = db
        .questions()
        .list_page(20, 10)
        .await
        .expect("List should succeed");
    assert_eq!(page.len(), 5);

    let all = db.questions().list_all().await.expect("List should succeed");
    assert_eq!(page, all[20..]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_by_category_filters_and_orders() {
    let db = setup_db().await;
    let science = seed_questions(&db, "Science", 3).await;
    let art = seed_questions(&db, "Art", 2).await;

    let science_questions = db
        .questions()
        .list_by_category(science)
        .await
        .expect("List should succeed");
    assert_eq!(science_questions.len(), 3);
    assert!(science_questions.iter().all(|q| q.category == science));

    let art_questions = db
        .questions()
        .list_by_category(art)
        .await
        .expect("List should succeed");
    assert_eq!(art_questions.len(), 2);

    let ids: Vec<i64> = science_questions.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_all_returns_every_question() {
    let db = setup_db().await;
    seed_questions(&db, "Science", 2).await;
    seed_questions(&db, "Art", 2).await;

    let all = db.questions().list_all().await.expect("List should succeed");
    assert_eq!(all.len(), 4);
}
