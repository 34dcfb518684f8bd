use crate::common::{seed_document, test_pool};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn list_recent_orders_newest_first() {
    let (pool, _guard) = test_pool().await;

    let first = seed_document(&pool, "QmListFirst", 1).await;
    let second = seed_document(&pool, "QmListSecond", 1).await;

    // Distinct timestamps so the ordering is deterministic.
    sqlx::query("UPDATE pending_documents SET created_at = created_at - INTERVAL '1 hour' WHERE id = $1")
        .bind(first.id)
        .execute(&pool)
        .await
        .expect("timestamp update failed");

    let docs = server::repo::document::list_recent(&pool, 10)
        .await
        .expect("list failed");

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, second.id);
    assert_eq!(docs[1].id, first.id);
}

#[tokio::test]
async fn list_recent_respects_limit() {
    let (pool, _guard) = test_pool().await;

    seed_document(&pool, "QmLimitA", 1).await;
    seed_document(&pool, "QmLimitB", 1).await;
    seed_document(&pool, "QmLimitC", 1).await;

    let docs = server::repo::document::list_recent(&pool, 2)
        .await
        .expect("list failed");

    assert_eq!(docs.len(), 2);
}

#[tokio::test]
async fn list_recent_empty_database() {
    let (pool, _guard) = test_pool().await;

    let docs = server::repo::document::list_recent(&pool, 10)
        .await
        .expect("list failed");

    assert!(docs.is_empty());
}
