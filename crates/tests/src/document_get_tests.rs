use crate::common::{seed_document, test_pool};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn find_by_hash_returns_exact_match() {
    let (pool, _guard) = test_pool().await;

    let doc = seed_document(&pool, "QmTestHashAlpha", 3).await;

    let found = server::repo::document::find_by_hash(&pool, "QmTestHashAlpha")
        .await
        .expect("query failed")
        .expect("document should exist");

    assert_eq!(found.id, doc.id);
    assert_eq!(found.ipfs_hash, "QmTestHashAlpha");
    assert_eq!(found.required_signatures, 3);
    assert_eq!(found.remaining_signatures, 3);
}

#[tokio::test]
async fn find_by_hash_unknown_is_none_not_error() {
    let (pool, _guard) = test_pool().await;

    seed_document(&pool, "QmTestHashAlpha", 3).await;

    let found = server::repo::document::find_by_hash(&pool, "QmNoSuchHash")
        .await
        .expect("query failed");

    assert!(found.is_none());
}

#[tokio::test]
async fn find_by_hash_is_exact_no_prefix_match() {
    let (pool, _guard) = test_pool().await;

    seed_document(&pool, "QmTestHashAlpha", 3).await;

    let found = server::repo::document::find_by_hash(&pool, "QmTestHash")
        .await
        .expect("query failed");

    assert!(found.is_none());
}

#[tokio::test]
async fn find_by_id_roundtrips() {
    let (pool, _guard) = test_pool().await;

    let doc = seed_document(&pool, "QmTestHashBeta", 1).await;

    let found = server::repo::document::find_by_id(&pool, doc.id)
        .await
        .expect("query failed")
        .expect("document should exist");

    assert_eq!(found.ipfs_hash, "QmTestHashBeta");
}
