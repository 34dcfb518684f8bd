use crate::common::{seed_document, test_pool};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

#[tokio::test]
async fn create_starts_remaining_at_required() {
    let (pool, _guard) = test_pool().await;

    let doc = server::repo::document::create(&pool, "QmCreateTest", 5)
        .await
        .expect("create failed");

    assert_eq!(doc.required_signatures, 5);
    assert_eq!(doc.remaining_signatures, 5);
}

#[tokio::test]
async fn create_rejects_non_positive_required_count() {
    let (pool, _guard) = test_pool().await;

    let err = server::repo::document::create(&pool, "QmCreateTest", 0)
        .await
        .expect_err("zero required signatures should be rejected");
    assert_eq!(err.kind, AppErrorKind::BadRequest);

    let err = server::repo::document::create(&pool, "QmCreateTest", -2)
        .await
        .expect_err("negative required signatures should be rejected");
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}

#[tokio::test]
async fn create_rejects_duplicate_hash() {
    let (pool, _guard) = test_pool().await;

    seed_document(&pool, "QmDuplicateHash", 2).await;

    let err = server::repo::document::create(&pool, "QmDuplicateHash", 3)
        .await
        .expect_err("duplicate hash should conflict");

    assert_eq!(err.kind, AppErrorKind::Conflict);
}
