use crate::common::{seed_document, seed_user, test_pool};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;
use uuid::Uuid;

#[tokio::test]
async fn signing_decrements_remaining_count() {
    let (pool, _guard) = test_pool().await;

    let doc = seed_document(&pool, "QmSignTest", 3).await;
    let alice = seed_user(&pool, Some("alice.worldcoin"), None).await;

    let record = server::repo::signature::record(&pool, doc.id, alice.id)
        .await
        .expect("sign failed");
    assert_eq!(record.worldcoin_id.as_deref(), Some("alice.worldcoin"));

    let updated = server::repo::document::find_by_id(&pool, doc.id)
        .await
        .expect("query failed")
        .expect("document should exist");
    assert_eq!(updated.remaining_signatures, 2);
    assert_eq!(updated.required_signatures, 3);
}

#[tokio::test]
async fn last_signature_completes_the_document() {
    let (pool, _guard) = test_pool().await;

    let doc = seed_document(&pool, "QmCompleteTest", 2).await;
    let alice = seed_user(&pool, Some("alice.worldcoin"), None).await;
    let bob = seed_user(&pool, None, Some("0xbob")).await;

    server::repo::signature::record(&pool, doc.id, alice.id)
        .await
        .expect("alice sign failed");
    server::repo::signature::record(&pool, doc.id, bob.id)
        .await
        .expect("bob sign failed");

    let updated = server::repo::document::find_by_id(&pool, doc.id)
        .await
        .expect("query failed")
        .expect("document should exist");
    assert_eq!(updated.remaining_signatures, 0);
    assert!(shared_types::DocumentStatus::of(updated.remaining_signatures).is_complete());
}

#[tokio::test]
async fn completed_document_rejects_further_signatures() {
    let (pool, _guard) = test_pool().await;

    let doc = seed_document(&pool, "QmFullTest", 1).await;
    let alice = seed_user(&pool, Some("alice.worldcoin"), None).await;
    let bob = seed_user(&pool, None, Some("0xbob")).await;

    server::repo::signature::record(&pool, doc.id, alice.id)
        .await
        .expect("alice sign failed");

    let err = server::repo::signature::record(&pool, doc.id, bob.id)
        .await
        .expect_err("completed document should reject signatures");
    assert_eq!(err.kind, AppErrorKind::Conflict);

    // The failed attempt must not have touched the count.
    let updated = server::repo::document::find_by_id(&pool, doc.id)
        .await
        .expect("query failed")
        .expect("document should exist");
    assert_eq!(updated.remaining_signatures, 0);
}

#[tokio::test]
async fn duplicate_signature_by_same_user_conflicts() {
    let (pool, _guard) = test_pool().await;

    let doc = seed_document(&pool, "QmDupSignTest", 3).await;
    let alice = seed_user(&pool, Some("alice.worldcoin"), None).await;

    server::repo::signature::record(&pool, doc.id, alice.id)
        .await
        .expect("first sign failed");

    let err = server::repo::signature::record(&pool, doc.id, alice.id)
        .await
        .expect_err("second signature by the same user should conflict");
    assert_eq!(err.kind, AppErrorKind::Conflict);

    // The rolled-back attempt must not have decremented the count.
    let updated = server::repo::document::find_by_id(&pool, doc.id)
        .await
        .expect("query failed")
        .expect("document should exist");
    assert_eq!(updated.remaining_signatures, 2);

    let signatures = server::repo::signature::list_by_document(&pool, doc.id)
        .await
        .expect("list failed");
    assert_eq!(signatures.len(), 1);
}

#[tokio::test]
async fn signing_unknown_document_is_not_found() {
    let (pool, _guard) = test_pool().await;

    let alice = seed_user(&pool, Some("alice.worldcoin"), None).await;

    let err = server::repo::signature::record(&pool, Uuid::new_v4(), alice.id)
        .await
        .expect_err("unknown document should be not found");
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
