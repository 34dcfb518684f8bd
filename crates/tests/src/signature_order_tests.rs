use crate::common::{seed_document, seed_user, test_pool};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn signatures_list_oldest_first_with_signer_identity() {
    let (pool, _guard) = test_pool().await;

    let doc = seed_document(&pool, "QmOrderTest", 3).await;
    let alice = seed_user(&pool, Some("alice.worldcoin"), None).await;
    let bob = seed_user(&pool, None, Some("0xbob")).await;

    server::repo::signature::record(&pool, doc.id, alice.id)
        .await
        .expect("alice sign failed");
    server::repo::signature::record(&pool, doc.id, bob.id)
        .await
        .expect("bob sign failed");

    // Force distinct, inverted insertion timestamps: make alice's signature
    // clearly older so ordering is by created_at, not insertion order noise.
    sqlx::query("UPDATE user_signatures SET created_at = created_at - INTERVAL '1 hour' WHERE user_id = $1")
        .bind(alice.id)
        .execute(&pool)
        .await
        .expect("timestamp update failed");

    let signatures = server::repo::signature::list_by_document(&pool, doc.id)
        .await
        .expect("list failed");

    assert_eq!(signatures.len(), 2);
    assert_eq!(signatures[0].worldcoin_id.as_deref(), Some("alice.worldcoin"));
    assert_eq!(signatures[0].ethereum_address, None);
    assert_eq!(signatures[1].worldcoin_id, None);
    assert_eq!(signatures[1].ethereum_address.as_deref(), Some("0xbob"));
}

#[tokio::test]
async fn signatures_scoped_to_their_document() {
    let (pool, _guard) = test_pool().await;

    let doc_a = seed_document(&pool, "QmScopeA", 2).await;
    let doc_b = seed_document(&pool, "QmScopeB", 2).await;
    let alice = seed_user(&pool, Some("alice.worldcoin"), None).await;

    server::repo::signature::record(&pool, doc_a.id, alice.id)
        .await
        .expect("sign failed");

    let a_sigs = server::repo::signature::list_by_document(&pool, doc_a.id)
        .await
        .expect("list failed");
    let b_sigs = server::repo::signature::list_by_document(&pool, doc_b.id)
        .await
        .expect("list failed");

    assert_eq!(a_sigs.len(), 1);
    assert!(b_sigs.is_empty());
}

#[tokio::test]
async fn no_signatures_is_an_empty_list() {
    let (pool, _guard) = test_pool().await;

    let doc = seed_document(&pool, "QmEmptyTimeline", 3).await;

    let signatures = server::repo::signature::list_by_document(&pool, doc.id)
        .await
        .expect("list failed");

    assert!(signatures.is_empty());
}
