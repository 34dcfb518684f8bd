use crate::common::test_pool;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

#[tokio::test]
async fn find_or_create_creates_on_first_contact() {
    let (pool, _guard) = test_pool().await;

    let account = server::repo::user::find_or_create(&pool, Some("alice.worldcoin"), Some("0xabc"))
        .await
        .expect("create failed");

    assert_eq!(account.worldcoin_id.as_deref(), Some("alice.worldcoin"));
    assert_eq!(account.ethereum_address.as_deref(), Some("0xabc"));
}

#[tokio::test]
async fn find_or_create_is_idempotent_per_identity() {
    let (pool, _guard) = test_pool().await;

    let first = server::repo::user::find_or_create(&pool, Some("alice.worldcoin"), None)
        .await
        .expect("create failed");
    let second = server::repo::user::find_or_create(&pool, Some("alice.worldcoin"), None)
        .await
        .expect("lookup failed");

    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn find_or_create_matches_by_either_identity() {
    let (pool, _guard) = test_pool().await;

    let created = server::repo::user::find_or_create(&pool, Some("alice.worldcoin"), Some("0xabc"))
        .await
        .expect("create failed");

    let by_address = server::repo::user::find_or_create(&pool, None, Some("0xabc"))
        .await
        .expect("lookup failed");

    assert_eq!(created.id, by_address.id);
}

#[tokio::test]
async fn find_or_create_requires_an_identity() {
    let (pool, _guard) = test_pool().await;

    let err = server::repo::user::find_or_create(&pool, None, None)
        .await
        .expect_err("no identity should be rejected");
    assert_eq!(err.kind, AppErrorKind::BadRequest);

    // Empty strings are not identities either.
    let err = server::repo::user::find_or_create(&pool, Some(""), Some(""))
        .await
        .expect_err("empty identities should be rejected");
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}
