use pretty_assertions::assert_eq;
use uuid::Uuid;

fn ensure_secret() {
    if std::env::var("SESSION_SECRET").is_err() {
        std::env::set_var("SESSION_SECRET", "test-secret-not-for-production");
    }
}

#[tokio::test]
async fn session_token_roundtrips_claims() {
    ensure_secret();

    let user_id = Uuid::new_v4();
    let token = server::auth::session::create_session_token(
        user_id,
        Some("alice.worldcoin"),
        Some("0xabc"),
    )
    .expect("token creation failed");

    let claims = server::auth::session::validate_session_token(&token)
        .expect("token validation failed");

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.name.as_deref(), Some("alice.worldcoin"));
    assert_eq!(claims.address.as_deref(), Some("0xabc"));
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn session_token_preserves_absent_identities() {
    ensure_secret();

    let token = server::auth::session::create_session_token(Uuid::new_v4(), None, Some("0xabc"))
        .expect("token creation failed");
    let claims = server::auth::session::validate_session_token(&token)
        .expect("token validation failed");

    assert_eq!(claims.name, None);
    assert_eq!(claims.address.as_deref(), Some("0xabc"));
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    ensure_secret();

    let token = server::auth::session::create_session_token(Uuid::new_v4(), Some("alice"), None)
        .expect("token creation failed");

    let mut tampered = token.clone();
    tampered.push('x');
    assert!(server::auth::session::validate_session_token(&tampered).is_err());

    assert!(server::auth::session::validate_session_token("not.a.token").is_err());
}
