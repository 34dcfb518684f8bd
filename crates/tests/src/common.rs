use shared_types::{PendingDocument, UserAccount};
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;

/// Global mutex ensuring tests run sequentially against the shared database.
/// Each test acquires this lock before truncating and seeding, preventing
/// concurrent tests from interfering with each other's data.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

/// Connect to the test database, run migrations, and wipe all data.
/// The returned `MutexGuard` must be held for the duration of the test.
pub async fn test_pool() -> (Pool<Postgres>, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();

    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set for tests");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE user_signatures, pending_documents, users CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    (pool, guard)
}

/// Seed a signer account with the given identities.
pub async fn seed_user(
    pool: &Pool<Postgres>,
    worldcoin_id: Option<&str>,
    ethereum_address: Option<&str>,
) -> UserAccount {
    server::repo::user::find_or_create(pool, worldcoin_id, ethereum_address)
        .await
        .expect("Failed to seed user")
}

/// Seed a document awaiting the given number of signatures.
pub async fn seed_document(
    pool: &Pool<Postgres>,
    ipfs_hash: &str,
    required_signatures: i32,
) -> PendingDocument {
    server::repo::document::create(pool, ipfs_hash, required_signatures)
        .await
        .expect("Failed to seed document")
}
