use shared_types::{AppError, UserAccount};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Find a user by either identity field.
pub async fn find_by_identity(
    pool: &Pool<Postgres>,
    worldcoin_id: Option<&str>,
    ethereum_address: Option<&str>,
) -> Result<Option<UserAccount>, AppError> {
    sqlx::query_as::<_, UserAccount>(
        r#"
        SELECT id, worldcoin_id, ethereum_address, created_at
        FROM users
        WHERE ($1::TEXT IS NOT NULL AND worldcoin_id = $1)
           OR ($2::TEXT IS NOT NULL AND ethereum_address = $2)
        LIMIT 1
        "#,
    )
    .bind(worldcoin_id)
    .bind(ethereum_address)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find a user by primary key.
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<UserAccount>, AppError> {
    sqlx::query_as::<_, UserAccount>(
        r#"
        SELECT id, worldcoin_id, ethereum_address, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find the account for the given identities, creating it on first contact.
/// At least one identity must be supplied.
pub async fn find_or_create(
    pool: &Pool<Postgres>,
    worldcoin_id: Option<&str>,
    ethereum_address: Option<&str>,
) -> Result<UserAccount, AppError> {
    let worldcoin_id = worldcoin_id.filter(|s| !s.is_empty());
    let ethereum_address = ethereum_address.filter(|s| !s.is_empty());

    if worldcoin_id.is_none() && ethereum_address.is_none() {
        return Err(AppError::bad_request(
            "A Worldcoin id or an Ethereum address is required",
        ));
    }

    if let Some(existing) = find_by_identity(pool, worldcoin_id, ethereum_address).await? {
        return Ok(existing);
    }

    sqlx::query_as::<_, UserAccount>(
        r#"
        INSERT INTO users (worldcoin_id, ethereum_address)
        VALUES ($1, $2)
        RETURNING id, worldcoin_id, ethereum_address, created_at
        "#,
    )
    .bind(worldcoin_id)
    .bind(ethereum_address)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
