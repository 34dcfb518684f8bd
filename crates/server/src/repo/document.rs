use shared_types::{AppError, PendingDocument};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Find a document by its exact IPFS hash.
///
/// Zero rows is a valid empty result, not an error — the caller decides
/// whether that means "not found".
pub async fn find_by_hash(
    pool: &Pool<Postgres>,
    ipfs_hash: &str,
) -> Result<Option<PendingDocument>, AppError> {
    sqlx::query_as::<_, PendingDocument>(
        r#"
        SELECT id, ipfs_hash, required_signatures, remaining_signatures, created_at
        FROM pending_documents
        WHERE ipfs_hash = $1
        "#,
    )
    .bind(ipfs_hash)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Find a document by ID.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<PendingDocument>, AppError> {
    sqlx::query_as::<_, PendingDocument>(
        r#"
        SELECT id, ipfs_hash, required_signatures, remaining_signatures, created_at
        FROM pending_documents
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Create a document awaiting `required` signatures.
/// The remaining count starts equal to the required count.
pub async fn create(
    pool: &Pool<Postgres>,
    ipfs_hash: &str,
    required_signatures: i32,
) -> Result<PendingDocument, AppError> {
    if required_signatures <= 0 {
        return Err(AppError::bad_request(
            "required_signatures must be greater than zero",
        ));
    }

    sqlx::query_as::<_, PendingDocument>(
        r#"
        INSERT INTO pending_documents (ipfs_hash, required_signatures, remaining_signatures)
        VALUES ($1, $2, $2)
        RETURNING id, ipfs_hash, required_signatures, remaining_signatures, created_at
        "#,
    )
    .bind(ipfs_hash)
    .bind(required_signatures)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// List the most recently created documents, newest first.
pub async fn list_recent(
    pool: &Pool<Postgres>,
    limit: i64,
) -> Result<Vec<PendingDocument>, AppError> {
    sqlx::query_as::<_, PendingDocument>(
        r#"
        SELECT id, ipfs_hash, required_signatures, remaining_signatures, created_at
        FROM pending_documents
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
