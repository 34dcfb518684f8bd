use shared_types::{AppError, SignatureRecord};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Signatures for a document joined with signer identity fields, ordered by
/// creation time ascending (oldest first, the display order).
pub async fn list_by_document(
    pool: &Pool<Postgres>,
    document_id: Uuid,
) -> Result<Vec<SignatureRecord>, AppError> {
    sqlx::query_as::<_, SignatureRecord>(
        r#"
        SELECT s.id, s.document_id, s.user_id, s.created_at,
               u.worldcoin_id, u.ethereum_address
        FROM user_signatures s
        JOIN users u ON u.id = s.user_id
        WHERE s.document_id = $1
        ORDER BY s.created_at ASC
        "#,
    )
    .bind(document_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Record a signature and decrement the document's remaining count in one
/// transaction.
///
/// The decrement is guarded by `remaining_signatures > 0`, so the count
/// never goes below zero and a completed document rejects further
/// signatures. A duplicate signature by the same user trips the
/// `(document_id, user_id)` unique constraint and rolls the decrement back.
pub async fn record(
    pool: &Pool<Postgres>,
    document_id: Uuid,
    user_id: Uuid,
) -> Result<SignatureRecord, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let decremented = sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE pending_documents
        SET remaining_signatures = remaining_signatures - 1
        WHERE id = $1 AND remaining_signatures > 0
        RETURNING remaining_signatures
        "#,
    )
    .bind(document_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    if decremented.is_none() {
        // Either the document does not exist or it is already completed.
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM pending_documents WHERE id = $1)",
        )
        .bind(document_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

        return Err(if exists {
            AppError::conflict("Document no longer accepts signatures")
        } else {
            AppError::not_found("Document not found")
        });
    }

    let record = sqlx::query_as::<_, SignatureRecord>(
        r#"
        WITH ins AS (
            INSERT INTO user_signatures (document_id, user_id)
            VALUES ($1, $2)
            RETURNING id, document_id, user_id, created_at
        )
        SELECT ins.id, ins.document_id, ins.user_id, ins.created_at,
               u.worldcoin_id, u.ethereum_address
        FROM ins
        JOIN users u ON u.id = ins.user_id
        "#,
    )
    .bind(document_id)
    .bind(user_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(record)
}
