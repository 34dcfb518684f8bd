use dioxus::prelude::*;

// ── Document Server Functions ──────────────────────────────────

/// Fetch a document by its IPFS hash together with its signatures, oldest
/// signature first.
///
/// `Ok(None)` means no document matches the hash — a valid empty result,
/// distinct from a failed query. A signature lookup failure after a
/// successful document lookup escalates to the error path; no partial
/// result is produced.
#[server]
pub async fn get_document_detail(
    ipfs_hash: String,
) -> Result<Option<shared_types::DocumentDetail>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::{document, signature};

    let pool = get_db().await;

    let Some(doc) = document::find_by_hash(pool, &ipfs_hash)
        .await
        .map_err(|e| {
            tracing::error!(%ipfs_hash, error = %e, "document lookup failed");
            e.into_server_fn_error()
        })?
    else {
        return Ok(None);
    };

    let signatures = signature::list_by_document(pool, doc.id).await.map_err(|e| {
        tracing::error!(document_id = %doc.id, error = %e, "signature lookup failed");
        e.into_server_fn_error()
    })?;

    Ok(Some(shared_types::DocumentDetail {
        document: doc.into(),
        signatures: signatures.into_iter().map(Into::into).collect(),
    }))
}

/// List recently created documents, newest first.
#[server]
pub async fn list_documents(
    limit: Option<i64>,
) -> Result<Vec<shared_types::DocumentResponse>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::document;

    let pool = get_db().await;
    let limit = limit.unwrap_or(50).clamp(1, 200);

    let rows = document::list_recent(pool, limit)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Register a document for signing. The remaining count starts at the
/// required count.
#[server]
pub async fn create_document(
    ipfs_hash: String,
    required_signatures: i32,
) -> Result<shared_types::DocumentResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::document;
    use shared_types::AppError;

    super::auth::require_session()?;

    let ipfs_hash = ipfs_hash.trim().to_string();
    if ipfs_hash.is_empty() {
        return Err(AppError::bad_request("ipfs_hash must not be empty").into_server_fn_error());
    }

    let pool = get_db().await;
    let doc = document::create(pool, &ipfs_hash, required_signatures)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(document_id = %doc.id, %ipfs_hash, "document registered");

    Ok(doc.into())
}

/// Record the session user's signature on a document.
///
/// The completion callback on the client carries no payload — the page
/// refetches the document itself — but the new signature is returned for
/// callers that want it.
#[server]
pub async fn sign_document(
    document_id: String,
) -> Result<shared_types::SignatureResponse, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::signature;
    use shared_types::AppError;
    use uuid::Uuid;

    let claims = super::auth::require_session()?;

    let doc_uuid = Uuid::parse_str(&document_id)
        .map_err(|_| AppError::bad_request("Invalid document UUID").into_server_fn_error())?;

    let pool = get_db().await;
    let record = signature::record(pool, doc_uuid, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(document_id = %doc_uuid, user_id = %claims.sub, "signature recorded");

    Ok(record.into())
}
