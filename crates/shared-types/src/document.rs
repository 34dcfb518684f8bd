use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::SignerProfile;

// ---------------------------------------------------------------------------
// IPFS gateway
// ---------------------------------------------------------------------------

/// Base URL of the content-addressed gateway serving document previews.
pub const IPFS_GATEWAY_BASE: &str = "https://gateway.pinata.cloud";

/// Build the preview URL for a pinned document.
///
/// The hash is not validated here — an invalid hash simply renders a broken
/// embed, which the gateway reports in its own error page.
pub fn gateway_url(ipfs_hash: &str) -> String {
    format!("{}/ipfs/{}", IPFS_GATEWAY_BASE, ipfs_hash)
}

// ---------------------------------------------------------------------------
// Document status
// ---------------------------------------------------------------------------

/// Signing status derived from the remaining-signature count.
///
/// A document is `Completed` exactly when no signatures remain outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Pending,
    Completed,
}

impl DocumentStatus {
    pub fn of(remaining_signatures: i32) -> Self {
        if remaining_signatures == 0 {
            DocumentStatus::Completed
        } else {
            DocumentStatus::Pending
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Completed => "Completed",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DocumentStatus::Completed)
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A document awaiting signatures (metadata only — the PDF lives on IPFS).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct PendingDocument {
    pub id: Uuid,
    pub ipfs_hash: String,
    pub required_signatures: i32,
    /// Invariant: `0 <= remaining_signatures <= required_signatures`,
    /// enforced by a CHECK constraint and the signing transaction.
    pub remaining_signatures: i32,
    pub created_at: DateTime<Utc>,
}

/// API response shape for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub id: String,
    pub ipfs_hash: String,
    pub required_signatures: i32,
    pub remaining_signatures: i32,
    pub created_at: String,
}

impl DocumentResponse {
    pub fn status(&self) -> DocumentStatus {
        DocumentStatus::of(self.remaining_signatures)
    }
}

impl From<PendingDocument> for DocumentResponse {
    fn from(d: PendingDocument) -> Self {
        Self {
            id: d.id.to_string(),
            ipfs_hash: d.ipfs_hash,
            required_signatures: d.required_signatures,
            remaining_signatures: d.remaining_signatures,
            created_at: d.created_at.to_rfc3339(),
        }
    }
}

// ---------------------------------------------------------------------------
// Signatures
// ---------------------------------------------------------------------------

/// A signature row joined with its signer's identity fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct SignatureRecord {
    pub id: Uuid,
    pub document_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub worldcoin_id: Option<String>,
    pub ethereum_address: Option<String>,
}

/// API response shape for a signature, with its signer resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureResponse {
    pub id: String,
    pub created_at: String,
    pub signer: SignerProfile,
}

impl From<SignatureRecord> for SignatureResponse {
    fn from(s: SignatureRecord) -> Self {
        Self {
            id: s.id.to_string(),
            created_at: s.created_at.to_rfc3339(),
            signer: SignerProfile {
                id: s.user_id.to_string(),
                worldcoin_id: s.worldcoin_id,
                ethereum_address: s.ethereum_address,
            },
        }
    }
}

/// Merged view of a document and its signatures, oldest signature first.
///
/// Produced in one piece by the detail server function — there is no
/// partial-success shape where the document loaded but signatures failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetail {
    pub document: DocumentResponse,
    pub signatures: Vec<SignatureResponse>,
}
