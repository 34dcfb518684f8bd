use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Accounts and viewer context
// ---------------------------------------------------------------------------

/// A signer account as stored in the database.
///
/// At least one of the two identity fields is present (CHECK constraint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct UserAccount {
    pub id: Uuid,
    pub worldcoin_id: Option<String>,
    pub ethereum_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The authenticated viewer, provided as ambient context at the app root.
///
/// `name` carries the Worldcoin id and `address` the Ethereum address.
/// An absent `CurrentUser` (the context holds `None`) means unauthenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Identity fields of a signature's signer, as joined into signature rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignerProfile {
    pub id: String,
    pub worldcoin_id: Option<String>,
    pub ethereum_address: Option<String>,
}

// ---------------------------------------------------------------------------
// Signer identity matching
// ---------------------------------------------------------------------------

/// One way a signer can be identified.
///
/// Matching is variant-aware: a Worldcoin id never equals an Ethereum
/// address even when the raw strings coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignerIdentity {
    Worldcoin(String),
    Ethereum(String),
}

fn identities(
    worldcoin_id: Option<&String>,
    ethereum_address: Option<&String>,
) -> Vec<SignerIdentity> {
    let mut ids = Vec::with_capacity(2);
    if let Some(w) = worldcoin_id.filter(|w| !w.is_empty()) {
        ids.push(SignerIdentity::Worldcoin(w.clone()));
    }
    if let Some(a) = ethereum_address.filter(|a| !a.is_empty()) {
        ids.push(SignerIdentity::Ethereum(a.clone()));
    }
    ids
}

impl SignerProfile {
    pub fn identities(&self) -> Vec<SignerIdentity> {
        identities(self.worldcoin_id.as_ref(), self.ethereum_address.as_ref())
    }

    /// Short display label: the Worldcoin id if present, else a truncated
    /// Ethereum address, else "Unknown signer".
    ///
    /// Truncation counts chars, not bytes — identity strings are stored
    /// unvalidated, so multibyte input must not split a character.
    pub fn display_label(&self) -> String {
        if let Some(w) = self.worldcoin_id.as_ref().filter(|w| !w.is_empty()) {
            return w.clone();
        }
        if let Some(a) = self.ethereum_address.as_ref().filter(|a| !a.is_empty()) {
            let chars: Vec<char> = a.chars().collect();
            if chars.len() > 10 {
                let head: String = chars[..6].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                return format!("{head}…{tail}");
            }
            return a.clone();
        }
        "Unknown signer".to_string()
    }
}

impl CurrentUser {
    pub fn identities(&self) -> Vec<SignerIdentity> {
        identities(self.name.as_ref(), self.address.as_ref())
    }
}

/// True when any identity of the signer equals any identity of the viewer.
/// Either match (Worldcoin id or Ethereum address) is sufficient on its own.
pub fn identity_matches(signer: &SignerProfile, user: &CurrentUser) -> bool {
    let user_ids = user.identities();
    signer.identities().iter().any(|id| user_ids.contains(id))
}
