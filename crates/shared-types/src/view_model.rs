use crate::document::DocumentDetail;
use crate::user::{identity_matches, CurrentUser};

// ---------------------------------------------------------------------------
// Derived state for the document detail page
// ---------------------------------------------------------------------------

/// True iff a document is loaded, it still has outstanding signatures, and
/// an authenticated viewer is present.
pub fn can_sign(detail: Option<&DocumentDetail>, user: Option<&CurrentUser>) -> bool {
    match (detail, user) {
        (Some(d), Some(_)) => d.document.remaining_signatures > 0,
        _ => false,
    }
}

/// True iff some signature's signer matches the viewer by Worldcoin id or
/// Ethereum address. False for an absent viewer or an absent document.
pub fn has_user_signed(detail: Option<&DocumentDetail>, user: Option<&CurrentUser>) -> bool {
    match (detail, user) {
        (Some(d), Some(u)) => d.signatures.iter().any(|s| identity_matches(&s.signer, u)),
        _ => false,
    }
}

/// What the signing slot of the details card shows. Exactly one variant is
/// selected per render; the precedence order is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningAffordance {
    /// The viewer already signed — show the notice, no action available.
    AlreadySigned,
    /// Signing is possible and the embedded flow is not open — offer the trigger.
    Offer,
    /// Signing is possible and the embedded flow is open.
    InProgress,
    /// Nothing to render in the slot.
    Hidden,
}

/// Evaluate the signing slot with the fixed precedence:
/// already-signed notice, then the trigger, then the embedded flow, then nothing.
pub fn signing_affordance(
    detail: Option<&DocumentDetail>,
    user: Option<&CurrentUser>,
    section_visible: bool,
) -> SigningAffordance {
    if has_user_signed(detail, user) {
        SigningAffordance::AlreadySigned
    } else if can_sign(detail, user) && !section_visible {
        SigningAffordance::Offer
    } else if can_sign(detail, user) && section_visible {
        SigningAffordance::InProgress
    } else {
        SigningAffordance::Hidden
    }
}
