use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUserCheck;
use dioxus_free_icons::Icon;
use shared_types::SignatureResponse;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

use crate::format_helpers::format_datetime_human;

/// Chronological list of collected signatures, oldest first. The card is
/// only rendered when at least one signature exists.
#[component]
pub fn SignatureTimelineCard(signatures: Vec<SignatureResponse>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                    "Signatures ({signatures.len()})"
                }
            }
            CardContent {
                ul { class: "signature-timeline",
                    for sig in signatures.iter() {
                        li { key: "{sig.id}", class: "signature-entry",
                            span { class: "signature-signer", {sig.signer.display_label()} }
                            span { class: "signature-time",
                                {format_datetime_human(&sig.created_at)}
                            }
                        }
                    }
                }
            }
        }
    }
}
