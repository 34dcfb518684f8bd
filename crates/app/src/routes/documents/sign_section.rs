use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, ButtonVariant};

use crate::format_helpers::short_hash;

/// Embedded signing flow shown inside the details card.
///
/// On success the completion callback fires exactly once, with no payload —
/// the page refetches the document rather than patching its local copy.
#[component]
pub fn SignDocumentSection(
    document_id: String,
    ipfs_hash: String,
    on_complete: EventHandler<()>,
) -> Element {
    let mut signing = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_sign = move |_: MouseEvent| {
        let doc_id = document_id.clone();
        spawn(async move {
            signing.set(true);
            error.set(None);
            match server::api::sign_document(doc_id).await {
                Ok(_) => {
                    on_complete.call(());
                }
                Err(e) => {
                    signing.set(false);
                    error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
        });
    };

    rsx! {
        div { class: "sign-section",
            p {
                "You are about to sign "
                code { {short_hash(&ipfs_hash)} }
                ". This action cannot be undone."
            }
            if let Some(message) = error() {
                p { class: "error-message", "{message}" }
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: signing(),
                onclick: handle_sign,
                if signing() { "Signing..." } else { "Confirm Signature" }
            }
        }
    }
}
