use dioxus::prelude::*;
use shared_types::{AppError, DocumentResponse};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, PageActions, PageHeader, PageTitle, Skeleton,
};

use super::status_badge::StatusBadge;
use crate::auth::use_auth;
use crate::format_helpers::{format_date_human, short_hash};
use crate::routes::Route;

#[component]
pub fn DocumentListPage() -> Element {
    let auth = use_auth();
    let mut show_form = use_signal(|| false);

    let mut data = use_resource(move || async move {
        server::api::list_documents(None)
            .await
            .map_err(|e| AppError::friendly_message(&e.to_string()))
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Documents" }
                PageActions {
                    if auth.is_authenticated() {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_form.toggle(),
                            "Register Document"
                        }
                    }
                }
            }

            if show_form() {
                RegisterDocumentForm {
                    on_created: move |_| {
                        show_form.set(false);
                        data.restart();
                    },
                }
            }

            match &*data.read() {
                Some(Ok(docs)) if docs.is_empty() => rsx! {
                    Card {
                        CardContent {
                            p { "No documents yet." }
                        }
                    }
                },
                Some(Ok(docs)) => rsx! {
                    ul { class: "document-list",
                        for doc in docs.iter() {
                            DocumentListEntry { key: "{doc.id}", doc: doc.clone() }
                        }
                    }
                },
                Some(Err(message)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "error-message", "{message}" }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton { class: "line" }
                        Skeleton { class: "line" }
                        Skeleton { class: "line" }
                    }
                },
            }
        }
    }
}

#[component]
fn DocumentListEntry(doc: DocumentResponse) -> Element {
    let collected = doc.required_signatures - doc.remaining_signatures;

    rsx! {
        li { class: "document-entry",
            Link { to: Route::DocumentDetail { ipfs_hash: doc.ipfs_hash.clone() },
                span { class: "document-hash", {short_hash(&doc.ipfs_hash)} }
                span { class: "document-progress",
                    "{collected} of {doc.required_signatures} signatures"
                }
                span { class: "document-created", {format_date_human(&doc.created_at)} }
                StatusBadge { status: doc.status() }
            }
        }
    }
}

/// Inline form to register a pinned document for signing.
#[component]
fn RegisterDocumentForm(on_created: EventHandler<()>) -> Element {
    let mut ipfs_hash = use_signal(String::new);
    let mut required = use_signal(|| "1".to_string());
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_: MouseEvent| {
        let hash = ipfs_hash.read().trim().to_string();
        let count: i32 = required.read().parse().unwrap_or(0);

        if hash.is_empty() {
            error.set(Some("Enter the document's IPFS hash.".to_string()));
            return;
        }
        if count < 1 {
            error.set(Some("At least one signature is required.".to_string()));
            return;
        }

        spawn(async move {
            submitting.set(true);
            error.set(None);
            match server::api::create_document(hash, count).await {
                Ok(_) => {
                    ipfs_hash.set(String::new());
                    required.set("1".to_string());
                    submitting.set(false);
                    on_created.call(());
                }
                Err(e) => {
                    submitting.set(false);
                    error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
        });
    };

    rsx! {
        Card {
            CardContent {
                div { class: "form-field",
                    label { r#for: "register-hash", "IPFS hash" }
                    input {
                        id: "register-hash",
                        value: "{ipfs_hash}",
                        placeholder: "Qm...",
                        oninput: move |evt| ipfs_hash.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "register-required", "Required signatures" }
                    input {
                        id: "register-required",
                        r#type: "number",
                        min: "1",
                        value: "{required}",
                        oninput: move |evt| required.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "error-message", "{message}" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Registering..." } else { "Register" }
                }
            }
        }
    }
}
