use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_types::{
    gateway_url, signing_affordance, AppError, CurrentUser, DocumentDetail, SigningAffordance,
};
use shared_ui::{
    Button, ButtonVariant, Card, CardAction, CardContent, CardHeader, CardTitle, PageActions,
    PageHeader, PageTitle, Skeleton,
};

use super::sign_section::SignDocumentSection;
use super::signature_timeline::SignatureTimelineCard;
use super::status_badge::StatusBadge;
use crate::auth::use_auth;
use crate::format_helpers::{format_date_human, short_hash};
use crate::routes::Route;

#[component]
pub fn DocumentDetailPage(ipfs_hash: ReadOnlySignal<String>) -> Element {
    // One fetch per hash. The hash is read in the sync part of the closure,
    // so the resource tracks it and restarts on detail-to-detail navigation.
    // The document and its signatures arrive together; there is no partial
    // state where one loaded and the other failed.
    let mut data = use_resource(move || {
        let hash = ipfs_hash();
        async move {
            server::api::get_document_detail(hash)
                .await
                .map_err(|e| AppError::friendly_message(&e.to_string()))
        }
    });

    let mut signing_visible = use_signal(|| false);

    // A new hash means a new document: close any open signing section.
    use_effect(move || {
        let _ = ipfs_hash();
        signing_visible.set(false);
    });

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Ok(Some(detail))) => rsx! {
                    DocumentDetailView {
                        detail: detail.clone(),
                        signing_visible: signing_visible,
                        on_signing_complete: move |_| {
                            signing_visible.set(false);
                            data.restart();
                        },
                    }
                },
                Some(Ok(None)) => rsx! {
                    PageHeader {
                        PageTitle { "Document Not Found" }
                        PageActions {
                            Link { to: Route::DocumentList {},
                                Button { variant: ButtonVariant::Secondary, "All Documents" }
                            }
                        }
                    }
                    Card {
                        CardContent {
                            p { "No document matches the hash " code { "{ipfs_hash}" } "." }
                        }
                    }
                },
                Some(Err(message)) => rsx! {
                    PageHeader {
                        PageTitle { "Document" }
                    }
                    Card {
                        CardContent {
                            p { class: "error-message", "{message}" }
                        }
                    }
                },
                None => rsx! {
                    LoadingSkeleton {}
                },
            }
        }
    }
}

#[component]
fn DocumentDetailView(
    detail: DocumentDetail,
    signing_visible: Signal<bool>,
    on_signing_complete: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();

    rsx! {
        PageHeader {
            PageTitle { "Document: {short_hash(&detail.document.ipfs_hash)}" }
            PageActions {
                Link { to: Route::DocumentList {},
                    Button { variant: ButtonVariant::Secondary, "All Documents" }
                }
            }
        }
        div { class: "detail-grid",
            DocumentPreviewCard { ipfs_hash: detail.document.ipfs_hash.clone() }
            DocumentDetailsCard {
                detail: detail.clone(),
                user: user,
                signing_visible: signing_visible,
                on_signing_complete: on_signing_complete,
            }
        }
        if !detail.signatures.is_empty() {
            SignatureTimelineCard { signatures: detail.signatures.clone() }
        }
    }
}

/// PDF preview embedded from the content-addressed gateway.
///
/// The toggle switches between a compact pane and a full-height pane; the
/// embed URL never changes, only the frame size.
#[component]
fn DocumentPreviewCard(ipfs_hash: String) -> Element {
    let mut full_view = use_signal(|| false);
    let preview_url = gateway_url(&ipfs_hash);

    let frame_class = if full_view() {
        "preview-frame full"
    } else {
        "preview-frame compact"
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                    "Document Preview"
                }
                CardAction {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| full_view.toggle(),
                        if full_view() { "Compact View" } else { "Full View" }
                    }
                }
            }
            CardContent { class: "flush",
                iframe {
                    class: frame_class,
                    src: "{preview_url}",
                    title: "Document preview",
                }
            }
        }
    }
}

/// Metadata card: creation date, status badge, signature counters, and the
/// signing slot. The remaining-count row only appears while signatures are
/// still outstanding.
#[component]
fn DocumentDetailsCard(
    detail: DocumentDetail,
    user: Option<CurrentUser>,
    signing_visible: Signal<bool>,
    on_signing_complete: EventHandler<()>,
) -> Element {
    let status = detail.document.status();
    let affordance = signing_affordance(Some(&detail), user.as_ref(), signing_visible());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Details" }
            }
            CardContent {
                dl { class: "detail-rows",
                    div { class: "detail-row",
                        dt { "Created" }
                        dd { {format_date_human(&detail.document.created_at)} }
                    }
                    div { class: "detail-row",
                        dt { "Status" }
                        dd {
                            StatusBadge { status: status }
                        }
                    }
                    div { class: "detail-row",
                        dt { "Required signatures" }
                        dd { "{detail.document.required_signatures}" }
                    }
                    if detail.document.remaining_signatures > 0 {
                        div { class: "detail-row",
                            dt { "Remaining signatures" }
                            dd { "{detail.document.remaining_signatures}" }
                        }
                    }
                }

                match affordance {
                    SigningAffordance::AlreadySigned => rsx! {
                        p { class: "signed-notice", "You have already signed this document." }
                    },
                    SigningAffordance::Offer => rsx! {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| signing_visible.set(true),
                            "Sign Document"
                        }
                    },
                    SigningAffordance::InProgress => rsx! {
                        SignDocumentSection {
                            document_id: detail.document.id.clone(),
                            ipfs_hash: detail.document.ipfs_hash.clone(),
                            on_complete: on_signing_complete,
                        }
                    },
                    SigningAffordance::Hidden => rsx! {},
                }
            }
        }
    }
}

#[component]
fn LoadingSkeleton() -> Element {
    rsx! {
        div { class: "loading",
            Skeleton { class: "line" }
            Skeleton { class: "tile" }
            Skeleton { class: "block" }
        }
    }
}
