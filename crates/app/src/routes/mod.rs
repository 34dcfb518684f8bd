pub mod connect;
pub mod documents;
pub mod not_found;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdShield};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::auth::use_auth;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    DocumentList {},
    #[route("/document/:ipfs_hash")]
    DocumentDetail { ipfs_hash: String },
    #[route("/connect")]
    Connect {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main app layout: brand header with nav and the session control.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();
    let user = auth.current_user.read().clone();

    // Short label for the header: Worldcoin id first, else the address.
    let viewer_label = user.as_ref().map(|u| {
        u.name
            .clone()
            .filter(|n| !n.is_empty())
            .or_else(|| u.address.clone())
            .unwrap_or_else(|| "Connected".to_string())
    });

    let handle_disconnect = move |_: MouseEvent| {
        spawn(async move {
            if server::api::disconnect_session().await.is_ok() {
                auth.clear_auth();
                navigator().push(Route::DocumentList {});
            }
        });
    };

    rsx! {
        header { class: "app-header",
            div { class: "app-header-inner",
                Link { to: Route::DocumentList {}, class: "app-brand",
                    Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                    span { "Signet" }
                }
                nav { class: "app-nav",
                    Link { to: Route::DocumentList {},
                        Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                        "Documents"
                    }
                }
                div { class: "app-session",
                    match viewer_label {
                        Some(label) => rsx! {
                            span { class: "app-session-label", "{label}" }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: handle_disconnect,
                                "Disconnect"
                            }
                        },
                        None => rsx! {
                            Link { to: Route::Connect {},
                                Button { variant: ButtonVariant::Primary, "Connect" }
                            }
                        },
                    }
                }
            }
        }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn DocumentList() -> Element {
    documents::list::DocumentListPage()
}

#[component]
fn DocumentDetail(ipfs_hash: String) -> Element {
    rsx! { documents::detail::DocumentDetailPage { ipfs_hash: ipfs_hash } }
}

#[component]
fn Connect() -> Element {
    connect::ConnectPage()
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    rsx! { not_found::NotFoundPage { route: route } }
}
