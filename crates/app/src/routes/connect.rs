use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

use crate::auth::use_auth;
use crate::routes::Route;

/// Session start page. Accepts a Worldcoin id, an Ethereum address, or both;
/// the account is created on first contact.
#[component]
pub fn ConnectPage() -> Element {
    let mut auth = use_auth();
    let mut worldcoin_id = use_signal(String::new);
    let mut ethereum_address = use_signal(String::new);
    let mut connecting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_connect = move |_: MouseEvent| {
        let name = Some(worldcoin_id.read().trim().to_string()).filter(|s| !s.is_empty());
        let address = Some(ethereum_address.read().trim().to_string()).filter(|s| !s.is_empty());

        if name.is_none() && address.is_none() {
            error.set(Some(
                "Enter a Worldcoin id or an Ethereum address.".to_string(),
            ));
            return;
        }

        spawn(async move {
            connecting.set(true);
            error.set(None);
            match server::api::connect_session(name, address).await {
                Ok(user) => {
                    auth.set_user(user);
                    navigator().push(Route::DocumentList {});
                }
                Err(e) => {
                    connecting.set(false);
                    error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
        });
    };

    rsx! {
        div { class: "container narrow",
            Card {
                CardHeader {
                    CardTitle { "Connect" }
                }
                CardContent {
                    div { class: "form-field",
                        label { r#for: "connect-worldcoin", "Worldcoin id" }
                        input {
                            id: "connect-worldcoin",
                            value: "{worldcoin_id}",
                            placeholder: "alice.worldcoin",
                            oninput: move |evt| worldcoin_id.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "connect-address", "Ethereum address" }
                        input {
                            id: "connect-address",
                            value: "{ethereum_address}",
                            placeholder: "0x...",
                            oninput: move |evt| ethereum_address.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "error-message", "{message}" }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: connecting(),
                        onclick: handle_connect,
                        if connecting() { "Connecting..." } else { "Connect" }
                    }
                }
            }
        }
    }
}
