use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod routes;

use auth::{use_auth, AuthState};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        // Initialize the shared pool and run migrations before serving.
        server::db::get_db().await;

        let router = dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    // Restore the session user once on mount. The viewer context is
    // populated at session start and cleared at sign-out; pages only read it.
    let mut auth = use_auth();
    use_future(move || async move {
        if let Ok(Some(user)) = server::api::current_session().await {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "page-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
