use axum::{extract::Request, http::header, middleware::Next, response::Response};

use super::cookies::{self, CookieSlot, PendingCookieAction};

/// Session middleware.
///
/// Installs a [`CookieSlot`] into request extensions so server functions can
/// schedule Set-Cookie actions, then applies whatever action was scheduled
/// once the response is ready.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let slot = CookieSlot::default();
    req.extensions_mut().insert(slot.clone());

    let mut response = next.run(req).await;

    let action = slot.0.lock().unwrap().take();
    match action {
        Some(PendingCookieAction::Set { token }) => {
            response
                .headers_mut()
                .append(header::SET_COOKIE, cookies::build_session_cookie(&token));
        }
        Some(PendingCookieAction::Clear) => {
            response
                .headers_mut()
                .append(header::SET_COOKIE, cookies::build_clear_cookie());
        }
        None => {}
    }

    response
}
