// Server-only session helpers shared across all api/* modules.

use dioxus::prelude::*;

use crate::auth::{cookies, session};
use crate::error_convert::AppErrorExt;
use shared_types::AppError;

/// Read and validate the caller's session from the current request, if any.
/// Returns None for missing, expired, or malformed tokens.
pub(crate) fn current_claims() -> Option<session::Claims> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    let token = cookies::extract_session_token(&parts.headers)?;
    session::validate_session_token(&token).ok()
}

/// Require a valid session, or fail with an "Authentication required" error.
pub(crate) fn require_session() -> Result<session::Claims, ServerFnError> {
    current_claims()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}
