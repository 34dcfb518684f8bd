use dioxus::prelude::*;

// ── Session Server Functions ───────────────────────────────────

/// Start a session for the given identities, creating the account on first
/// contact. Sets the session cookie on the response.
#[server]
pub async fn connect_session(
    name: Option<String>,
    address: Option<String>,
) -> Result<shared_types::CurrentUser, ServerFnError> {
    use crate::auth::{cookies, session};
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo::user;
    use shared_types::AppError;

    let pool = get_db().await;
    let account = user::find_or_create(pool, name.as_deref(), address.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())?;

    let token = session::create_session_token(
        account.id,
        account.worldcoin_id.as_deref(),
        account.ethereum_address.as_deref(),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "failed to issue session token");
        AppError::internal("Could not start session").into_server_fn_error()
    })?;

    cookies::schedule_session_cookie(&token);
    tracing::info!(user_id = %account.id, "session started");

    Ok(shared_types::CurrentUser {
        name: account.worldcoin_id,
        address: account.ethereum_address,
    })
}

/// Restore the viewer from the session cookie. `Ok(None)` means no valid
/// session is present (unauthenticated).
#[server]
pub async fn current_session() -> Result<Option<shared_types::CurrentUser>, ServerFnError> {
    Ok(super::auth::current_claims().map(|claims| shared_types::CurrentUser {
        name: claims.name,
        address: claims.address,
    }))
}

/// End the current session by clearing the session cookie.
#[server]
pub async fn disconnect_session() -> Result<(), ServerFnError> {
    use crate::auth::cookies;

    cookies::schedule_clear_cookie();
    Ok(())
}
