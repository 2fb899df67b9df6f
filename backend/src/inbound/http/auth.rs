//! Authorisation helpers used by HTTP handlers.
//!
//! Keep the HTTP modules focused on request/response mapping by concentrating
//! session-to-account resolution and role checks here.

use crate::domain::{Error, Role, User};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

use super::ApiResult;

/// Resolve the session's user id to a live account.
///
/// A session naming an account that no longer exists is treated the same as
/// no session at all, so deleted accounts lose access on their next request.
pub async fn require_user(state: &HttpState, session: &SessionContext) -> ApiResult<User> {
    let user_id = session.require_user_id()?;
    state
        .identity
        .find_user(&user_id)
        .await?
        .ok_or_else(|| Error::unauthorized("login required"))
}

/// Resolve the session's account and check it holds `role`.
pub async fn require_role(
    state: &HttpState,
    session: &SessionContext,
    role: Role,
) -> ApiResult<User> {
    let user = require_user(state, session).await?;
    if user.role() == role {
        Ok(user)
    } else {
        Err(Error::forbidden("unauthorized access"))
    }
}
