//! Driving port for resolving session identifiers to accounts.
//!
//! Sessions store only a user id; every authenticated request resolves that
//! id back to a live account so deleted users lose access immediately.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for identity lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityQuery: Send + Sync {
    /// Resolve a user id to its account, if it still exists.
    ///
    /// Resolves to `None` for ids with no backing account so callers can
    /// treat a stale session differently from an infrastructure failure.
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}
