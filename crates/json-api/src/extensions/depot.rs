//! Depot helper extensions.

use std::any::Any;

use bazaar_app::auth::models::UserUuid;
use salvo::prelude::{Depot, StatusError};

/// Depot key the auth middleware stores the caller's identity under.
const USER_UUID_KEY: &str = "bazaar.user_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors, and
/// for threading the authenticated identity between middleware and
/// handlers.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    /// The authenticated caller. Handlers never read identity from the
    /// request itself.
    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.get::<UserUuid>(USER_UUID_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized().brief("Authentication required"))
    }
}
