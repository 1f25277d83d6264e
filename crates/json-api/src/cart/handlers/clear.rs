//! Clear Cart Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::debug;

use crate::{extensions::*, state::State};

/// Clear Cart Handler
///
/// Removes every item in the caller's cart. Succeeds with 204 whether
/// or not there was anything to remove.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart cleared"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let removed = state
        .carts
        .clear(user)
        .await
        .or_500("failed to clear cart")?;

    debug!(%user, removed, "cleared cart");

    Ok(StatusCode::NO_CONTENT)
}
