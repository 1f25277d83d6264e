//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::Validation(source) => StatusError::bad_request()
            .brief(source.message.clone())
            .detail(format!("invalid field: {}", source.field)),
        // Unknown and not-owned items both land here; the caller cannot
        // tell whether the id exists for someone else.
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::Sql(source) => {
            error!("cart operation failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
