//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use bazaar_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        CatalogServiceError::InvalidReference
        | CatalogServiceError::MissingRequiredData
        | CatalogServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        CatalogServiceError::Sql(source) => {
            error!("catalog operation failed: {source}");

            StatusError::internal_server_error()
        }
        CatalogServiceError::NotFound => StatusError::not_found().brief("Product not found"),
    }
}
