//! Carts service errors.

use std::fmt;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart item not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] CartValidationError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}

/// The request field a rejected cart write is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartField {
    Product,
    Quantity,
}

impl CartField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Quantity => "quantity",
        }
    }
}

impl fmt::Display for CartField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected write, tagged with the offending field. The operation
/// that produced it has made no state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct CartValidationError {
    pub field: CartField,
    pub message: String,
}

impl CartValidationError {
    #[must_use]
    pub fn unknown_product() -> Self {
        Self {
            field: CartField::Product,
            message: "product does not exist".to_string(),
        }
    }

    #[must_use]
    pub fn not_in_stock() -> Self {
        Self {
            field: CartField::Product,
            message: "this product is not in stock".to_string(),
        }
    }

    #[must_use]
    pub fn insufficient_stock(available: u32) -> Self {
        Self {
            field: CartField::Quantity,
            message: format!("only {available} units available"),
        }
    }

    #[must_use]
    pub fn non_positive_quantity() -> Self {
        Self {
            field: CartField::Quantity,
            message: "quantity must be positive".to_string(),
        }
    }
}

/// Insert races on the (user, product) unique key are recovered by the
/// service, not surfaced; this is how it spots them.
pub(crate) fn is_unique_violation(error: &Error) -> bool {
    matches!(
        error.as_database_error().map(DatabaseError::kind),
        Some(ErrorKind::UniqueViolation)
    )
}
