//! Per-user shopping carts: the (user, product) item store, the
//! additive upsert path, and the summary aggregator.

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::{CartField, CartValidationError, CartsServiceError};
pub use service::*;
