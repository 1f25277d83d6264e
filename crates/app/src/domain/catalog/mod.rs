//! Product catalog: categories and the products sellers list in them.

pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub(crate) use repositories::PgProductsRepository;

pub use errors::CatalogServiceError;
pub use service::*;
