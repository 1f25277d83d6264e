//! Category endpoints. Read-only; categories are managed through the
//! admin CLI.

pub(crate) mod handlers;

pub(crate) use handlers::{get, index};
