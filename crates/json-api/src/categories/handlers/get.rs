//! Get Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use bazaar_app::domain::catalog::{CatalogServiceError, models::Category};

use crate::{extensions::*, state::State};

/// Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// Category identifier
    pub uuid: Uuid,

    /// Category name
    pub name: String,

    /// Category description
    pub description: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            uuid: category.uuid.into(),
            name: category.name,
            description: category.description,
        }
    }
}

/// Get Category Handler
///
/// Returns a category. Public.
#[endpoint(tags("categories"), summary = "Get Category")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .catalog
        .get_category(uuid.into_inner().into())
        .await
        .map_err(|error| match error {
            CatalogServiceError::NotFound => {
                StatusError::not_found().brief("Category not found")
            }
            other => {
                error!("failed to fetch category: {other}");

                StatusError::internal_server_error()
            }
        })?;

    Ok(Json(category.into()))
}
