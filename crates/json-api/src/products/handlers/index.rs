//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::catalog::models::ProductFilter;

use crate::{extensions::*, products::handlers::get::ProductResponse, state::State};

/// Products Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products, newest first
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns products, optionally narrowed by category, a search term
/// over title/description, or seller. Public.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<Uuid, false>,
    search: QueryParam<String, false>,
    seller: QueryParam<Uuid, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        category: category.into_inner().map(Into::into),
        search: search.into_inner(),
        seller: seller.into_inner().map(Into::into),
    };

    let products = state
        .catalog
        .list_products(filter)
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
