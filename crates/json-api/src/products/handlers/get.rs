//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::catalog::models::Product;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// The user selling the product
    pub seller: Uuid,

    /// The category the product is listed under
    pub category: Uuid,

    /// Product title
    pub title: String,

    /// Product description
    pub description: String,

    /// The price of the product in pence/cents
    pub price: u64,

    /// Whether the product is currently purchasable
    pub in_stock: bool,

    /// Units available
    pub quantity: u32,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            seller: product.seller_uuid.into(),
            category: product.category_uuid.into(),
            title: product.title,
            description: product.description,
            price: product.price,
            in_stock: product.in_stock,
            quantity: product.quantity,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product. Public.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .catalog
        .get_product(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use bazaar_app::domain::catalog::{
        CatalogServiceError, MockCatalogService, models::ProductUuid,
    };

    use crate::test_helpers::{catalog_service, make_product};

    use super::*;

    fn make_service(repo: MockCatalogService) -> Service {
        catalog_service(repo, Router::with_path("products/{uuid}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut repo = MockCatalogService::new();
        let uuid = ProductUuid::new();

        let product = make_product(uuid, 100, 5, true);

        repo.expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(product));

        let res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut repo = MockCatalogService::new();
        let uuid = ProductUuid::new();

        repo.expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(CatalogServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products/123")
            .send(&make_service(MockCatalogService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
