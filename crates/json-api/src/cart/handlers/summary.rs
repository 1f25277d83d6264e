//! Cart Summary Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::carts::models::CartSummary;

use crate::{extensions::*, state::State};

/// Cart Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartSummaryResponse {
    /// Number of distinct cart lines (not total units)
    pub item_count: u64,

    /// Sum of quantity x current price over the cart, in pence/cents
    pub total_price: u64,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        CartSummaryResponse {
            item_count: summary.item_count,
            total_price: summary.total_price,
        }
    }
}

/// Cart Summary Handler
///
/// Count and total from a single snapshot of the caller's cart. An
/// empty cart answers with zeros.
#[endpoint(tags("cart"), summary = "Cart Summary", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let summary = state
        .carts
        .summarize(user)
        .await
        .or_500("failed to summarize cart")?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bazaar_app::domain::carts::MockCartsService;

    use crate::test_helpers::{TEST_USER_UUID, carts_service};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("cart/summary").get(handler))
    }

    #[tokio::test]
    async fn test_summary_returns_count_and_total() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_summarize()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| {
                Ok(CartSummary {
                    item_count: 2,
                    total_price: 45_00,
                })
            });

        let response: CartSummaryResponse = TestClient::get("http://example.com/cart/summary")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.item_count, 2);
        assert_eq!(response.total_price, 45_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_empty_cart_returns_zeros() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_summarize().once().return_once(|_| {
            Ok(CartSummary {
                item_count: 0,
                total_price: 0,
            })
        });

        let response: CartSummaryResponse = TestClient::get("http://example.com/cart/summary")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.item_count, 0);
        assert_eq!(response.total_price, 0);

        Ok(())
    }
}
