//! Add To Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::carts::models::{CartUpsert, NewCartItem};

use crate::{
    cart::{errors::into_status_error, handlers::index::CartEntryResponse},
    extensions::*,
    state::State,
};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    pub product: Uuid,

    /// Units to add on top of whatever is already in the cart
    pub quantity: u32,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem {
            product_uuid: request.product.into(),
            quantity: request.quantity,
        }
    }
}

/// Add To Cart Handler
///
/// Additive upsert: 201 when the product lands in the cart for the
/// first time, 200 when an existing line absorbed the quantity.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item created"),
        (status_code = StatusCode::OK, description = "Existing cart item quantity increased"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartEntryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let upsert = state
        .carts
        .add_item(user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    match &upsert {
        CartUpsert::Inserted(entry) => {
            res.add_header(LOCATION, format!("/cart/{}", entry.item.uuid), true)
                .or_500("failed to set location header")?
                .status_code(StatusCode::CREATED);
        }
        CartUpsert::Accumulated(_) => {
            res.status_code(StatusCode::OK);
        }
    }

    Ok(Json(upsert.into_entry().into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::carts::{
        CartValidationError, CartsServiceError, MockCartsService, models::CartUpsert,
    };

    use crate::test_helpers::{TEST_USER_UUID, carts_service, make_cart_entry};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("cart").post(handler))
    }

    #[tokio::test]
    async fn test_first_add_returns_201_with_location() -> TestResult {
        let entry = make_cart_entry(3, 10_00);
        let product_uuid = entry.product.uuid;
        let item_uuid = entry.item.uuid;

        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .withf(move |user, item| {
                *user == TEST_USER_UUID
                    && *item
                        == NewCartItem {
                            product_uuid,
                            quantity: 3,
                        }
            })
            .return_once(move |_, _| Ok(CartUpsert::Inserted(entry)));

        let mut res = TestClient::post("http://example.com/cart")
            .json(&json!({ "product": product_uuid.into_uuid(), "quantity": 3 }))
            .send(&make_service(repo))
            .await;

        let body: CartEntryResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/cart/{item_uuid}").as_str()));
        assert_eq!(body.quantity, 3);
        assert_eq!(body.total_price, 30_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_repeat_add_returns_200_without_location() -> TestResult {
        let entry = make_cart_entry(5, 10_00);
        let product_uuid = entry.product.uuid;

        let mut repo = MockCartsService::new();

        repo.expect_add_item()
            .once()
            .return_once(move |_, _| Ok(CartUpsert::Accumulated(entry)));

        let mut res = TestClient::post("http://example.com/cart")
            .json(&json!({ "product": product_uuid.into_uuid(), "quantity": 2 }))
            .send(&make_service(repo))
            .await;

        let body: CartEntryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.headers().get("location").is_none());
        assert_eq!(body.quantity, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_validation_failure_returns_400() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_add_item().once().return_once(|_, _| {
            Err(CartsServiceError::Validation(
                CartValidationError::insufficient_stock(5),
            ))
        });

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "product": Uuid::now_v7(), "quantity": 9 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
