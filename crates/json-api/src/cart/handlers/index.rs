//! List Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::carts::models::CartEntry;

use crate::{extensions::*, state::State};

/// The product slice nested in each cart item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartProductResponse {
    /// Product identifier
    pub uuid: Uuid,

    /// Product title
    pub title: String,

    /// Current unit price in pence/cents
    pub price: u64,

    /// Whether the seller currently marks the product as purchasable
    pub in_stock: bool,

    /// Units currently available
    pub quantity: u32,
}

/// One cart line: the item plus its product and derived line total.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartEntryResponse {
    /// Cart item identifier
    pub uuid: Uuid,

    /// The product this line refers to
    pub product: CartProductResponse,

    /// Units of the product in the cart
    pub quantity: u32,

    /// quantity x current product price
    pub total_price: u64,

    /// When the product was first added
    pub added_at: String,

    /// When the line was last changed
    pub updated_at: String,
}

impl From<CartEntry> for CartEntryResponse {
    fn from(entry: CartEntry) -> Self {
        let total_price = entry.total_price();

        CartEntryResponse {
            uuid: entry.item.uuid.into(),
            product: CartProductResponse {
                uuid: entry.product.uuid.into(),
                title: entry.product.title,
                price: entry.product.price,
                in_stock: entry.product.in_stock,
                quantity: entry.product.quantity,
            },
            quantity: entry.item.quantity,
            total_price,
            added_at: entry.item.added_at.to_string(),
            updated_at: entry.item.updated_at.to_string(),
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The caller's cart lines in insertion order
    pub items: Vec<CartEntryResponse>,
}

/// List Cart Handler
///
/// Returns the caller's cart items.
#[endpoint(tags("cart"), summary = "List Cart Items", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let entries = state
        .carts
        .list_items(user)
        .await
        .or_500("failed to fetch cart items")?;

    Ok(Json(CartResponse {
        items: entries.into_iter().map(Into::into).collect(),
    }))
}
