//! Cart Models

use jiff::Timestamp;

use crate::{
    auth::models::UserUuid,
    domain::catalog::models::{Product, ProductUuid},
    uuids::TypedUuid,
};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// One (user, product) row. At most one exists per pair; repeated adds
/// accumulate into `quantity` instead of inserting.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub added_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Cart Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

/// The slice of a product a cart needs to render and price an item.
#[derive(Debug, Clone)]
pub struct CartProduct {
    pub uuid: ProductUuid,
    pub title: String,
    pub price: u64,
    pub in_stock: bool,
    pub quantity: u32,
}

impl From<Product> for CartProduct {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid,
            title: product.title,
            price: product.price,
            in_stock: product.in_stock,
            quantity: product.quantity,
        }
    }
}

/// A cart item joined with its product.
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub item: CartItem,
    pub product: CartProduct,
}

impl CartEntry {
    /// Line total at the product's current price. Derived on read,
    /// never stored, so price changes retroactively reprice the cart.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        u64::from(self.item.quantity) * self.product.price
    }
}

/// Outcome of an add-to-cart call: a fresh row, or an existing row
/// whose quantity absorbed the request.
#[derive(Debug, Clone)]
pub enum CartUpsert {
    Inserted(CartEntry),
    Accumulated(CartEntry),
}

impl CartUpsert {
    #[must_use]
    pub fn entry(&self) -> &CartEntry {
        match self {
            Self::Inserted(entry) | Self::Accumulated(entry) => entry,
        }
    }

    #[must_use]
    pub fn into_entry(self) -> CartEntry {
        match self {
            Self::Inserted(entry) | Self::Accumulated(entry) => entry,
        }
    }
}

/// Aggregate over a user's cart. `item_count` counts rows, not units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub item_count: u64,
    pub total_price: u64,
}
