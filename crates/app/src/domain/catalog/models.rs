//! Catalog Models

use jiff::Timestamp;

use crate::{auth::models::UserUuid, uuids::TypedUuid};

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Category Model
#[derive(Debug, Clone)]
pub struct Category {
    pub uuid: CategoryUuid,
    pub name: String,
    pub description: String,
}

/// New Category Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
    pub description: String,
}

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
///
/// `price` is in minor units (pence/cents). `quantity` is the available
/// stock; `in_stock` is an independent seller-controlled flag, and both
/// gate cart writes.
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub seller_uuid: UserUuid,
    pub category_uuid: CategoryUuid,
    pub title: String,
    pub description: String,
    pub price: u64,
    pub in_stock: bool,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub category_uuid: CategoryUuid,
    pub title: String,
    pub description: String,
    pub price: u64,
    pub in_stock: bool,
    pub quantity: u32,
}

/// Product Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub category_uuid: CategoryUuid,
    pub title: String,
    pub description: String,
    pub price: u64,
    pub in_stock: bool,
    pub quantity: u32,
}

/// Listing filters; all optional and combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<CategoryUuid>,
    pub search: Option<String>,
    pub seller: Option<UserUuid>,
}
