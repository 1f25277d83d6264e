//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    auth::models::UserUuid,
    database::Db,
    domain::{
        carts::{
            errors::{CartValidationError, CartsServiceError, is_unique_violation},
            models::{CartEntry, CartItemUuid, CartSummary, CartUpsert, NewCartItem},
            repository::PgCartItemsRepository,
        },
        catalog::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items: PgCartItemsRepository,
    products: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items: PgCartItemsRepository::new(),
            products: PgProductsRepository::new(),
        }
    }

    /// One upsert attempt in a single transaction: load the product,
    /// check the stock gates, then insert or accumulate onto the locked
    /// existing row. Any early return rolls the transaction back.
    async fn try_add_item(
        &self,
        user: UserUuid,
        item: &NewCartItem,
    ) -> Result<CartUpsert, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .products
            .get_product(&mut tx, item.product_uuid)
            .await?
            .ok_or_else(CartValidationError::unknown_product)?;

        if !product.in_stock {
            return Err(CartValidationError::not_in_stock().into());
        }

        let existing = self
            .items
            .find_item_for_product(&mut tx, user, item.product_uuid)
            .await?;

        let upsert = match existing {
            Some(current) => {
                let quantity = current.quantity.saturating_add(item.quantity);

                if quantity > product.quantity {
                    return Err(CartValidationError::insufficient_stock(product.quantity).into());
                }

                let updated = self
                    .items
                    .update_quantity(&mut tx, user, current.uuid, quantity)
                    .await?;

                CartUpsert::Accumulated(CartEntry {
                    item: updated,
                    product: product.into(),
                })
            }
            None => {
                if item.quantity > product.quantity {
                    return Err(CartValidationError::insufficient_stock(product.quantity).into());
                }

                let inserted = self.items.insert_item(&mut tx, user, item).await?;

                CartUpsert::Inserted(CartEntry {
                    item: inserted,
                    product: product.into(),
                })
            }
        };

        tx.commit().await?;

        Ok(upsert)
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartEntry>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self.items.list_entries(&mut tx, user).await?;

        tx.commit().await?;

        Ok(entries)
    }

    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartUpsert, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartValidationError::non_positive_quantity().into());
        }

        match self.try_add_item(user, &item).await {
            // Two first-adds for the same (user, product) raced and the
            // other insert committed. The row exists now, so a second
            // pass takes the accumulate path instead.
            Err(CartsServiceError::Sql(error)) if is_unique_violation(&error) => {
                debug!(%user, product = %item.product_uuid, "cart insert raced, retrying as update");

                self.try_add_item(user, &item).await
            }
            result => result,
        }
    }

    async fn set_quantity(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartEntry, CartsServiceError> {
        if quantity == 0 {
            return Err(CartValidationError::non_positive_quantity().into());
        }

        let mut tx = self.db.begin().await?;

        let current = self
            .items
            .get_item(&mut tx, user, item)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        let product = self
            .products
            .get_product(&mut tx, current.product_uuid)
            .await?
            .ok_or_else(CartValidationError::unknown_product)?;

        if !product.in_stock {
            return Err(CartValidationError::not_in_stock().into());
        }

        if quantity > product.quantity {
            return Err(CartValidationError::insufficient_stock(product.quantity).into());
        }

        let updated = self
            .items
            .update_quantity(&mut tx, user, item, quantity)
            .await?;

        tx.commit().await?;

        Ok(CartEntry {
            item: updated,
            product: product.into(),
        })
    }

    async fn remove_item(
        &self,
        user: UserUuid,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.items.delete_item(&mut tx, user, item).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn clear(&self, user: UserUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.items.clear(&mut tx, user).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }

    async fn summarize(&self, user: UserUuid) -> Result<CartSummary, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let summary = self.items.summarize(&mut tx, user).await?;

        tx.commit().await?;

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the user's cart in stable (added_at, uuid) order, each
    /// item joined with its product.
    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartEntry>, CartsServiceError>;

    /// Additive upsert: first add of a product inserts a row, repeated
    /// adds accumulate into the existing one. Either way the resulting
    /// quantity is validated against current stock.
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartUpsert, CartsServiceError>;

    /// Replace an item's quantity outright, with the same stock
    /// validation as [`add_item`](CartsService::add_item).
    async fn set_quantity(
        &self,
        user: UserUuid,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartEntry, CartsServiceError>;

    /// Delete a single item owned by the user.
    async fn remove_item(&self, user: UserUuid, item: CartItemUuid)
    -> Result<(), CartsServiceError>;

    /// Delete every item in the user's cart, returning how many rows
    /// went. An empty cart is not an error.
    async fn clear(&self, user: UserUuid) -> Result<u64, CartsServiceError>;

    /// Row count and current-price total for the user's cart, computed
    /// from one snapshot.
    async fn summarize(&self, user: UserUuid) -> Result<CartSummary, CartsServiceError>;
}
