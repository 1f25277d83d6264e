//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::models::UserUuid,
    database::Db,
    domain::catalog::{
        errors::CatalogServiceError,
        models::{
            Category, CategoryUuid, NewCategory, NewProduct, Product, ProductFilter,
            ProductUpdate, ProductUuid,
        },
        repositories::{PgCategoriesRepository, PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    categories: PgCategoriesRepository,
    products: PgProductsRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            categories: PgCategoriesRepository::new(),
            products: PgProductsRepository::new(),
        }
    }

    /// Create a category. Admin CLI only; categories are read-only over
    /// HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error when the uuid is taken or the write fails.
    pub async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.categories.create_category(&mut tx, &category).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.categories.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(&self, category: CategoryUuid) -> Result<Category, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self
            .categories
            .get_category(&mut tx, category)
            .await?
            .ok_or(CatalogServiceError::NotFound)?;

        tx.commit().await?;

        Ok(category)
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.products.list_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self
            .products
            .get_product(&mut tx, product)
            .await?
            .ok_or(CatalogServiceError::NotFound)?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        seller: UserUuid,
        product: NewProduct,
    ) -> Result<Product, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .products
            .create_product(&mut tx, seller, &product)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        seller: UserUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        // Zero rows means unknown product or someone else's listing;
        // both surface as NotFound.
        let updated = self
            .products
            .update_product(&mut tx, seller, product, &update)
            .await?
            .ok_or(CatalogServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(
        &self,
        seller: UserUuid,
        product: ProductUuid,
    ) -> Result<(), CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.products.delete_product(&mut tx, seller, product).await?;

        if rows_affected == 0 {
            return Err(CatalogServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError>;

    /// Retrieve a single category.
    async fn get_category(&self, category: CategoryUuid) -> Result<Category, CatalogServiceError>;

    /// Retrieves products matching the given filter, newest first.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, CatalogServiceError>;

    /// Creates a new product listed by the given seller.
    async fn create_product(
        &self,
        seller: UserUuid,
        product: NewProduct,
    ) -> Result<Product, CatalogServiceError>;

    /// Updates a product, scoped to its seller.
    async fn update_product(
        &self,
        seller: UserUuid,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, CatalogServiceError>;

    /// Deletes a product, scoped to its seller.
    async fn delete_product(
        &self,
        seller: UserUuid,
        product: ProductUuid,
    ) -> Result<(), CatalogServiceError>;
}
