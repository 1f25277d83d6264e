//! State

use std::sync::Arc;

use bazaar_app::{
    auth::AuthService,
    context::AppContext,
    domain::{carts::CartsService, catalog::CatalogService},
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) catalog: Arc<dyn CatalogService>,
    pub(crate) carts: Arc<dyn CartsService>,
    pub(crate) auth: Arc<dyn AuthService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        catalog: Arc<dyn CatalogService>,
        carts: Arc<dyn CartsService>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            catalog,
            carts,
            auth,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.catalog, app.carts, app.auth))
    }
}
