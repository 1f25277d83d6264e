//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use bazaar_app::{
    auth::{MockAuthService, models::UserUuid},
    domain::{
        carts::{
            MockCartsService,
            models::{CartEntry, CartItem, CartItemUuid, CartProduct},
        },
        catalog::{
            MockCatalogService,
            models::{Category, CategoryUuid, Product, ProductUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

/// Stand-in for the auth middleware: pin the caller to the fixed test
/// user.
#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_category(uuid: CategoryUuid, name: &str) -> Category {
    Category {
        uuid,
        name: name.to_string(),
        description: String::new(),
    }
}

pub(crate) fn make_product(uuid: ProductUuid, price: u64, quantity: u32, in_stock: bool) -> Product {
    Product {
        uuid,
        seller_uuid: TEST_USER_UUID,
        category_uuid: CategoryUuid::from_uuid(Uuid::nil()),
        title: "Walkman".to_string(),
        description: String::new(),
        price,
        in_stock,
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_entry(quantity: u32, price: u64) -> CartEntry {
    let product_uuid = ProductUuid::new();

    CartEntry {
        item: CartItem {
            uuid: CartItemUuid::new(),
            user_uuid: TEST_USER_UUID,
            product_uuid,
            quantity,
            added_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        },
        product: CartProduct {
            uuid: product_uuid,
            title: "Walkman".to_string(),
            price,
            in_stock: true,
            quantity: 100,
        },
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_categories().never();
    catalog.expect_get_category().never();
    catalog.expect_list_products().never();
    catalog.expect_get_product().never();
    catalog.expect_create_product().never();
    catalog.expect_update_product().never();
    catalog.expect_delete_product().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_items().never();
    carts.expect_add_item().never();
    carts.expect_set_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear().never();
    carts.expect_summarize().never();

    carts
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_catalog_mock()),
        Arc::new(carts),
        Arc::new(strict_auth_mock()),
    ))
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(catalog),
        Arc::new(strict_carts_mock()),
        Arc::new(strict_auth_mock()),
    ))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_catalog_mock()),
        Arc::new(strict_carts_mock()),
        Arc::new(auth),
    ))
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_catalog(catalog)))
            .hoop(inject_user)
            .push(route),
    )
}
