//! Guest-to-user cart migration over a file-backed store.
//!
//! A guest fills a cart before signing in; on login the guest cart is
//! merged into the user's cart and the guest blob deleted. These tests
//! exercise the merge, clamping, and idempotency behaviour end to end.

#![allow(clippy::unwrap_used)]

use autoparts_cart::{CartService, Identity, JsonFileStore};
use autoparts_core::UserId;
use autoparts_integration_tests::{temp_store, test_product};

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_guest_cart_moves_to_user_on_login() {
    let (_dir, store) = temp_store();
    let service = CartService::new(&store);
    let user = UserId::new(10);

    service
        .add_to_cart(Identity::Guest, &test_product(1, 1000, 10), 2)
        .unwrap();
    service
        .add_to_cart(Identity::Guest, &test_product(2, 500, 4), 1)
        .unwrap();

    let merged = service.migrate_guest_cart(user).unwrap();
    assert_eq!(merged.items.len(), 2);
    assert_eq!(merged.total_items(), 3);

    // The guest blob is deleted, the user cart persisted
    assert!(service.get_cart(Identity::Guest).unwrap().is_empty());
    let user_cart = service.get_cart(Identity::User(user)).unwrap();
    assert_eq!(user_cart.items, merged.items);
}

#[test]
fn test_migration_merges_colliding_products_within_stock() {
    // guest holds 2, user holds 4, stock is 5 -> merged line is 5
    let (_dir, store) = temp_store();
    let service = CartService::new(&store);
    let user = UserId::new(10);
    let part = test_product(3, 750, 5);

    service
        .add_to_cart(Identity::User(user), &part, 4)
        .unwrap();
    service.add_to_cart(Identity::Guest, &part, 2).unwrap();

    let merged = service.migrate_guest_cart(user).unwrap();
    assert_eq!(merged.items.len(), 1);
    assert_eq!(merged.item(part.id).unwrap().quantity, 5);
}

#[test]
fn test_migration_twice_changes_nothing() {
    let (_dir, store) = temp_store();
    let service = CartService::new(&store);
    let user = UserId::new(10);

    service
        .add_to_cart(Identity::Guest, &test_product(1, 1000, 10), 3)
        .unwrap();

    let once = service.migrate_guest_cart(user).unwrap();
    let twice = service.migrate_guest_cart(user).unwrap();
    assert_eq!(once.items, twice.items);
}

#[test]
fn test_migration_with_no_guest_cart_keeps_user_cart() {
    let (_dir, store) = temp_store();
    let service = CartService::new(&store);
    let user = UserId::new(10);

    service
        .add_to_cart(Identity::User(user), &test_product(1, 1000, 10), 2)
        .unwrap();

    let merged = service.migrate_guest_cart(user).unwrap();
    assert_eq!(merged.total_items(), 2);
}

#[test]
fn test_migrated_cart_survives_reopening_the_store() {
    let (dir, store) = temp_store();
    let service = CartService::new(&store);
    let user = UserId::new(10);

    service
        .add_to_cart(Identity::Guest, &test_product(1, 1000, 10), 2)
        .unwrap();
    service.migrate_guest_cart(user).unwrap();

    let reopened = JsonFileStore::open(dir.path()).unwrap();
    let service = CartService::new(&reopened);
    assert!(service.get_cart(Identity::Guest).unwrap().is_empty());
    assert_eq!(
        service.get_cart(Identity::User(user)).unwrap().total_items(),
        2
    );
}
