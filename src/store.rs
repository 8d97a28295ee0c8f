//! Render Store
//!
//! Reactive copy of the controller state that the lists render from.
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use cart_core::{CartItem, InventoryItem};

#[derive(Clone, Debug, Default, Store)]
pub struct CartView {
    /// Last `GET /inventory` response
    pub inventory: Vec<InventoryItem>,
    /// Last `GET /cart` response
    pub cart: Vec<CartItem>,
    /// Bumped on every state write; rows are keyed by it so each write
    /// replaces every row instead of patching the old ones
    pub generation: u64,
}

/// Type alias for the store
pub type CartStore = Store<CartView>;

/// Get the cart store from context
pub fn use_cart_store() -> CartStore {
    expect_context::<CartStore>()
}

/// Overwrite both lists and start a new render generation.
pub fn sync_store(store: &CartStore, inventory: &[InventoryItem], cart: &[CartItem]) {
    *store.inventory().write() = inventory.to_vec();
    *store.cart().write() = cart.to_vec();
    *store.generation().write() += 1;
}
