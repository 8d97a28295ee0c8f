//! List Rendering
//!
//! Rows are keyed by `(generation, id)`. The generation changes on every
//! state write, so every row (and its amount input) is rebuilt from scratch
//! rather than patched. Class names and `data-id` attributes are what the
//! delegated handlers in `components` match on.

use leptos::prelude::*;

use cart_core::{CartItem, InventoryItem, ItemId};

use crate::store::{CartStore, CartViewStoreFields};

/// Items tagged with the generation they are rendered for
pub fn stamp<T>(generation: u64, items: Vec<T>) -> Vec<(u64, T)> {
    items.into_iter().map(|item| (generation, item)).collect()
}

/// Inventory rows: label, `-`, amount input seeded at "0", `+`, "Add to Cart"
pub fn render_inventory(store: CartStore) -> impl IntoView {
    view! {
        <For
            each=move || stamp(store.generation().get(), store.inventory().get())
            key=|(generation, item)| row_key(*generation, item.id)
            children=|(_, item)| inventory_row(&item)
        />
    }
}

/// Cart rows: `content (amount)` and a delete button
pub fn render_cart(store: CartStore) -> impl IntoView {
    view! {
        <For
            each=move || stamp(store.generation().get(), store.cart().get())
            key=|(generation, item)| row_key(*generation, item.id)
            children=|(_, item)| cart_row(&item)
        />
    }
}

fn row_key(generation: u64, id: ItemId) -> (u64, ItemId) {
    (generation, id)
}

fn inventory_row(item: &InventoryItem) -> impl IntoView {
    let id = item.id.to_string();
    view! {
        <li id=id.clone()>
            <span>{item.content.clone()}</span>
            <button class="minus-btn" data-id=id.clone()>"-"</button>
            <input type="text" value="0" class="amount-input" data-id=id.clone() />
            <button class="plus-btn" data-id=id.clone()>"+"</button>
            <button class="add-to-cart-btn" data-id=id.clone()>"Add to Cart"</button>
        </li>
    }
}

fn cart_row(item: &CartItem) -> impl IntoView {
    view! {
        <li>
            <span>{item.label()}</span>
            <button class="delete-btn" data-id=item.id.to_string()>"Delete"</button>
        </li>
    }
}
