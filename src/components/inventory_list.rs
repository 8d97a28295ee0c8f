//! Inventory List Component
//!
//! One click and one input listener on the list container serve every row.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::context::use_app_context;
use crate::dom::{self, RowAction};
use crate::render::render_inventory;
use crate::store::use_cart_store;

#[component]
pub fn InventoryList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_cart_store();

    let on_click = move |ev: MouseEvent| {
        let Some((target, id)) = dom::event_row(&ev) else { return };
        match RowAction::from_class_list(&target.class_name()) {
            Some(RowAction::Decrement) => {
                // At the floor the input keeps whatever text it holds
                if let Some(staged) = ctx.controller().decrement(id) {
                    dom::write_amount_input(id, staged);
                }
            }
            Some(RowAction::Increment) => {
                dom::write_amount_input(id, ctx.controller().increment(id))
            }
            Some(RowAction::AddToCart) => {
                ev.prevent_default();
                ctx.dispatch("add to cart", move |controller| async move {
                    controller.add_to_cart(id).await
                });
            }
            _ => {}
        }
    };

    view! {
        <section class="inventory">
            <h2>"Inventory"</h2>
            <ul
                class="inventory__list"
                on:click=on_click
                // Typed text is parsed as-is; it is only rewritten by the next +/- click
                on:input=move |ev| {
                    let Some((target, id)) = dom::event_row(&ev) else { return };
                    if dom::has_class(&target, "amount-input") {
                        let staged = ctx.controller().stage_text(id, &event_target_value(&ev));
                        log::debug!("staged {} for item {}", staged, id);
                    }
                }
            >
                {render_inventory(store)}
            </ul>
        </section>
    }
}
