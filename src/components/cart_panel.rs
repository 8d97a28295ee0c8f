//! Cart Panel Component
//!
//! Cart list with per-row delete, plus the checkout button.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::context::use_app_context;
use crate::dom::{self, RowAction};
use crate::render::render_cart;
use crate::store::use_cart_store;

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_cart_store();

    let on_click = move |ev: MouseEvent| {
        let Some((target, id)) = dom::event_row(&ev) else { return };
        if RowAction::from_class_list(&target.class_name()) == Some(RowAction::Delete) {
            ctx.dispatch("delete", move |controller| async move { controller.delete(id).await });
        }
    };

    let on_checkout = move |_: MouseEvent| {
        ctx.dispatch("checkout", |controller| async move { controller.checkout().await });
    };

    view! {
        <section class="cart">
            <h2>"Shopping Cart"</h2>
            <ul class="cart__list" on:click=on_click>
                {render_cart(store)}
            </ul>
            <button class="cart__checkout-btn" on:click=on_checkout>"Checkout"</button>
        </section>
    }
}
