//! Cart UI App
//!
//! Builds the controller, connects its state to the render store and
//! triggers the initial load.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use cart_core::{Config, Controller, HttpCartApi};

use crate::components::{CartPanel, InventoryList};
use crate::context::AppContext;
use crate::store::{sync_store, CartView};

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = Store::new(CartView::default());
    provide_context(store);

    let controller = Rc::new(Controller::new(HttpCartApi::new(&config)));
    // Every state write lands in the store, which redraws both lists
    controller.subscribe(move |inventory, cart| sync_store(&store, inventory, cart));
    provide_context(AppContext::new(controller.clone()));

    // Initial load
    spawn_local(async move {
        if let Err(err) = controller.init().await {
            log::error!("initial load failed: {}", err);
        }
    });

    view! {
        <div class="app-layout">
            <InventoryList />
            <CartPanel />
        </div>
    }
}
