//! Application Context
//!
//! Hands the controller to the list components via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use cart_core::{ApiResult, Controller, HttpCartApi};

pub type CartController = Controller<HttpCartApi>;

#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<CartController>, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: Rc<CartController>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> Rc<CartController> {
        self.controller.get_value()
    }

    /// Run a controller action in the background.
    ///
    /// Failures are only logged; the lists keep showing the last cart that
    /// was fetched successfully.
    pub fn dispatch<F, Fut>(&self, action: &'static str, run: F)
    where
        F: FnOnce(Rc<CartController>) -> Fut + 'static,
        Fut: Future<Output = ApiResult<()>> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move {
            if let Err(err) = run(controller).await {
                log::error!("{} failed: {}", action, err);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
