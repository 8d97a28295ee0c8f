//! Cart UI Entry Point

mod app;
mod components;
mod context;
mod dom;
mod render;
mod store;

use app::App;
use cart_core::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::from_build_env();
    console_logger::init(config.log_level);
    log::info!("cart backend at {}", config.base_url);

    mount_to_body(move || view! { <App config=config /> });
}
