//! Cart Core
//!
//! Everything behind the cart UI that does not touch the DOM:
//! - models: inventory and cart entities as the REST backend sends them
//! - api: the `CartApi` contract and its reqwest implementation
//! - state: the observed application state
//! - staging: client-only quantity counters per inventory row
//! - controller: ties user actions to API calls and state refreshes

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod staging;
pub mod state;

pub use api::{CartApi, DeleteAck, HttpCartApi};
pub use config::Config;
pub use controller::{plan_add_to_cart, CartChange, Controller};
pub use error::{ApiError, ApiResult};
pub use models::{CartItem, InventoryItem, ItemId};
pub use staging::{StagedAmount, Staging};
pub use state::State;
