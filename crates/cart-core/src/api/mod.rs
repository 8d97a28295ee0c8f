//! Cart API
//!
//! Contract of the REST backend, plus the reqwest-backed client.
//!
//! Futures are not `Send`: in the browser every request resolves on the
//! single UI event loop.

mod http;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::error::ApiResult;
use crate::models::{CartItem, InventoryItem, ItemId};

pub use http::HttpCartApi;

/// Whatever the backend answers to `DELETE /cart/:id`
///
/// Usually the deleted entry, but some backends reply with an empty object.
pub type DeleteAck = serde_json::Value;

#[async_trait(?Send)]
pub trait CartApi {
    /// `GET /inventory`
    async fn get_inventory(&self) -> ApiResult<Vec<InventoryItem>>;

    /// `GET /cart`
    async fn get_cart(&self) -> ApiResult<Vec<CartItem>>;

    /// `POST /cart`, returns the created entry
    async fn add_to_cart(&self, item: &CartItem) -> ApiResult<CartItem>;

    /// `PUT /cart/:id` with the bare new amount as body
    async fn update_cart(&self, id: ItemId, amount: u32) -> ApiResult<CartItem>;

    /// `DELETE /cart/:id`
    async fn delete_from_cart(&self, id: ItemId) -> ApiResult<DeleteAck>;

    /// Delete every entry of the current cart.
    ///
    /// Deletes run concurrently in no particular order. The first failure is
    /// returned without waiting for the rest, and entries already deleted stay
    /// deleted.
    async fn checkout(&self) -> ApiResult<Vec<DeleteAck>> {
        let cart = self.get_cart().await?;
        log::debug!("checkout: deleting {} cart entries", cart.len());
        try_join_all(cart.iter().map(|item| self.delete_from_cart(item.id))).await
    }
}
