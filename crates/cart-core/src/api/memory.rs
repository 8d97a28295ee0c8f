//! In-memory cart backend for tests.
//!
//! Behaves like the REST backend and records each request as a
//! `METHOD path [body]` line.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{CartApi, DeleteAck};
use crate::error::{ApiError, ApiResult};
use crate::models::{CartItem, InventoryItem, ItemId};

#[derive(Debug, Default)]
pub struct MemoryCartApi {
    inventory: Vec<InventoryItem>,
    cart: RefCell<Vec<CartItem>>,
    requests: RefCell<Vec<String>>,
    fail_delete: Cell<Option<ItemId>>,
    offline: Cell<bool>,
}

impl MemoryCartApi {
    pub fn new(inventory: Vec<InventoryItem>, cart: Vec<CartItem>) -> Self {
        Self {
            inventory,
            cart: RefCell::new(cart),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    pub fn server_cart(&self) -> Vec<CartItem> {
        self.cart.borrow().clone()
    }

    /// Make `DELETE /cart/:id` fail for this id
    pub fn fail_delete_of(&self, id: ItemId) {
        self.fail_delete.set(Some(id));
    }

    /// Make every request fail with a network error
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn record(&self, line: String) -> ApiResult<()> {
        self.requests.borrow_mut().push(line);
        if self.offline.get() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn not_found(id: ItemId) -> ApiError {
        ApiError::Http { status: 404, url: format!("/cart/{}", id) }
    }
}

#[async_trait(?Send)]
impl CartApi for MemoryCartApi {
    async fn get_inventory(&self) -> ApiResult<Vec<InventoryItem>> {
        self.record("GET /inventory".to_string())?;
        Ok(self.inventory.clone())
    }

    async fn get_cart(&self) -> ApiResult<Vec<CartItem>> {
        self.record("GET /cart".to_string())?;
        Ok(self.cart.borrow().clone())
    }

    async fn add_to_cart(&self, item: &CartItem) -> ApiResult<CartItem> {
        self.record(format!("POST /cart {}", serde_json::to_string(item)?))?;
        self.cart.borrow_mut().push(item.clone());
        Ok(item.clone())
    }

    async fn update_cart(&self, id: ItemId, amount: u32) -> ApiResult<CartItem> {
        self.record(format!("PUT /cart/{} {}", id, serde_json::to_string(&amount)?))?;
        let mut cart = self.cart.borrow_mut();
        let entry = cart.iter_mut().find(|item| item.id == id).ok_or_else(|| Self::not_found(id))?;
        entry.amount = amount;
        Ok(entry.clone())
    }

    async fn delete_from_cart(&self, id: ItemId) -> ApiResult<DeleteAck> {
        self.record(format!("DELETE /cart/{}", id))?;
        if self.fail_delete.get() == Some(id) {
            return Err(ApiError::Http { status: 500, url: format!("/cart/{}", id) });
        }
        let mut cart = self.cart.borrow_mut();
        let position = cart
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        let removed = cart.remove(position);
        Ok(serde_json::to_value(removed)?)
    }
}
