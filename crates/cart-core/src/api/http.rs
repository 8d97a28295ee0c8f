//! HTTP Cart API
//!
//! reqwest client for the cart backend. On wasm32 reqwest goes through the
//! browser's fetch.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{CartApi, DeleteAck};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{CartItem, InventoryItem, ItemId};

#[derive(Debug, Clone)]
pub struct HttpCartApi {
    client: Client,
    base_url: String,
}

impl HttpCartApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn cart_entry_url(&self, id: ItemId) -> String {
        self.url(&format!("cart/{}", id))
    }

    /// Send a request and decode a JSON body from a 2xx response
    async fn send_json<T: DeserializeOwned>(
        &self,
        url: String,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered {}", url, status);
            return Err(ApiError::Http { status: status.as_u16(), url });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait(?Send)]
impl CartApi for HttpCartApi {
    async fn get_inventory(&self) -> ApiResult<Vec<InventoryItem>> {
        let url = self.url("inventory");
        self.send_json(url.clone(), self.client.get(&url)).await
    }

    async fn get_cart(&self) -> ApiResult<Vec<CartItem>> {
        let url = self.url("cart");
        self.send_json(url.clone(), self.client.get(&url)).await
    }

    async fn add_to_cart(&self, item: &CartItem) -> ApiResult<CartItem> {
        let url = self.url("cart");
        log::debug!("POST {} {:?}", url, item);
        self.send_json(url.clone(), self.client.post(&url).json(item)).await
    }

    async fn update_cart(&self, id: ItemId, amount: u32) -> ApiResult<CartItem> {
        let url = self.cart_entry_url(id);
        log::debug!("PUT {} {}", url, amount);
        self.send_json(url.clone(), self.client.put(&url).json(&amount)).await
    }

    async fn delete_from_cart(&self, id: ItemId) -> ApiResult<DeleteAck> {
        let url = self.cart_entry_url(id);
        log::debug!("DELETE {}", url);
        let request = self.client.delete(&url).header(CONTENT_TYPE, "application/json");
        self.send_json(url.clone(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_on_single_slash() {
        let api = HttpCartApi::new(&Config::default().with_base_url("http://localhost:3000/"));
        assert_eq!(api.url("inventory"), "http://localhost:3000/inventory");
        assert_eq!(api.url("/cart"), "http://localhost:3000/cart");
        assert_eq!(api.cart_entry_url(ItemId(4)), "http://localhost:3000/cart/4");
    }

    #[test]
    fn test_update_body_is_bare_amount() {
        assert_eq!(serde_json::to_string(&5u32).unwrap(), "5");
    }
}
