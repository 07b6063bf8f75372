//! Shopping cart and checkout endpoints

use super::error::ClientError;
use super::typed::AuthenticatedStoreClient;
use crate::types::{ApiEnvelope, CartAddRequest, CartListData, CartQuantityPatch, CheckoutRequest};
use serde_json::Value as JsonValue;
use storefront_core::types::{CartItem, Order};

impl AuthenticatedStoreClient {
    /// Put a product into the cart
    pub async fn add_to_cart(
        &self,
        request: &CartAddRequest,
    ) -> Result<ApiEnvelope<CartItem>, ClientError> {
        let req = self.request(reqwest::Method::POST, "/api/cart").json(request);
        self.execute(req).await
    }

    /// Drop an item from the cart
    pub async fn remove_cart_item(
        &self,
        cart_item_id: &str,
    ) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/api/cart/{cart_item_id}"));
        self.execute(req).await
    }

    /// Change an item's quantity
    pub async fn update_cart_item(
        &self,
        cart_item_id: &str,
        patch: &CartQuantityPatch,
    ) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self
            .request(reqwest::Method::PATCH, &format!("/api/cart/{cart_item_id}"))
            .json(patch);
        self.execute(req).await
    }

    /// Fetch the cart with its running totals
    pub async fn cart(&self) -> Result<ApiEnvelope<CartListData>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/api/cart");
        self.execute(req).await
    }

    /// Turn selected cart items into an order
    pub async fn checkout(
        &self,
        request: &CheckoutRequest,
    ) -> Result<ApiEnvelope<Order>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/cart/checkout")
            .json(request);
        self.execute(req).await
    }
}
