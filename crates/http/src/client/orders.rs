//! Order and payment endpoints

use super::error::ClientError;
use super::typed::AuthenticatedStoreClient;
use crate::types::{ApiEnvelope, PaymentInitiation, PaymentNotification};
use serde_json::Value as JsonValue;
use storefront_core::types::Order;

impl AuthenticatedStoreClient {
    /// A user's order history
    pub async fn orders(&self, username: &str) -> Result<ApiEnvelope<Vec<Order>>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/orders")
            .query(&[("username", username)]);
        self.execute(req).await
    }

    /// Ask the backend for the payment form of a pending order
    pub async fn pay_order(
        &self,
        order_id: &str,
    ) -> Result<ApiEnvelope<PaymentInitiation>, ClientError> {
        let req = self.request(reqwest::Method::POST, &format!("/api/orders/{order_id}/pay"));
        self.execute(req).await
    }

    /// Relay a settlement callback from the payment provider
    pub async fn notify_payment(
        &self,
        notification: &PaymentNotification,
    ) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/orders/notify")
            .json(notification);
        self.execute(req).await
    }
}
