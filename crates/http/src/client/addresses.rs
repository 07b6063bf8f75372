//! Delivery address endpoints

use super::error::ClientError;
use super::typed::AuthenticatedStoreClient;
use crate::types::ApiEnvelope;
use serde_json::Value as JsonValue;
use storefront_core::types::Address;

impl AuthenticatedStoreClient {
    /// List a user's addresses
    pub async fn addresses(
        &self,
        username: &str,
    ) -> Result<ApiEnvelope<Vec<Address>>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/addresses")
            .query(&[("username", username)]);
        self.execute(req).await
    }

    /// Create an address
    pub async fn add_address(&self, address: &Address) -> Result<ApiEnvelope<Address>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/addresses")
            .json(address);
        self.execute(req).await
    }

    /// Replace the address with the given id
    pub async fn update_address(
        &self,
        id: i64,
        address: &Address,
    ) -> Result<ApiEnvelope<Address>, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/api/addresses/{id}"))
            .json(address);
        self.execute(req).await
    }

    /// Fetch the user's default address
    pub async fn default_address(
        &self,
        username: &str,
    ) -> Result<ApiEnvelope<Address>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/addresses/default")
            .query(&[("username", username)]);
        self.execute(req).await
    }

    /// Delete the address with the given id
    pub async fn delete_address(&self, id: i64) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/api/addresses/{id}"));
        self.execute(req).await
    }

    /// Mark one of the user's addresses as the default
    pub async fn set_default_address(
        &self,
        id: i64,
        username: &str,
    ) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/api/addresses/{id}/default"))
            .query(&[("username", username)]);
        self.execute(req).await
    }
}
