//! Advertisement endpoints

use super::error::ClientError;
use super::typed::{AuthenticatedStoreClient, PublicStoreClient};
use crate::types::ApiEnvelope;
use serde_json::Value as JsonValue;
use storefront_core::types::Advertisement;

impl PublicStoreClient {
    /// List all running advertisements
    pub async fn advertisements(&self) -> Result<ApiEnvelope<Vec<Advertisement>>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/api/advertisements");
        self.execute(req).await
    }
}

impl AuthenticatedStoreClient {
    /// Create an advertisement
    pub async fn create_advertisement(
        &self,
        advertisement: &Advertisement,
    ) -> Result<ApiEnvelope<Advertisement>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/advertisements")
            .json(advertisement);
        self.execute(req).await
    }

    /// Update an advertisement; the id travels in the body
    pub async fn update_advertisement(
        &self,
        advertisement: &Advertisement,
    ) -> Result<ApiEnvelope<Advertisement>, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, "/api/advertisements")
            .json(advertisement);
        self.execute(req).await
    }

    /// Delete the advertisement with the given id
    pub async fn delete_advertisement(
        &self,
        id: i64,
    ) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self.request(
            reqwest::Method::DELETE,
            &format!("/api/advertisements/{id}"),
        );
        self.execute(req).await
    }
}
