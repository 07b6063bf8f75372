//! Product review endpoints

use super::error::ClientError;
use super::typed::{AuthenticatedStoreClient, PublicStoreClient};
use crate::types::ApiEnvelope;
use storefront_core::types::Review;

impl PublicStoreClient {
    /// Reviews left on a product
    pub async fn reviews(&self, product_id: &str) -> Result<ApiEnvelope<Vec<Review>>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/reviews")
            .query(&[("productId", product_id)]);
        self.execute(req).await
    }
}

impl AuthenticatedStoreClient {
    /// Leave a review on a purchased product
    pub async fn create_review(&self, review: &Review) -> Result<ApiEnvelope<Review>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/reviews")
            .json(review);
        self.execute(req).await
    }
}
