//! Coupon endpoints

use super::error::ClientError;
use super::typed::AuthenticatedStoreClient;
use crate::types::{ApiEnvelope, CouponAssignRequest};
use serde_json::Value as JsonValue;
use storefront_core::types::Coupon;

impl AuthenticatedStoreClient {
    /// Every coupon ever assigned to a user
    pub async fn coupons(&self, username: &str) -> Result<ApiEnvelope<Vec<Coupon>>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/coupons")
            .query(&[("username", username)]);
        self.execute(req).await
    }

    /// Coupons a user can still spend
    pub async fn available_coupons(
        &self,
        username: &str,
    ) -> Result<ApiEnvelope<Vec<Coupon>>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/coupons/available")
            .query(&[("username", username)]);
        self.execute(req).await
    }

    /// Assign a coupon template to a batch of members
    pub async fn create_coupons(
        &self,
        request: &CouponAssignRequest,
    ) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/coupons")
            .json(request);
        self.execute(req).await
    }

    /// Spend a coupon against the current checkout
    pub async fn apply_coupon(&self, coupon: &Coupon) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, "/api/coupons/apply")
            .json(coupon);
        self.execute(req).await
    }
}
