//! Membership endpoints

use super::error::ClientError;
use super::typed::AuthenticatedStoreClient;
use crate::types::{ApiEnvelope, ChargeRequest};
use storefront_core::types::Member;

impl AuthenticatedStoreClient {
    /// Buy or extend a membership. The backend reads the charge from the
    /// query string, not the body.
    pub async fn charge_membership(
        &self,
        request: &ChargeRequest,
    ) -> Result<ApiEnvelope<Member>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/members/charge")
            .query(request);
        self.execute(req).await
    }

    /// Fetch a user's membership record
    pub async fn member(&self, username: &str) -> Result<ApiEnvelope<Member>, ClientError> {
        let req = self.request(reqwest::Method::GET, &format!("/api/members/{username}"));
        self.execute(req).await
    }

    /// Whether a user currently holds an active membership
    pub async fn check_member(&self, username: &str) -> Result<ApiEnvelope<bool>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/members/checkmember")
            .query(&[("username", username)]);
        self.execute(req).await
    }

    /// All members, for the admin console
    pub async fn members(&self) -> Result<ApiEnvelope<Vec<Member>>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/api/members/list");
        self.execute(req).await
    }
}
