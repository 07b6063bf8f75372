//! User account endpoints

use super::error::ClientError;
use super::typed::{AuthenticatedStoreClient, PublicStoreClient};
use crate::types::{ApiEnvelope, LoginRequest, RegisterRequest, UpdateUserRequest};
use storefront_core::types::User;

impl PublicStoreClient {
    /// Exchange credentials for a session token. The backend reads the
    /// credentials from the query string, not the body.
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiEnvelope<String>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/users/login")
            .query(request);
        self.execute(req).await
    }

    /// Create a new account
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiEnvelope<User>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/users")
            .json(request);
        self.execute(req).await
    }
}

impl AuthenticatedStoreClient {
    /// Fetch a user's profile
    pub async fn user_info(&self, username: &str) -> Result<ApiEnvelope<User>, ClientError> {
        let req = self.request(reqwest::Method::GET, &format!("/api/users/{username}"));
        self.execute(req).await
    }

    /// Update the profile identified by `request.username`
    pub async fn update_user(
        &self,
        request: &UpdateUserRequest,
    ) -> Result<ApiEnvelope<User>, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, "/api/users")
            .json(request);
        self.execute(req).await
    }
}
