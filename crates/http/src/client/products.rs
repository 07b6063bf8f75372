//! Product catalog and stockpile endpoints

use super::error::ClientError;
use super::typed::{AuthenticatedStoreClient, PublicStoreClient};
use crate::types::{ApiEnvelope, PageQuery, StockAdjustment};
use serde_json::Value as JsonValue;
use storefront_core::types::{Product, Stock};

impl PublicStoreClient {
    /// List the whole catalog
    pub async fn products(&self) -> Result<ApiEnvelope<Vec<Product>>, ClientError> {
        let req = self.request(reqwest::Method::GET, "/api/products");
        self.execute(req).await
    }

    /// Fetch one product with its specifications
    pub async fn product(&self, id: &str) -> Result<ApiEnvelope<Product>, ClientError> {
        let req = self.request(reqwest::Method::GET, &format!("/api/products/{id}"));
        self.execute(req).await
    }

    /// Page through the catalog ranked by sales
    pub async fn products_by_sales(
        &self,
        page: PageQuery,
    ) -> Result<ApiEnvelope<Vec<Product>>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/products/by-sales")
            .query(&page);
        self.execute(req).await
    }

    /// Page through the catalog ranked by review score
    pub async fn products_by_score(
        &self,
        page: PageQuery,
    ) -> Result<ApiEnvelope<Vec<Product>>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/products/by-score")
            .query(&page);
        self.execute(req).await
    }
}

impl AuthenticatedStoreClient {
    /// Add a product to the catalog
    pub async fn create_product(
        &self,
        product: &Product,
    ) -> Result<ApiEnvelope<Product>, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/api/products")
            .json(product);
        self.execute(req).await
    }

    /// Update a product; the id travels in the body
    pub async fn update_product(
        &self,
        product: &Product,
    ) -> Result<ApiEnvelope<Product>, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, "/api/products")
            .json(product);
        self.execute(req).await
    }

    /// Remove a product from the catalog
    pub async fn delete_product(&self, id: &str) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("/api/products/{id}"));
        self.execute(req).await
    }

    /// Read a product's stockpile
    pub async fn stockpile(&self, product_id: &str) -> Result<ApiEnvelope<Stock>, ClientError> {
        let req = self.request(
            reqwest::Method::GET,
            &format!("/api/products/stockpile/{product_id}"),
        );
        self.execute(req).await
    }

    /// Apply a signed delta to a product's stockpile
    pub async fn adjust_stockpile(
        &self,
        product_id: &str,
        adjustment: &StockAdjustment,
    ) -> Result<ApiEnvelope<JsonValue>, ClientError> {
        let req = self
            .request(
                reqwest::Method::PATCH,
                &format!("/api/products/stockpile/{product_id}"),
            )
            .json(adjustment);
        self.execute(req).await
    }
}
