//! Storefront HTTP client
//!
//! Typed wrappers over the storefront REST backend. Every endpoint method
//! issues exactly one HTTP call and hands back the backend's
//! `{code, msg, data}` envelope untouched; no retries, no caching, and no
//! interpretation of the envelope's `code`.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{AuthenticatedStoreClient, PublicStoreClient, TypedClientBuilder};
pub use types::ApiEnvelope;
