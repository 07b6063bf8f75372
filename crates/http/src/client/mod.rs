//! Storefront API client
//!
//! [`typed`] holds the transport: a public client for the endpoints that
//! work without a credential and an authenticated client that attaches the
//! session token as a bearer header. The sibling modules add one method
//! per backend endpoint on whichever client may call it.

pub mod addresses;
pub mod advertisements;
pub mod cart;
pub mod coupons;
pub mod error;
pub mod images;
pub mod members;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod typed;
pub mod users;

pub use error::ClientError;
pub use typed::{AuthenticatedStoreClient, PublicStoreClient, TypedClientBuilder};
