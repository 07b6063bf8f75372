//! Storefront core types and navigation policy
//!
//! Everything in this crate is synchronous and transport-free: domain
//! records mirrored from the backend, the session credential, and the
//! route table with its pre-navigation guard. The HTTP client lives in
//! `storefront-http`.

pub mod error;
pub mod nav;
pub mod session;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use nav::{Evaluation, Navigation, Outcome, Route, RouteMeta, RouteTable};
pub use session::{MemoryStore, Session, SessionStore};
