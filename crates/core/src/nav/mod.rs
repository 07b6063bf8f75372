//! Route table and pre-navigation guard

pub mod guard;
pub mod route;
pub mod table;

pub use guard::{Evaluation, Outcome, evaluate};
pub use route::{Route, RouteMeta, RouteTarget};
pub use table::{Navigation, RouteTable, storefront_routes};

/// Paths with a fixed meaning in the guard algorithm
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const NOT_FOUND_PATH: &str = "/404";
