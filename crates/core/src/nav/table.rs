//! Validated, flattened route table

use std::collections::HashMap;

use super::guard::{self, Evaluation, Outcome};
use super::route::{Route, RouteTarget};
use super::{LOGIN_PATH, NOT_FOUND_PATH, REGISTER_PATH};
use crate::error::{CoreError, CoreResult};
use crate::session::{Session, roles};

/// The full route list, checked once at construction.
///
/// Construction rejects duplicate paths, redirects to undeclared paths and
/// redirect chains, so that [`RouteTable::resolve`] is total: every input
/// path lands on exactly one view route.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
}

/// Where a navigation attempt ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation<'a> {
    /// Guard outcome for the originally requested path
    pub outcome: Outcome,
    /// The view route finally landed on
    pub route: &'a Route,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> CoreResult<Self> {
        let mut by_path = HashMap::with_capacity(routes.len());
        for (index, route) in routes.iter().enumerate() {
            if by_path.insert(route.path.clone(), index).is_some() {
                return Err(CoreError::duplicate_route_path(&route.path));
            }
        }

        for route in &routes {
            if let RouteTarget::Redirect { to } = &route.target {
                let Some(&target) = by_path.get(to) else {
                    return Err(CoreError::unknown_redirect_target(&route.path, to));
                };
                if routes[target].is_redirect() {
                    return Err(CoreError::redirect_chain(&route.path, to));
                }
            }
        }

        match by_path.get(NOT_FOUND_PATH) {
            Some(&index) if !routes[index].is_redirect() => {}
            _ => return Err(CoreError::missing_not_found_route(NOT_FOUND_PATH)),
        }

        Ok(Self { routes, by_path })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    fn find(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&index| &self.routes[index])
    }

    fn not_found(&self) -> &Route {
        self.find(NOT_FOUND_PATH)
            .expect("validated table always declares the not-found route")
    }

    /// Map a requested path to its view route.
    ///
    /// A redirect route resolves one hop to its target (chains are rejected
    /// at construction); any undeclared path falls through to `/404`.
    pub fn resolve(&self, path: &str) -> &Route {
        match self.find(path) {
            Some(route) => match &route.target {
                RouteTarget::Redirect { to } => self
                    .find(to)
                    .expect("validated table resolves every redirect target"),
                RouteTarget::View { .. } => route,
            },
            None => self.not_found(),
        }
    }

    /// Resolve `path`, run the guard, and follow its redirect if any.
    ///
    /// The login and not-found routes carry no permission list, so the
    /// follow-up evaluation cannot redirect again.
    pub fn navigate(&self, path: &str, session: &Session) -> Navigation<'_> {
        let target = self.resolve(path);
        let Evaluation { outcome, .. } = guard::evaluate(target, session);
        let route = match outcome {
            Outcome::Proceed => target,
            Outcome::RedirectLogin => self.resolve(LOGIN_PATH),
            Outcome::RedirectNotFound => self.not_found(),
        };
        Navigation { outcome, route }
    }
}

/// The storefront's canonical route list.
///
/// One flat entry per path; redirect entries cover the legacy aliases,
/// and the admin console pages are gated on the `ADMIN` role.
pub fn storefront_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::redirect("/", LOGIN_PATH),
        Route::view(LOGIN_PATH, "user/Login").titled("Sign in"),
        Route::view(REGISTER_PATH, "user/Register").titled("Register"),
        Route::redirect("/home", "/dashboard"),
        Route::view("/dashboard", "user/Dashboard")
            .named("Dashboard")
            .titled("Profile"),
        Route::view("/products", "product/List").titled("Products"),
        Route::view("/product", "product/Detail").titled("Product details"),
        Route::view("/cart", "cart/Cart").titled("Cart"),
        Route::view("/checkout", "cart/Checkout").titled("Checkout"),
        Route::view("/orders", "order/History").titled("Orders"),
        Route::view("/membership", "member/Membership").titled("Membership"),
        Route::view("/addresses", "user/Addresses").titled("Addresses"),
        Route::view("/coupons", "coupon/Coupons").titled("Coupons"),
        Route::view("/admin/products", "admin/Products")
            .titled("Manage products")
            .permitted([roles::ADMIN]),
        Route::view("/admin/advertisements", "admin/Advertisements")
            .titled("Manage advertisements")
            .permitted([roles::ADMIN]),
        Route::view("/admin/coupons", "admin/Coupons")
            .titled("Manage coupons")
            .permitted([roles::ADMIN]),
        Route::view("/admin/members", "admin/Members")
            .titled("Manage members")
            .permitted([roles::ADMIN]),
        Route::view(NOT_FOUND_PATH, "NotFound")
            .named("404")
            .titled("404"),
    ])
    .expect("static route table is valid")
}
