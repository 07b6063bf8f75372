//! Static route descriptors

/// Access metadata declared on a route.
///
/// `title` is applied to the document on every evaluation of the route and
/// never participates in the gating decision. `permission` lists the roles
/// allowed through; a route without one is open to any authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<String>,
    pub permission: Option<Vec<String>>,
}

/// What a path points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// An opaque view identifier; rendering is outside this crate
    View { view: String },
    /// An unconditional redirect to another declared path
    Redirect { to: String },
}

/// One navigable path. Defined once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub name: Option<String>,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

impl Route {
    /// A route rendering a view
    pub fn view(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::View { view: view.into() },
            meta: RouteMeta::default(),
        }
    }

    /// A route that forwards to another path
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect { to: to.into() },
            meta: RouteMeta::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    /// Restrict the route to the given roles
    pub fn permitted<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta.permission = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect { .. })
    }
}
