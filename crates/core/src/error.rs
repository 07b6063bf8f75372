//! Common error handling utilities and conventions

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Core error types that can be shared across crates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("duplicate route path: {path}")]
    DuplicateRoutePath { path: String },

    #[error("redirect {from} -> {to} points at an unknown path")]
    UnknownRedirectTarget { from: String, to: String },

    #[error("redirect {from} -> {to} lands on another redirect")]
    RedirectChain { from: String, to: String },

    #[error("route table has no {path} route to absorb unknown paths")]
    MissingNotFoundRoute { path: String },
}

impl CoreError {
    /// Create a duplicate route path error
    pub fn duplicate_route_path(path: impl Into<String>) -> Self {
        Self::DuplicateRoutePath { path: path.into() }
    }

    /// Create an unknown redirect target error
    pub fn unknown_redirect_target(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnknownRedirectTarget {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a redirect chain error
    pub fn redirect_chain(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::RedirectChain {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a missing not-found route error
    pub fn missing_not_found_route(path: impl Into<String>) -> Self {
        Self::MissingNotFoundRoute { path: path.into() }
    }
}
