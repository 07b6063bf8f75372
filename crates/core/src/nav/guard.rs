//! Pre-navigation access decisions

use super::route::Route;
use super::{LOGIN_PATH, REGISTER_PATH};
use crate::session::Session;

/// The gating decision for one attempted transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Proceed,
    RedirectLogin,
    RedirectNotFound,
}

/// Result of evaluating the guard against one target route.
///
/// `title` is the target's declared document title. It is reported whenever
/// the target declares one, including evaluations that redirect away; the
/// redirect target then gets its own evaluation and its own title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub outcome: Outcome,
    pub title: Option<String>,
}

impl Evaluation {
    pub fn proceeds(&self) -> bool {
        self.outcome == Outcome::Proceed
    }
}

/// Decide whether a transition to `route` may proceed.
///
/// Synchronous and total: every input, including an absent or garbled
/// role, maps to exactly one outcome, and the session is never mutated.
/// Without a usable token only `/login` and `/register` are reachable;
/// with one, a declared permission list admits only members of that list
/// and everything else falls through to the not-found page.
pub fn evaluate(route: &Route, session: &Session) -> Evaluation {
    let title = route.meta.title.clone();

    let outcome = if session.has_token() {
        match &route.meta.permission {
            Some(allowed) => {
                let held = session.role.as_deref();
                if held.is_some_and(|role| allowed.iter().any(|r| r == role)) {
                    Outcome::Proceed
                } else {
                    Outcome::RedirectNotFound
                }
            }
            None => Outcome::Proceed,
        }
    } else if route.path == LOGIN_PATH || route.path == REGISTER_PATH {
        Outcome::Proceed
    } else {
        Outcome::RedirectLogin
    };

    Evaluation { outcome, title }
}
