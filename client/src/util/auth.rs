//! Route gating by token presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session storage only exists in the browser, so gates run as effects after
//! hydration rather than during server rendering. Validity and expiry of the
//! token are never checked; the server rejects stale tokens on use.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::session::{SessionTokens, has_token};

pub const SIGNUP_ROUTE: &str = "/signup";
pub const LOGIN_ROUTE: &str = "/login";
pub const QUIZZES_ROUTE: &str = "/quizzes";

/// Where `/` sends the visitor.
pub fn landing_path(authenticated: bool) -> &'static str {
    if authenticated { QUIZZES_ROUTE } else { SIGNUP_ROUTE }
}

/// Where `/login` sends an already-authenticated visitor, if anywhere.
pub fn login_redirect(authenticated: bool) -> Option<&'static str> {
    authenticated.then_some(QUIZZES_ROUTE)
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect from `/` to the landing route once hydrated.
pub fn install_landing_redirect<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        navigate(landing_path(has_token(&SessionTokens)), replace());
    });
}

/// Redirect away from `/login` when a token is already stored.
///
/// `checked` flips to `true` once the decision is made so the page can hold
/// back the form until then.
pub fn install_login_redirect<F>(navigate: F, checked: RwSignal<bool>)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = login_redirect(has_token(&SessionTokens)) {
            navigate(target, replace());
        } else {
            checked.set(true);
        }
    });
}

/// Navigate whenever `target` is set, then clear it.
///
/// Async handlers set the signal instead of holding a navigate closure.
pub fn install_pending_navigation<F>(target: RwSignal<Option<&'static str>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(path, NavigateOptions::default());
        }
    });
}
