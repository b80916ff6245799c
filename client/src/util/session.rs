//! Bearer token persistence in browser `sessionStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only state shared between routes. It lives for the
//! browser session under [`TOKEN_KEY`] and is never refreshed or validated
//! client-side; presence alone means "logged in".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session-storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Read/write access to the stored bearer token.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
}

/// [`TokenStore`] over `window.sessionStorage`.
///
/// Outside the browser (SSR, native tests) reads return `None` and writes
/// are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionTokens;

impl TokenStore for SessionTokens {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
                leptos::logging::warn!("session storage unavailable; token not saved");
                return;
            };
            if let Err(err) = storage.set_item(TOKEN_KEY, token) {
                leptos::logging::warn!("failed to save token: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }
}

/// The stored token, treating an empty string as absent.
pub fn stored_token<S: TokenStore>(store: &S) -> Option<String> {
    store.token().filter(|token| !token.is_empty())
}

/// True when a non-empty token is stored.
pub fn has_token<S: TokenStore>(store: &S) -> bool {
    stored_token(store).is_some()
}
