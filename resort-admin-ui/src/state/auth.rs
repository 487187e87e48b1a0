//! Admin Token
//!
//! The admin token lives in `localStorage` under `admin_token`, written by
//! the login flow of the main site.

use leptos::*;

use resort_admin::{TokenSource, TOKEN_KEY};

/// Reads the admin token from browser storage on every request
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageToken;

impl TokenSource for LocalStorageToken {
    fn admin_token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }
}

/// Provide the token source to the component tree
pub fn provide_token_source() {
    provide_context(LocalStorageToken);
}
