//! Session of the signed-in user.
//!
//! Login and token refresh live in the separate login application; this side
//! only reads what it stored and offers logout.

use super::storage;
use leptos::prelude::*;

const LOGIN_URL: &str = "/login";

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub username: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState {
        username: storage::get_username(),
    });
    if storage::get_access_token().is_none() {
        log::warn!("auth: no access token in localStorage");
    }

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Clears the stored session and hands over to the login application.
pub fn do_logout(auth_state: RwSignal<AuthState>) {
    storage::clear_tokens();
    auth_state.set(AuthState::default());
    log::info!("auth: logged out");

    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_URL);
    }
}
