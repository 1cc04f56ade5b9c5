use yew::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::models::{TokenResponse, User};

const TOKEN_KEY: &str = "token";

pub fn stored_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

pub fn store_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

pub fn clear_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Unauthenticated: no user, not loading. Authenticating: no user,
/// loading. Authenticated: user present. The user field is only ever
/// written here, never by pages.
#[derive(Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

impl Session {
    // initial state on app start: authenticating iff a token survived
    pub fn boot() -> Self {
        Self {
            user: None,
            loading: stored_token().is_some(),
        }
    }
}

pub type SessionHandle = UseStateHandle<Session>;

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("session context not mounted")
}

// resolves a persisted token into a user; a rejected token forces logout
pub async fn restore_session(api: &ApiClient, session: SessionHandle) {
    match api.get::<User>("/users/me", &[]).await {
        Ok(user) => session.set(Session {
            user: Some(user),
            loading: false,
        }),
        Err(err) => {
            web_sys::console::error_1(&format!("session restore failed: {}", err).into());
            clear_token();
            session.set(Session {
                user: None,
                loading: false,
            });
        }
    }
}

pub async fn login(
    api: &ApiClient,
    session: SessionHandle,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let token: TokenResponse = api
        .post_form("/token", &[("username", username), ("password", password)])
        .await?;
    store_token(&token.access_token);
    session.set(Session {
        user: None,
        loading: true,
    });
    restore_session(api, session).await;
    Ok(())
}

// synchronous by contract: clears state locally, never calls the server
pub fn logout(session: &SessionHandle) {
    clear_token();
    session.set(Session {
        user: None,
        loading: false,
    });
}
