//! Session state: the bearer token, the derived user, and the transitions
//! allowed to touch them. The UI keeps one `Signal<Session>` in context;
//! everything else reads it.

use crate::api::{ApiClient, ApiError};
use crate::storage::TokenStore;

/// The signed-in user. The backend has no profile endpoint, so a session
/// restored from disk only knows that a token exists and carries a
/// placeholder name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

const RESTORED_USERNAME: &str = "user";

#[derive(Clone, Debug)]
pub struct Session {
    token: Option<String>,
    user: Option<CurrentUser>,
    loading: bool,
    store: TokenStore,
}

impl Session {
    /// Session before the stored token has been looked at. The route guard
    /// stays in its pending state until [`Session::resolve`] runs.
    pub fn unresolved(store: TokenStore) -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
            store,
        }
    }

    /// Resolve the stored token into session state. A missing or unreadable
    /// token means "not signed in"; it is never an error.
    pub fn resolve(&mut self) {
        self.token = self.store.load();
        self.user = self.token.as_ref().map(|_| CurrentUser {
            username: RESTORED_USERNAME.to_string(),
        });
        self.loading = false;
        tracing::debug!(authenticated = self.token.is_some(), "session resolved");
    }

    /// Exchange credentials for a token. On success the token is persisted
    /// and token/user are set together; on failure nothing changes and the
    /// error carries the server's message.
    pub async fn login(
        &mut self,
        api: &ApiClient,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        // Callers run this on a clone and write the signal back afterwards,
        // so these loading toggles are only visible to the caller until then.
        self.loading = true;
        let outcome = api.login(username, password).await;
        self.loading = false;

        let grant = outcome?;
        if let Err(err) = self.store.save(&grant.access_token) {
            // The in-memory session still works; only restart persistence
            // is lost.
            tracing::warn!(error = %err, "failed to persist access token");
        }
        self.token = Some(grant.access_token);
        self.user = Some(CurrentUser {
            username: username.to_string(),
        });
        Ok(())
    }

    /// Drop the session locally. No network call.
    pub fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear stored token");
        }
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }
}
