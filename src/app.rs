use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::api::ApiClient;
use crate::pages::{Applications, Dashboard, Keywords, Login, Register};
use crate::session::Session;
use crate::storage::TokenStore;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/applications")]
    Applications {},
    #[route("/keywords")]
    Keywords {},
}

#[component]
pub fn App() -> Element {
    // Last-resort store: a temp-dir token does not survive a temp purge, so
    // sessions may not outlive a restart in this mode.
    let store = use_hook(|| {
        TokenStore::open().unwrap_or_else(|err| {
            tracing::warn!(
                error = %err,
                "no platform data directory; tokens stored under the temp dir will not persist reliably"
            );
            TokenStore::at(std::env::temp_dir().join("jobtrack"))
        })
    });

    let session = use_signal({
        let store = store.clone();
        move || Session::unresolved(store.clone())
    });
    let api = use_signal(ApiClient::from_env);

    use_context_provider(|| session);
    use_context_provider(|| api);

    // One-time resolution of the stored token after first render.
    {
        let mut session = session;
        let mut api = api;
        use_effect(move || {
            let mut sess = (*session.peek()).clone();
            sess.resolve();
            api.write().set_token(sess.token().map(str::to_string));
            session.set(sess);
        });
    }

    rsx! { Router::<Route> {} }
}

#[component]
fn Home() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::Dashboard {});
    });
    rsx! { div { class: "app", "Redirecting..." } }
}

/// What the route guard decided for the current render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session resolution has not finished; render a neutral view.
    Pending,
    Allowed,
    Denied,
}

impl GuardDecision {
    pub fn evaluate(loading: bool, authenticated: bool) -> Self {
        if loading {
            Self::Pending
        } else if authenticated {
            Self::Allowed
        } else {
            Self::Denied
        }
    }
}

/// Wraps every view that requires a session. Denied sessions are sent to the
/// login page; there is no way back to pending short of a full relaunch.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_context::<Signal<Session>>();
    let nav = use_navigator();

    let decision = {
        let sess = session.read();
        GuardDecision::evaluate(sess.loading(), sess.is_authenticated())
    };

    use_effect(move || {
        let sess = session.read();
        let decision = GuardDecision::evaluate(sess.loading(), sess.is_authenticated());
        if decision == GuardDecision::Denied {
            nav.replace(Route::Login {});
        }
    });

    match decision {
        GuardDecision::Pending => rsx! { div { class: "card", "Loading authentication..." } },
        GuardDecision::Denied => rsx! { div { class: "card", "Redirecting to login..." } },
        GuardDecision::Allowed => rsx! { {children} },
    }
}
