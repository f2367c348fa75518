use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::api::ApiClient;
use crate::app::Route;
use crate::session::Session;

#[component]
pub fn NavBar() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let mut api = use_context::<Signal<ApiClient>>();
    let nav = use_navigator();

    let username = session.read().user().map(|user| user.username.clone());
    let user_label = username.map(|name| rsx! { span { class: "meta", "{name}" } });

    rsx! {
        header { class: "header",
            h1 { class: "title", "Job Application Tracker" }
            nav {
                ul { class: "nav-links",
                    li { Link { to: Route::Dashboard {}, "Dashboard" } }
                    li { Link { to: Route::Applications {}, "Applications" } }
                    li { Link { to: Route::Keywords {}, "Manage Keywords" } }
                }
            }
            div { class: "actions",
                {user_label}
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        session.write().logout();
                        api.write().set_token(None);
                        nav.replace(Route::Login {});
                    },
                    "Log out"
                }
            }
        }
    }
}
