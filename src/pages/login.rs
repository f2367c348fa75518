use dioxus::events::Key;
use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::api::ApiClient;
use crate::app::Route;
use crate::session::Session;

#[component]
pub fn Login() -> Element {
    let mut session = use_context::<Signal<Session>>();
    let mut api = use_context::<Signal<ApiClient>>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut submit = move || {
        if *submitting.peek() {
            return;
        }
        let user = username.peek().trim().to_string();
        let pass = (*password.peek()).clone();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Username and password are required".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let client = (*api.peek()).clone();
        let mut sess = (*session.peek()).clone();
        spawn(async move {
            let outcome = sess.login(&client, &user, &pass).await;
            submitting.set(false);
            match outcome {
                Ok(()) => {
                    api.write().set_token(sess.token().map(str::to_string));
                    session.set(sess);
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let error_line = error
        .read()
        .as_ref()
        .map(|message| rsx! { p { class: "error", "{message}" } });
    let button_label = if *submitting.read() { "Signing in..." } else { "Login" };

    rsx! {
        div { class: "auth-page",
            h1 { "Login" }
            {error_line}
            label { "Username"
                input {
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            label { "Password"
                input {
                    r#type: "password",
                    value: "{password}",
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            button {
                disabled: *submitting.read(),
                onclick: move |_| submit(),
                "{button_label}"
            }
            p {
                "Need an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
