use dioxus::events::Key;
use dioxus::prelude::*;
use dioxus_router::prelude::use_navigator;

use crate::api::ApiClient;
use crate::app::Route;

#[component]
pub fn Register() -> Element {
    let api = use_context::<Signal<ApiClient>>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut submit = move || {
        if *submitting.peek() {
            return;
        }
        let user = username.peek().trim().to_string();
        let address = email.peek().trim().to_string();
        let pass = (*password.peek()).clone();
        if user.is_empty() || address.is_empty() || pass.is_empty() {
            error.set(Some("All fields are required".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let client = (*api.peek()).clone();
        spawn(async move {
            let outcome = client.register(&user, &address, &pass).await;
            submitting.set(false);
            match outcome {
                Ok(()) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let error_line = error
        .read()
        .as_ref()
        .map(|message| rsx! { p { class: "error", "{message}" } });

    rsx! {
        div { class: "auth-page",
            h1 { "Register" }
            {error_line}
            label { "Username"
                input {
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            label { "Email"
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
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
                "Register"
            }
            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
