use dioxus::events::Key;
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::app::RequireAuth;
use crate::components::NavBar;
use crate::models::{remove_by_id, upsert_by_id, Keyword};

#[component]
pub fn Keywords() -> Element {
    rsx! {
        RequireAuth {
            NavBar {}
            KeywordManager {}
        }
    }
}

/// Scrape keywords. Adds and deletes update the list in place from the
/// server's response instead of refetching.
#[component]
fn KeywordManager() -> Element {
    let api = use_context::<Signal<ApiClient>>();
    let mut keywords = use_signal(Vec::<Keyword>::new);
    let mut new_term = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_future(move || {
        let client = (*api.peek()).clone();
        async move {
            match client.list_keywords().await {
                Ok(fetched) => keywords.set(fetched),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        }
    });

    let mut on_add = move || {
        let term = new_term.peek().trim().to_string();
        if term.is_empty() {
            return;
        }
        let client = (*api.peek()).clone();
        spawn(async move {
            match client.add_keyword(&term).await {
                Ok(created) => {
                    let next = upsert_by_id(keywords.peek().as_slice(), created);
                    keywords.set(next);
                    new_term.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let mut on_delete = move |id: u64| {
        let client = (*api.peek()).clone();
        spawn(async move {
            match client.delete_keyword(id).await {
                Ok(()) => {
                    let next = remove_by_id(keywords.peek().as_slice(), id);
                    keywords.set(next);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    if *loading.read() {
        return rsx! { p { "Loading keywords..." } };
    }

    let error_line = error
        .read()
        .as_ref()
        .map(|message| rsx! { p { class: "error", "Error: {message}" } });

    rsx! {
        div { class: "keywords",
            h1 { "Manage Keywords" }
            {error_line}
            div { class: "keyword-input",
                input {
                    placeholder: "Add new keyword",
                    value: "{new_term}",
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            on_add();
                        }
                    },
                    oninput: move |evt| new_term.set(evt.value()),
                }
                button {
                    onclick: move |_| on_add(),
                    "Add Keyword"
                }
            }
            {
                if keywords.read().is_empty() {
                    rsx! {
                        p { "No keywords found. Add some to start scraping!" }
                    }
                } else {
                    rsx! {
                        ul { class: "keyword-list",
                            for keyword in keywords.read().iter().cloned() {
                                li { key: "keyword-{keyword.id}",
                                    span { "{keyword.term}" }
                                    button {
                                        onclick: move |_| on_delete(keyword.id),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
