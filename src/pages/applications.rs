use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::app::RequireAuth;
use crate::components::{ApplicationForm, NavBar};
use crate::models::{remove_by_id, upsert_by_id, Application};

#[component]
pub fn Applications() -> Element {
    rsx! {
        RequireAuth {
            NavBar {}
            ApplicationManager {}
        }
    }
}

/// Tracked applications plus the create/edit form. `editing` is `None` when
/// the form is hidden, `Some(None)` for a new entry and `Some(Some(app))`
/// when editing an existing one.
#[component]
fn ApplicationManager() -> Element {
    let api = use_context::<Signal<ApiClient>>();
    let mut applications = use_signal(Vec::<Application>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut editing = use_signal(|| None::<Option<Application>>);

    use_future(move || {
        let client = (*api.peek()).clone();
        async move {
            match client.list_applications().await {
                Ok(fetched) => applications.set(fetched),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        }
    });

    let mut on_delete = move |id: u64| {
        let client = (*api.peek()).clone();
        spawn(async move {
            match client.delete_application(id).await {
                Ok(()) => {
                    let next = remove_by_id(applications.peek().as_slice(), id);
                    applications.set(next);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    if *loading.read() {
        return rsx! { p { "Loading applications..." } };
    }

    let error_line = error
        .read()
        .as_ref()
        .map(|message| rsx! { p { class: "error", "Error: {message}" } });

    // Re-keyed per edited entry so the draft resets when the target changes.
    let form = editing.read().clone().map(|target| {
        let form_key = target.as_ref().map(|app| app.id).unwrap_or(0);
        rsx! {
            ApplicationForm {
                key: "application-form-{form_key}",
                application: target,
                on_save: move |saved: Application| {
                    let next = upsert_by_id(applications.peek().as_slice(), saved);
                    applications.set(next);
                    editing.set(None);
                },
                on_cancel: move |_| editing.set(None),
            }
        }
    });

    rsx! {
        div { class: "applications",
            h1 { "Job Applications" }
            {error_line}
            button {
                onclick: move |_| editing.set(Some(None)),
                "Add New Application"
            }
            {form}
            {
                if applications.read().is_empty() {
                    rsx! {
                        p { "No applications found. Start by adding one!" }
                    }
                } else {
                    let rows: Vec<Element> = applications.read().iter().cloned().map(|app| {
                        let app_for_edit = app.clone();
                        rsx! {
                            li { key: "application-{app.id}",
                                strong { "{app.job_title}" }
                                " at {app.company} - {app.status} (Applied on: {app.application_date})"
                                button {
                                    onclick: move |_| {
                                        editing.set(Some(Some(app_for_edit.clone())));
                                    },
                                    "Edit"
                                }
                                button {
                                    onclick: move |_| on_delete(app.id),
                                    "Delete"
                                }
                            }
                        }
                    }).collect();
                    rsx! {
                        ul { class: "application-list", {rows.into_iter()} }
                    }
                }
            }
        }
    }
}
