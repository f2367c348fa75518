use dioxus::events::Key;
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::models::{Application, ApplicationDraft, ApplicationStatus};

/// Create/edit form for a tracked application. Passing an existing
/// `application` switches the form into edit mode; the parent re-keys the
/// component when the edited entry changes so the draft resets.
#[component]
pub fn ApplicationForm(
    application: Option<Application>,
    on_save: EventHandler<Application>,
    on_cancel: EventHandler<()>,
) -> Element {
    let api = use_context::<Signal<ApiClient>>();
    let editing_id = application.as_ref().map(|app| app.id);
    let heading = if editing_id.is_some() {
        "Edit Application"
    } else {
        "Add New Application"
    };

    let mut draft = use_signal(move || ApplicationDraft::from_existing(application.as_ref()));
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut submit = move || {
        if *submitting.peek() {
            return;
        }
        let payload = (*draft.peek()).clone();
        if payload.job_title.trim().is_empty() || payload.company.trim().is_empty() {
            error.set(Some("Job title and company are required".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let client = (*api.peek()).clone();
        spawn(async move {
            let outcome = match editing_id {
                Some(id) => client.update_application(id, &payload).await,
                None => client.create_application(&payload).await,
            };
            submitting.set(false);
            match outcome {
                Ok(saved) => on_save.call(saved),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let d = draft.read().clone();
    let error_line = error
        .read()
        .as_ref()
        .map(|message| rsx! { p { class: "error", "{message}" } });

    rsx! {
        div { class: "application-form",
            h2 { "{heading}" }
            {error_line}
            label { "Job Title"
                input {
                    value: "{d.job_title}",
                    oninput: move |evt| draft.write().job_title = evt.value(),
                }
            }
            label { "Company"
                input {
                    value: "{d.company}",
                    oninput: move |evt| draft.write().company = evt.value(),
                }
            }
            label { "Application Date"
                input {
                    r#type: "date",
                    value: "{d.application_date}",
                    oninput: move |evt| draft.write().application_date = evt.value(),
                }
            }
            label { "Status"
                select {
                    value: "{d.status}",
                    onchange: move |evt| {
                        if let Some(status) = ApplicationStatus::from_label(&evt.value()) {
                            draft.write().status = status;
                        }
                    },
                    for status in ApplicationStatus::ALL {
                        option { value: "{status}", "{status}" }
                    }
                }
            }
            label { "Job Board"
                input {
                    value: "{d.job_board}",
                    oninput: move |evt| draft.write().job_board = evt.value(),
                }
            }
            label { "URL"
                input {
                    value: "{d.url}",
                    oninput: move |evt| draft.write().url = evt.value(),
                }
            }
            label { "Notes"
                textarea {
                    value: "{d.notes}",
                    oninput: move |evt| draft.write().notes = evt.value(),
                }
            }
            label { "Keywords"
                input {
                    value: "{d.keywords}",
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                    oninput: move |evt| draft.write().keywords = evt.value(),
                }
            }
            div { class: "form-actions",
                button {
                    disabled: *submitting.read(),
                    onclick: move |_| submit(),
                    "Save Application"
                }
                button {
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
