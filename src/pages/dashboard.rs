use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::app::RequireAuth;
use crate::components::{JobCard, NavBar};
use crate::models::{patch_by_id, JobPosting, JobStatus};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequireAuth {
            NavBar {}
            JobBoard {}
        }
    }
}

/// Scraped postings with save/apply/hide actions. A status change swaps in
/// the updated posting only; the rest of the list is untouched.
#[component]
fn JobBoard() -> Element {
    let api = use_context::<Signal<ApiClient>>();
    let mut jobs = use_signal(Vec::<JobPosting>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_future(move || {
        let client = (*api.peek()).clone();
        async move {
            match client.list_jobs().await {
                Ok(fetched) => jobs.set(fetched),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        }
    });

    let mut on_action = move |job_id: u64, target: JobStatus| {
        let client = (*api.peek()).clone();
        spawn(async move {
            match client.update_job_status(job_id, target).await {
                Ok(updated) => {
                    let next = patch_by_id(jobs.peek().as_slice(), updated);
                    jobs.set(next);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    if *loading.read() {
        return rsx! { p { "Loading jobs..." } };
    }
    if let Some(message) = error.read().as_ref() {
        return rsx! { p { class: "error", "Error: {message}" } };
    }

    rsx! {
        div { class: "dashboard",
            h1 { "Dashboard" }
            {
                if jobs.read().is_empty() {
                    rsx! {
                        p { "No jobs found. Try adjusting your keywords or wait for new scrapes." }
                    }
                } else {
                    rsx! {
                        div { class: "job-list",
                            for job in jobs.read().iter().cloned() {
                                JobCard {
                                    key: "job-{job.id}",
                                    job: job.clone(),
                                    on_action: move |target| on_action(job.id, target),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
