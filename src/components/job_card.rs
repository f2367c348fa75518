use dioxus::prelude::*;

use crate::models::{JobPosting, JobStatus};

/// One scraped posting with its status actions. The button matching the
/// current status is disabled so the same transition cannot be re-sent.
#[component]
pub fn JobCard(job: JobPosting, on_action: EventHandler<JobStatus>) -> Element {
    let salary_line = job
        .salary
        .as_ref()
        .map(|salary| rsx! { p { class: "meta", "Salary: {salary}" } });

    rsx! {
        div { class: "job-card",
            h2 { "{job.title}" }
            h3 { "{job.company}" }
            p { "{job.description}" }
            a {
                href: "{job.application_link}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Apply"
            }
            {salary_line}
            p { "Status: {job.status}" }
            div { class: "job-actions",
                button {
                    disabled: job.status == JobStatus::Saved,
                    onclick: move |_| on_action.call(JobStatus::Saved),
                    "Save"
                }
                button {
                    disabled: job.status == JobStatus::Applied,
                    onclick: move |_| on_action.call(JobStatus::Applied),
                    "Apply"
                }
                button {
                    disabled: job.status == JobStatus::Hidden,
                    onclick: move |_| on_action.call(JobStatus::Hidden),
                    "Hide"
                }
            }
        }
    }
}
