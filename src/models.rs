use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a scraped job posting, as reported by the backend.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    New,
    Saved,
    Applied,
    Hidden,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::New => "new",
            Self::Saved => "saved",
            Self::Applied => "applied",
            Self::Hidden => "hidden",
        };
        f.write_str(label)
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub description: String,
    pub application_link: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub status: JobStatus,
}

/// Stage of a tracked application. Serialized with its display label, which
/// is what the backend stores.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Interviewing,
    Rejected,
    Offer,
    Accepted,
}

impl ApplicationStatus {
    pub const ALL: [Self; 5] = [
        Self::Applied,
        Self::Interviewing,
        Self::Rejected,
        Self::Offer,
        Self::Accepted,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Applied" => Some(Self::Applied),
            "Interviewing" => Some(Self::Interviewing),
            "Rejected" => Some(Self::Rejected),
            "Offer" => Some(Self::Offer),
            "Accepted" => Some(Self::Accepted),
            _ => None,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Applied => "Applied",
            Self::Interviewing => "Interviewing",
            Self::Rejected => "Rejected",
            Self::Offer => "Offer",
            Self::Accepted => "Accepted",
        };
        f.write_str(label)
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Application {
    pub id: u64,
    pub job_title: String,
    pub company: String,
    pub application_date: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub job_board: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub keywords: String,
}

/// Request body for creating or updating an application. The backend assigns
/// the id, so the draft never carries one.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ApplicationDraft {
    pub job_title: String,
    pub company: String,
    pub application_date: String,
    pub status: ApplicationStatus,
    pub job_board: String,
    pub url: String,
    pub notes: String,
    pub keywords: String,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            company: String::new(),
            application_date: String::new(),
            status: ApplicationStatus::Applied,
            job_board: String::new(),
            url: String::new(),
            notes: String::new(),
            keywords: String::new(),
        }
    }
}

impl ApplicationDraft {
    /// Seed the draft from an existing record (edit mode) or start blank
    /// (create mode).
    pub fn from_existing(application: Option<&Application>) -> Self {
        match application {
            Some(app) => Self {
                job_title: app.job_title.clone(),
                company: app.company.clone(),
                application_date: app.application_date.clone(),
                status: app.status,
                job_board: app.job_board.clone(),
                url: app.url.clone(),
                notes: app.notes.clone(),
                keywords: app.keywords.clone(),
            },
            None => Self::default(),
        }
    }
}

/// User-managed search term that seeds the scraper.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Keyword {
    pub id: u64,
    pub term: String,
}

/// Entities addressable by their server-assigned id.
pub trait Identified {
    fn id(&self) -> u64;
}

impl Identified for JobPosting {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for Application {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for Keyword {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Replace the element matching `updated`'s id, leaving every other element
/// untouched. Returns a new vector; an unknown id is a no-op copy.
pub fn patch_by_id<T: Identified + Clone>(items: &[T], updated: T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.id() == updated.id() {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Drop the element with the given id, if present.
pub fn remove_by_id<T: Identified + Clone>(items: &[T], id: u64) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.id() != id)
        .cloned()
        .collect()
}

/// Patch the matching element, or append when the id is not in the list yet.
pub fn upsert_by_id<T: Identified + Clone>(items: &[T], updated: T) -> Vec<T> {
    if items.iter().any(|item| item.id() == updated.id()) {
        patch_by_id(items, updated)
    } else {
        let mut next = items.to_vec();
        next.push(updated);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, status: JobStatus) -> JobPosting {
        JobPosting {
            id,
            title: format!("Job {id}"),
            company: "Acme".into(),
            description: "desc".into(),
            application_link: "https://example.com".into(),
            salary: None,
            status,
        }
    }

    #[test]
    fn patch_replaces_only_the_matching_item() {
        let jobs = vec![job(1, JobStatus::New), job(2, JobStatus::New)];
        let patched = patch_by_id(&jobs, job(1, JobStatus::Saved));

        assert_eq!(patched.len(), jobs.len());
        assert_eq!(patched[0].status, JobStatus::Saved);
        assert_eq!(patched[1], jobs[1]);
    }

    #[test]
    fn patch_with_unknown_id_changes_nothing() {
        let jobs = vec![job(1, JobStatus::New)];
        let patched = patch_by_id(&jobs, job(9, JobStatus::Hidden));
        assert_eq!(patched, jobs);
    }

    #[test]
    fn remove_drops_the_matching_item() {
        let keywords = vec![
            Keyword { id: 1, term: "rust".into() },
            Keyword { id: 2, term: "backend".into() },
        ];
        let next = remove_by_id(&keywords, 1);
        assert_eq!(next, vec![Keyword { id: 2, term: "backend".into() }]);
        assert_eq!(remove_by_id(&keywords, 9), keywords);
    }

    #[test]
    fn upsert_appends_new_ids_and_patches_known_ones() {
        let jobs = vec![job(1, JobStatus::New)];

        let appended = upsert_by_id(&jobs, job(2, JobStatus::New));
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[1].id, 2);

        let patched = upsert_by_id(&jobs, job(1, JobStatus::Applied));
        assert_eq!(patched.len(), 1);
        assert_eq!(patched[0].status, JobStatus::Applied);
    }

    #[test]
    fn successive_merges_compose_over_one_list() {
        // The handler shape: read the current list, build the next one,
        // then store it back.
        let mut jobs = vec![job(1, JobStatus::New), job(2, JobStatus::New)];

        let next = patch_by_id(jobs.as_slice(), job(1, JobStatus::Saved));
        jobs = next;
        let next = upsert_by_id(jobs.as_slice(), job(3, JobStatus::New));
        jobs = next;
        let next = remove_by_id(jobs.as_slice(), 2);
        jobs = next;

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].status, JobStatus::Saved);
        assert_eq!(jobs[1].id, 3);
    }

    #[test]
    fn job_status_uses_lowercase_wire_labels() {
        let parsed: JobPosting = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Job 1",
                "company": "Company A",
                "description": "Desc 1",
                "application_link": "link1",
                "status": "new"
            }"#,
        )
        .expect("job posting decodes");

        assert_eq!(parsed.status, JobStatus::New);
        assert_eq!(parsed.salary, None);
        assert_eq!(
            serde_json::to_value(JobStatus::Saved).expect("serializes"),
            serde_json::json!("saved")
        );
    }

    #[test]
    fn application_status_round_trips_its_label() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::from_label(&status.to_string()), Some(status));
        }
        assert_eq!(ApplicationStatus::from_label("Ghosted"), None);
        assert_eq!(
            serde_json::to_value(ApplicationStatus::Interviewing).expect("serializes"),
            serde_json::json!("Interviewing")
        );
    }

    #[test]
    fn draft_mirrors_the_edited_application() {
        let app = Application {
            id: 7,
            job_title: "Engineer".into(),
            company: "Acme".into(),
            application_date: "2024-03-01".into(),
            status: ApplicationStatus::Interviewing,
            job_board: "HN".into(),
            url: "https://example.com/7".into(),
            notes: "follow up".into(),
            keywords: "rust".into(),
        };

        let draft = ApplicationDraft::from_existing(Some(&app));
        assert_eq!(draft.job_title, app.job_title);
        assert_eq!(draft.status, ApplicationStatus::Interviewing);

        let blank = ApplicationDraft::from_existing(None);
        assert_eq!(blank, ApplicationDraft::default());
        assert_eq!(blank.status, ApplicationStatus::Applied);
    }
}
