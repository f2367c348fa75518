pub mod application_form;
pub mod job_card;
pub mod nav_bar;

pub use application_form::ApplicationForm;
pub use job_card::JobCard;
pub use nav_bar::NavBar;
