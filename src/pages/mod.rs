pub mod applications;
pub mod dashboard;
pub mod keywords;
pub mod login;
pub mod register;

pub use applications::Applications;
pub use dashboard::Dashboard;
pub use keywords::Keywords;
pub use login::Login;
pub use register::Register;
