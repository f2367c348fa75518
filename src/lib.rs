pub mod api;
pub mod app;
pub mod components;
pub mod models;
pub mod pages;
pub mod session;
pub mod storage;

pub use app::App;
pub use app::Route;
