//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod settings;
pub mod xero_callback;

pub use dashboard::Dashboard;
pub use settings::Settings;
pub use xero_callback::XeroCallback;
