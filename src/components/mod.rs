//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod alert;
pub mod loading;
pub mod nav;
pub mod stat_card;

pub use alert::{Alert, AlertVariant};
pub use loading::Loading;
pub use nav::Nav;
pub use stat_card::StatCard;
