//! Dashboard controller, load cycles and the typed view

pub mod controller;
pub mod loader;
pub mod view;

pub use controller::DashboardController;
pub use loader::LoadOutcome;
pub use view::{DashboardView, Panel};
