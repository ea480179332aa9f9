//! Pages
//!
//! One component per route.

mod dashboard;
mod notes;
mod analytics;
mod settings;

pub use dashboard::DashboardPage;
pub use notes::NotesPage;
pub use analytics::AnalyticsPage;
pub use settings::SettingsPage;
