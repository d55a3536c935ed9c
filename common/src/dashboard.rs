//! View-independent behavior of the project dashboard page.

pub mod actions;
pub mod editor;
pub mod listing;
pub mod row;
pub mod stats;

pub use editor::ProjectEditor;
pub use listing::ProjectList;
pub use stats::DashboardStats;
