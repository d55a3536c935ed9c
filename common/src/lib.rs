pub mod dashboard;
pub mod project;
pub mod user;

pub use project::{Project, ProjectInput};
pub use user::User;

pub type ProjectId = String;

pub const HOME_ROUTE: &str = "/";
pub const AUTH_ROUTE: &str = "/auth";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
