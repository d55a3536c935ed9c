use common::User;
use reactive_stores::Store;

pub mod auth;
pub mod dashboard;
pub mod home;

#[derive(Default, Clone, Debug, Store)]
pub struct GlobalState {
    pub user: Option<User>,
    /// Set once the first identity lookup has answered.
    pub user_resolved: bool,
}
