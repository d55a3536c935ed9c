//! Redirect, logout and delete flows of the dashboard, written against small collaborator
//! traits so the browser, router and server functions can be swapped out in tests.

use crate::{ProjectId, User, AUTH_ROUTE, HOME_ROUTE};
use async_trait::async_trait;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this project?";

pub trait Navigate {
    fn navigate(&self, path: &str);
}

pub trait Confirm {
    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
}

#[async_trait(?Send)]
pub trait SessionActions {
    type Error;

    async fn sign_out(&self) -> Result<(), Self::Error>;
}

#[async_trait(?Send)]
pub trait ProjectActions {
    type Error;

    async fn delete_project(&self, id: &ProjectId) -> Result<(), Self::Error>;
}

/// Sends signed out visitors to the auth route. Returns true when a redirect was issued.
pub fn redirect_if_signed_out<N>(user: Option<&User>, navigator: &N) -> bool
where
    N: Navigate + ?Sized,
{
    if user.is_some() {
        return false;
    }
    navigator.navigate(AUTH_ROUTE);
    true
}

/// Outcome of checking a dashboard visit against the user lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardAccess {
    /// The lookup has not answered yet; nothing happens.
    Pending,
    Redirected,
    Granted,
}

/// Only the signed in user gets the dashboard content; everyone else renders nothing.
pub fn shows_dashboard(user: Option<&User>) -> bool {
    user.is_some()
}

/// Waits for the user lookup to settle, then redirects signed out visitors.
pub fn guard_dashboard<N>(resolved: bool, user: Option<&User>, navigator: &N) -> DashboardAccess
where
    N: Navigate + ?Sized,
{
    if !resolved {
        return DashboardAccess::Pending;
    }
    if redirect_if_signed_out(user, navigator) {
        DashboardAccess::Redirected
    } else {
        DashboardAccess::Granted
    }
}

/// Signs out, then goes home. A failed sign-out leaves the current page in place.
pub async fn logout<S, N>(session: &S, navigator: &N) -> Result<(), S::Error>
where
    S: SessionActions + ?Sized,
    N: Navigate + ?Sized,
{
    session.sign_out().await?;
    navigator.navigate(HOME_ROUTE);
    Ok(())
}

/// Deletes the project only after the user confirms. Returns whether the delete was issued.
pub async fn confirm_and_delete<C, P>(
    confirm: &C,
    projects: &P,
    id: &ProjectId,
) -> Result<bool, P::Error>
where
    C: Confirm + ?Sized,
    P: ProjectActions + ?Sized,
{
    if !confirm.confirm(DELETE_CONFIRMATION) {
        return Ok(false);
    }
    projects.delete_project(id).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingNavigator(RefCell<Vec<String>>);

    impl Navigate for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    struct Answer {
        accept: bool,
        asked: RefCell<Vec<String>>,
    }

    impl Answer {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                asked: RefCell::default(),
            }
        }
    }

    impl Confirm for Answer {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.accept
        }
    }

    #[derive(Default)]
    struct FakeSession {
        fail: bool,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl SessionActions for FakeSession {
        type Error = String;

        async fn sign_out(&self) -> Result<(), String> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err("session expired".to_string())
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct FakeProjects {
        deleted: RefCell<Vec<ProjectId>>,
    }

    #[async_trait(?Send)]
    impl ProjectActions for FakeProjects {
        type Error = String;

        async fn delete_project(&self, id: &ProjectId) -> Result<(), String> {
            self.deleted.borrow_mut().push(id.clone());
            Ok(())
        }
    }

    #[test]
    fn test_signed_out_redirects_once_to_auth() {
        let navigator = RecordingNavigator::default();
        assert!(redirect_if_signed_out(None, &navigator));
        assert_eq!(*navigator.0.borrow(), vec![AUTH_ROUTE.to_string()]);
    }

    #[test]
    fn test_signed_in_does_not_redirect() {
        let navigator = RecordingNavigator::default();
        let user = User::new("me@example.com");
        assert!(!redirect_if_signed_out(Some(&user), &navigator));
        assert!(navigator.0.borrow().is_empty());
    }

    #[test]
    fn test_unresolved_lookup_waits_without_navigating() {
        let navigator = RecordingNavigator::default();
        assert_eq!(guard_dashboard(false, None, &navigator), DashboardAccess::Pending);
        assert!(navigator.0.borrow().is_empty());
        assert!(!shows_dashboard(None));
    }

    #[test]
    fn test_signed_out_visit_renders_nothing_and_navigates_once() {
        let navigator = RecordingNavigator::default();
        // lookup in flight, then settled with no user
        let pending = guard_dashboard(false, None, &navigator);
        let settled = guard_dashboard(true, None, &navigator);
        assert_eq!(pending, DashboardAccess::Pending);
        assert_eq!(settled, DashboardAccess::Redirected);
        assert_eq!(*navigator.0.borrow(), vec![AUTH_ROUTE.to_string()]);
        assert!(!shows_dashboard(None));
    }

    #[test]
    fn test_signed_in_visit_is_granted() {
        let navigator = RecordingNavigator::default();
        let user = User::new("me@example.com");
        assert_eq!(
            guard_dashboard(true, Some(&user), &navigator),
            DashboardAccess::Granted
        );
        assert!(navigator.0.borrow().is_empty());
        assert!(shows_dashboard(Some(&user)));
    }

    #[tokio::test]
    async fn test_logout_navigates_home_after_sign_out() {
        let session = FakeSession::default();
        let navigator = RecordingNavigator::default();
        logout(&session, &navigator).await.unwrap();
        assert_eq!(session.calls.get(), 1);
        assert_eq!(*navigator.0.borrow(), vec![HOME_ROUTE.to_string()]);
    }

    #[tokio::test]
    async fn test_failed_logout_stays_put() {
        let session = FakeSession {
            fail: true,
            ..Default::default()
        };
        let navigator = RecordingNavigator::default();
        let result = logout(&session, &navigator).await;
        assert_eq!(result, Err("session expired".to_string()));
        assert!(navigator.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_declined_confirmation_skips_delete() {
        let confirm = Answer::new(false);
        let projects = FakeProjects::default();
        let issued = confirm_and_delete(&confirm, &projects, &"p1".to_string())
            .await
            .unwrap();
        assert!(!issued);
        assert!(projects.deleted.borrow().is_empty());
        assert_eq!(*confirm.asked.borrow(), vec![DELETE_CONFIRMATION.to_string()]);
    }

    #[tokio::test]
    async fn test_confirmed_delete_runs_once_with_id() {
        let confirm = Answer::new(true);
        let projects = FakeProjects::default();
        let issued = confirm_and_delete(&confirm, &projects, &"p2".to_string())
            .await
            .unwrap();
        assert!(issued);
        assert_eq!(*projects.deleted.borrow(), vec!["p2".to_string()]);
    }
}
