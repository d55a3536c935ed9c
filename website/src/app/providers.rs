//! Client side collaborators of the dashboard: the signed in user, the project list and the
//! browser/router hooks the dashboard flows are written against.

use crate::api::{self, SaveProject};
use crate::app::pages::{GlobalState, GlobalStateStoreFields};
use crate::security;
use crate::{AppError, AppResult};
use async_trait::async_trait;
use common::dashboard::actions::{Confirm, Navigate, ProjectActions, SessionActions};
use common::{Project, ProjectId};
use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use reactive_stores::Store;

#[derive(Clone, Copy)]
pub struct AuthContext {
    version: RwSignal<usize>,
}

/// Loads the current user into the global store and re-checks it after every sign out.
pub fn provide_auth() {
    let global_state = expect_context::<Store<GlobalState>>();
    let version = RwSignal::new(0usize);
    let user = Resource::new(move || version.get(), |_| security::get_user());

    Effect::new(move |_| {
        if let Some(result) = user.get() {
            let current = result.unwrap_or_else(|e| {
                error!("Could not load user: {e}");
                None
            });
            global_state.user().set(current);
            global_state.user_resolved().set(true);
        }
    });
    provide_context(AuthContext { version });
}

#[async_trait(?Send)]
impl SessionActions for AuthContext {
    type Error = AppError;

    async fn sign_out(&self) -> AppResult<()> {
        security::sign_out().await?;
        self.version.update(|v| *v += 1);
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct ProjectsContext {
    /// Latest project list, `None` until the first fetch answers. Fetch errors show as empty.
    pub list: Memo<Option<Vec<Project>>>,
    pub save: ServerAction<SaveProject>,
    version: RwSignal<usize>,
}

/// Project list of the signed in user, refetched after every save or delete.
pub fn use_projects() -> ProjectsContext {
    if let Some(projects) = use_context::<ProjectsContext>() {
        return projects;
    }
    let version = RwSignal::new(0usize);
    let save = ServerAction::<SaveProject>::new();
    let projects = Resource::new(
        move || (version.get(), save.version().get()),
        |_| api::list_projects(),
    );
    let list = Memo::new(move |_| projects.get().map(projects_or_empty));
    let context = ProjectsContext {
        list,
        save,
        version,
    };
    provide_context(context);
    context
}

impl ProjectsContext {
    pub fn refresh(&self) {
        self.version.update(|v| *v += 1);
    }
}

fn projects_or_empty(result: AppResult<Vec<Project>>) -> Vec<Project> {
    result.unwrap_or_else(|e| {
        error!("Could not load projects: {e}");
        Vec::new()
    })
}

#[async_trait(?Send)]
impl ProjectActions for ProjectsContext {
    type Error = AppError;

    async fn delete_project(&self, id: &ProjectId) -> AppResult<()> {
        api::delete_project(id.clone()).await?;
        self.refresh();
        Ok(())
    }
}

pub struct WindowConfirm;

impl Confirm for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .map(|window| window.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
}

pub struct RouterNavigate<F>(pub F);

impl<F> Navigate for RouterNavigate<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
