use crate::app::components::project_upload_form::ProjectUploadForm;
use crate::app::pages::{GlobalState, GlobalStateStoreFields};
use crate::app::providers::{use_projects, AuthContext, RouterNavigate};
use common::dashboard::actions::{guard_dashboard, logout, shows_dashboard};
use common::dashboard::ProjectEditor;
use header::DashboardHeader;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::reactive::spawn_local;
use leptos_router::hooks::use_navigate;
use projects_table::ProjectsTable;
use reactive_stores::Store;
use stat_cards::StatCards;

pub mod header;
pub mod projects_table;
pub mod stat_cards;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let global_state: Store<GlobalState> = expect_context();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let resolved = global_state.user_resolved().get();
        let user = global_state.user().get();
        guard_dashboard(resolved, user.as_ref(), &RouterNavigate(navigate.clone()));
    });

    view! {
        <Show when=move || shows_dashboard(global_state.user().read().as_ref())>
            <DashboardContent />
        </Show>
    }
}

/// Header, stat cards, table and modal of a signed in user. The project list is only
/// fetched once this renders.
#[component]
fn DashboardContent() -> impl IntoView {
    let global_state: Store<GlobalState> = expect_context();
    let auth: AuthContext = expect_context();
    let projects = use_projects();
    let editor = RwSignal::new(ProjectEditor::default());
    let navigate = use_navigate();

    let email = Signal::derive(move || {
        global_state
            .user()
            .read()
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    });
    let on_add = Callback::new(move |_: ()| editor.update(|e| e.open_create()));
    let on_close = Callback::new(move |_: ()| editor.update(|e| e.close()));
    let on_logout = Callback::new(move |_: ()| {
        let navigator = RouterNavigate(navigate.clone());
        spawn_local(async move {
            if let Err(e) = logout(&auth, &navigator).await {
                error!("Sign out failed: {e}");
            }
        });
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 animate-fadeInUp">
            <DashboardHeader email on_add on_logout />

            <div class="container mx-auto px-6 py-8">
                <StatCards projects />
                <ProjectsTable projects editor on_add />
            </div>

            <Show when=move || editor.read().is_open()>
                <div class="animate-fadeInUp">
                    {move || {
                        let state = editor.get();
                        view! {
                            <ProjectUploadForm
                                on_close
                                project=state.project().cloned()
                                is_editing=state.is_editing()
                            />
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
