use crate::app::components::icons::{EditIcon, EyeIcon, TrashIcon};
use crate::app::providers::{ProjectsContext, WindowConfirm};
use common::dashboard::actions::confirm_and_delete;
use common::dashboard::row::{description_preview, TechBadges};
use common::dashboard::{ProjectEditor, ProjectList};
use common::Project;
use leptos::either::EitherOf3;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::reactive::spawn_local;

const HEADER_CELL: &str = "text-left p-4 text-slate-300 font-medium";
const ACTION_BUTTON: &str = "p-2 text-slate-400 transition-all duration-300 hover:scale-125 transform";

#[component]
pub fn ProjectsTable(
    projects: ProjectsContext,
    editor: RwSignal<ProjectEditor>,
    on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="bg-white/10 backdrop-blur-md border border-white/20 rounded-2xl overflow-hidden animate-fadeInUp"
            style="animation-delay: 0.4s"
        >
            <div class="p-6 border-b border-white/20">
                <h2 class="text-xl font-bold text-white">"Manage Projects"</h2>
            </div>

            {move || {
                projects
                    .list
                    .with(|list| match ProjectList::from_snapshot(list.as_deref()) {
                        ProjectList::Loading => EitherOf3::A(view! { <LoadingProjects /> }),
                        ProjectList::Empty => {
                            EitherOf3::B(
                                view! {
                                    <div class="p-8 text-center animate-fadeInUp">
                                        <p class="text-slate-400 mb-4">"No projects found"</p>
                                        <button
                                            class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg transition-all duration-300 hover:scale-105 transform"
                                            on:click=move |_| on_add.run(())
                                        >
                                            "Add Your First Project"
                                        </button>
                                    </div>
                                },
                            )
                        }
                        ProjectList::Rows(rows) => {
                            let rows = rows
                                .iter()
                                .cloned()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! { <ProjectRow project index editor projects /> }
                                })
                                .collect_view();
                            EitherOf3::C(
                                view! {
                                    <div class="overflow-x-auto">
                                        <table class="w-full">
                                            <thead>
                                                <tr class="border-b border-white/20">
                                                    <th class=HEADER_CELL>"Project"</th>
                                                    <th class=HEADER_CELL>"Tech Stack"</th>
                                                    <th class=HEADER_CELL>"Status"</th>
                                                    <th class=HEADER_CELL>"Actions"</th>
                                                </tr>
                                            </thead>
                                            <tbody>{rows}</tbody>
                                        </table>
                                    </div>
                                },
                            )
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn LoadingProjects() -> impl IntoView {
    view! {
        <div class="p-8 text-center">
            <div class="w-8 h-8 border-2 border-blue-400 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
            <p class="text-slate-400 animate-pulse">"Loading projects..."</p>
        </div>
    }
}

#[component]
fn ProjectRow(
    project: Project,
    index: usize,
    editor: RwSignal<ProjectEditor>,
    projects: ProjectsContext,
) -> impl IntoView {
    let badges = TechBadges::new(&project.tech_stack);
    let shown = badges.shown.to_vec();
    let overflow = badges.overflow_label();
    let preview = description_preview(&project.description);
    let delay = format!("animation-delay: {:.1}s", 0.1 * (index + 1) as f64);

    let id = project.id.clone();
    let on_delete = move |_| {
        let id = id.clone();
        spawn_local(async move {
            if let Err(e) = confirm_and_delete(&WindowConfirm, &projects, &id).await {
                error!("Could not delete project {id}: {e}");
            }
        });
    };
    let edit_target = project.clone();
    let on_edit = move |_| {
        let target = edit_target.clone();
        editor.update(|e| e.open_edit(target));
    };

    view! {
        <tr
            class="border-b border-white/10 hover:bg-white/5 transition-all duration-300 animate-fadeInUp"
            style=delay
        >
            <td class="p-4">
                <div class="flex items-center space-x-3">
                    {project
                        .image_url
                        .clone()
                        .map(|src| {
                            view! {
                                <img
                                    src=src
                                    alt=project.title.clone()
                                    class="w-12 h-12 rounded-lg object-cover transition-transform duration-300 hover:scale-110"
                                />
                            }
                        })}
                    <div>
                        <h3 class="text-white font-medium">{project.title.clone()}</h3>
                        <p class="text-slate-400 text-sm">{preview}</p>
                    </div>
                </div>
            </td>
            <td class="p-4">
                <div class="flex flex-wrap gap-1">
                    {shown
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-blue-600/30 text-blue-300 text-xs rounded-full transition-all duration-300 hover:bg-blue-600/50 hover:scale-105">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                    {overflow
                        .map(|label| {
                            view! {
                                <span class="px-2 py-1 bg-slate-600/30 text-slate-300 text-xs rounded-full transition-all duration-300 hover:bg-slate-600/50 hover:scale-105">
                                    {label}
                                </span>
                            }
                        })}
                </div>
            </td>
            <td class="p-4">
                <span class="px-3 py-1 bg-green-600/30 text-green-300 text-sm rounded-full animate-pulse">
                    "Published"
                </span>
            </td>
            <td class="p-4">
                <div class="flex items-center space-x-2">
                    {project
                        .live_link
                        .clone()
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=format!("{ACTION_BUTTON} hover:text-blue-400")
                                >
                                    <EyeIcon />
                                </a>
                            }
                        })}
                    <button class=format!("{ACTION_BUTTON} hover:text-green-400") on:click=on_edit>
                        <EditIcon />
                    </button>
                    <button class=format!("{ACTION_BUTTON} hover:text-red-400") on:click=on_delete>
                        <TrashIcon />
                    </button>
                </div>
            </td>
        </tr>
    }
}
