use crate::app::components::icons::CloseIcon;
use crate::app::providers::use_projects;
use common::Project;
use leptos::form::ActionForm;
use leptos::logging::log;
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full rounded-lg bg-white/10 border border-white/20 px-4 py-2 text-white placeholder:text-slate-400 focus:outline-none focus:ring-2 focus:ring-blue-500";
const LABEL_CLASS: &str = "block text-sm font-medium text-slate-300 mb-2";

/// Modal used both to add a project and to edit `project`.
#[component]
pub fn ProjectUploadForm(
    on_close: Callback<()>,
    project: Option<Project>,
    is_editing: bool,
) -> impl IntoView {
    let save = use_projects().save;
    let opened_at = save.version().get_untracked();
    let (form_error, set_form_error) = signal(None::<String>);

    Effect::new(move |_| {
        // ignore results of submissions made before this modal opened
        if save.version().get() == opened_at {
            return;
        }
        match save.value().get() {
            Some(Ok(saved)) => {
                log!("Project saved: {}", saved.id);
                on_close.run(());
            }
            Some(Err(e)) => set_form_error.set(Some(e.to_string())),
            None => {}
        }
    });

    let project = project.unwrap_or_default();
    let (heading, submit_label) = if is_editing {
        ("Edit Project", "Update Project")
    } else {
        ("Add New Project", "Create Project")
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div
                class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>
            <div class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto bg-slate-800 border border-white/20 rounded-2xl p-6 animate-scale-in">
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-bold text-white">{heading}</h2>
                    <button
                        type="button"
                        class="p-2 text-slate-400 hover:text-white transition-colors"
                        on:click=move |_| on_close.run(())
                    >
                        <CloseIcon />
                    </button>
                </div>

                <ActionForm action=save>
                    <input type="hidden" name="id" value=project.id.clone() />
                    <div class="space-y-4">
                        <div>
                            <label class=LABEL_CLASS>"Project Title"</label>
                            <input
                                type="text"
                                name="title"
                                required
                                maxlength="100"
                                value=project.title.clone()
                                class=INPUT_CLASS
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"Description"</label>
                            <textarea name="description" required rows="4" class=INPUT_CLASS>
                                {project.description.clone()}
                            </textarea>
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"Tech Stack"</label>
                            <input
                                type="text"
                                name="tech_stack"
                                placeholder="Rust, Leptos, Tailwind CSS"
                                value=project.tech_stack_str()
                                class=INPUT_CLASS
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"Image URL"</label>
                            <input
                                type="url"
                                name="image_url"
                                placeholder="https://"
                                value=project.image_url.clone().unwrap_or_default()
                                class=INPUT_CLASS
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"Live Link"</label>
                            <input
                                type="url"
                                name="live_link"
                                placeholder="https://"
                                value=project.live_link.clone().unwrap_or_default()
                                class=INPUT_CLASS
                            />
                        </div>
                        {move || {
                            form_error
                                .get()
                                .map(|e| view! { <p class="text-red-400 text-sm">{e}</p> })
                        }}
                    </div>
                    <div class="mt-6 flex items-center justify-end gap-x-4">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-lg text-slate-300 hover:text-white transition-colors"
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg transition-all duration-300 hover:scale-105 transform"
                        >
                            {submit_label}
                        </button>
                    </div>
                </ActionForm>
            </div>
        </div>
    }
}
