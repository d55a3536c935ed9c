use crate::app::providers::ProjectsContext;
use common::dashboard::DashboardStats;
use leptos::prelude::*;

#[component]
pub fn StatCards(projects: ProjectsContext) -> impl IntoView {
    let stats = Memo::new(move |_| {
        projects
            .list
            .with(|list| list.as_deref().map(DashboardStats::from_projects))
            .unwrap_or_default()
    });

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
            <StatCard
                label="Total Projects"
                value=Signal::derive(move || stats.get().total_projects)
                accent="text-blue-400"
                delay="0.1s"
            />
            <StatCard
                label="Technologies Used"
                value=Signal::derive(move || stats.get().technologies_used)
                accent="text-purple-400"
                delay="0.2s"
            />
            <StatCard
                label="Published"
                value=Signal::derive(move || stats.get().published)
                accent="text-green-400"
                delay="0.3s"
            />
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: Signal<usize>,
    accent: &'static str,
    delay: &'static str,
) -> impl IntoView {
    view! {
        <div
            class="bg-white/10 backdrop-blur-md border border-white/20 rounded-2xl p-6 hover:bg-white/15 transition-all duration-300 transform hover:scale-105 animate-fadeInUp"
            style=format!("animation-delay: {delay}")
        >
            <h3 class="text-lg font-semibold text-white mb-2">{label}</h3>
            <p class=format!("text-3xl font-bold {accent} animate-pulse")>{value}</p>
        </div>
    }
}
