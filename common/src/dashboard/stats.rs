use crate::Project;
use std::collections::HashSet;

/// Figures shown in the three summary cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub technologies_used: usize,
    pub published: usize,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let total_projects = projects.len();
        Self {
            total_projects,
            technologies_used: distinct_technologies(projects),
            // every listed project counts as published
            published: total_projects,
        }
    }
}

/// Number of distinct tech stack labels across all projects.
pub fn distinct_technologies(projects: &[Project]) -> usize {
    projects
        .iter()
        .flat_map(|project| project.tech_stack.iter().map(String::as_str))
        .collect::<HashSet<_>>()
        .len()
}
