use crate::{AppError, AppResult};
use common::{Project, ProjectId, ProjectInput};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory project list shared by every request. Newest projects come first.
#[derive(Clone, Debug, Default)]
pub struct ProjectStore {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl ProjectStore {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(RwLock::new(projects)),
        }
    }

    /// Loads a JSON array of projects.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let projects: Vec<Project> = serde_json::from_str(&raw)?;
        debug!(
            "Loaded {} projects from {}",
            projects.len(),
            path.as_ref().display()
        );
        Ok(Self::with_projects(projects))
    }

    pub async fn list(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    /// Creates a project when `id` is `None`, otherwise replaces the stored one in place.
    pub async fn save(&self, id: Option<ProjectId>, input: ProjectInput) -> AppResult<Project> {
        let mut projects = self.projects.write().await;
        match id {
            None => {
                let project = Project::from_input(Uuid::new_v4().to_string(), input);
                debug!("Project created: {}", project.id);
                projects.insert(0, project.clone());
                Ok(project)
            }
            Some(id) => {
                let slot = projects
                    .iter_mut()
                    .find(|project| project.id == id)
                    .ok_or(AppError::ProjectNotFound)?;
                *slot = Project::from_input(id, input);
                debug!("Project updated: {}", slot.id);
                Ok(slot.clone())
            }
        }
    }

    pub async fn delete(&self, id: &ProjectId) -> AppResult<()> {
        let mut projects = self.projects.write().await;
        let position = projects
            .iter()
            .position(|project| &project.id == id)
            .ok_or(AppError::ProjectNotFound)?;
        projects.remove(position);
        debug!("Project deleted: {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn input(title: &str) -> ProjectInput {
        ProjectInput {
            title: title.to_string(),
            description: "A project".to_string(),
            tech_stack: vec!["Rust".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_inserts_newest_first() {
        let store = ProjectStore::default();
        let first = store.save(None, input("first")).await.unwrap();
        let second = store.save(None, input("second")).await.unwrap();
        assert_ne!(first.id, second.id);

        let titles: Vec<_> = store.list().await.into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_edit_replaces_in_place() {
        let store = ProjectStore::default();
        let a = store.save(None, input("a")).await.unwrap();
        store.save(None, input("b")).await.unwrap();

        let edited = store.save(Some(a.id.clone()), input("a2")).await.unwrap();
        assert_eq!(edited.id, a.id);

        let titles: Vec<_> = store.list().await.into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["b", "a2"]);
    }

    #[tokio::test]
    async fn test_edit_unknown_id_is_not_found() {
        let store = ProjectStore::default();
        let result = store.save(Some("missing".to_string()), input("x")).await;
        assert!(matches!(result, Err(AppError::ProjectNotFound)));
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let store = ProjectStore::default();
        let a = store.save(None, input("a")).await.unwrap();
        let b = store.save(None, input("b")).await.unwrap();

        store.delete(&a.id).await.unwrap();
        let remaining = store.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);

        assert!(matches!(
            store.delete(&a.id).await,
            Err(AppError::ProjectNotFound)
        ));
    }

    #[tokio::test]
    async fn test_seed_file_loads_projects_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"1","title":"One","description":"d","tech_stack":["Rust","Leptos"]}},
                {{"id":"2","title":"Two","description":"d","tech_stack":[],"live_link":"https://two.dev"}}]"#
        )
        .unwrap();

        let store = ProjectStore::from_seed_file(file.path()).await.unwrap();
        let projects = store.list().await;
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].tech_stack, vec!["Rust", "Leptos"]);
        assert_eq!(projects[1].live_link.as_deref(), Some("https://two.dev"));
    }

    #[tokio::test]
    async fn test_bad_seed_file_is_a_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            ProjectStore::from_seed_file(file.path()).await,
            Err(AppError::Json(_))
        ));
    }
}
