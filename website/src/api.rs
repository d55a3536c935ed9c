use crate::AppResult;
use common::{Project, ProjectId};
use leptos::server;

#[cfg(feature = "ssr")]
use crate::security::ssr::auth;

#[server]
pub async fn list_projects() -> AppResult<Vec<Project>> {
    auth()?;
    let store = crate::ssr::store()?;
    Ok(store.list().await)
}

#[server]
pub async fn delete_project(id: ProjectId) -> AppResult<()> {
    let user = auth()?;
    let store = crate::ssr::store()?;
    store.delete(&id).await?;
    tracing::info!("{} deleted project {id}", user.email);
    Ok(())
}

/// Creates the project when `id` is empty, otherwise updates it.
#[server]
pub async fn save_project(
    id: String,
    title: String,
    description: String,
    tech_stack: String,
    image_url: String,
    live_link: String,
) -> AppResult<Project> {
    use common::ProjectInput;
    use validator::Validate;

    let user = auth()?;
    let store = crate::ssr::store()?;
    let input = ProjectInput::from_form(&title, &description, &tech_stack, &image_url, &live_link);
    ssr::ProjectForm::from(&input).validate()?;

    let id = (!id.trim().is_empty()).then(|| id.trim().to_string());
    let project = store.save(id, input).await?;
    tracing::info!("{} saved project {}", user.email, project.id);
    Ok(project)
}

#[cfg(feature = "ssr")]
pub mod ssr {
    use common::ProjectInput;
    use validator::Validate;

    #[derive(Debug, Clone, Validate)]
    pub struct ProjectForm {
        #[validate(length(min = 1, max = 100, message = "Title must be 1 to 100 characters"))]
        pub title: String,
        #[validate(length(min = 1, max = 2000, message = "Description must be 1 to 2000 characters"))]
        pub description: String,
        #[validate(length(max = 20, message = "At most 20 technologies"))]
        pub tech_stack: Vec<String>,
        #[validate(url(message = "Image URL is not a valid URL"))]
        pub image_url: Option<String>,
        #[validate(url(message = "Live link is not a valid URL"))]
        pub live_link: Option<String>,
    }

    impl From<&ProjectInput> for ProjectForm {
        fn from(input: &ProjectInput) -> Self {
            Self {
                title: input.title.clone(),
                description: input.description.clone(),
                tech_stack: input.tech_stack.clone(),
                image_url: input.image_url.clone(),
                live_link: input.live_link.clone(),
            }
        }
    }

}
