use crate::ProjectId;
use serde::{Deserialize, Serialize};

/// A portfolio entry as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
}

impl Project {
    pub fn from_input(id: ProjectId, input: ProjectInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            tech_stack: input.tech_stack,
            image_url: input.image_url,
            live_link: input.live_link,
        }
    }

    /// Tech stack joined back into the form's comma separated notation.
    pub fn tech_stack_str(&self) -> String {
        self.tech_stack.join(", ")
    }
}

/// Editable fields of a project, as submitted by the upload form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub live_link: Option<String>,
}

impl ProjectInput {
    /// Builds an input from raw form values. Text is trimmed and blank optional fields are dropped.
    pub fn from_form(
        title: &str,
        description: &str,
        tech_stack: &str,
        image_url: &str,
        live_link: &str,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            tech_stack: parse_tech_stack(tech_stack),
            image_url: non_blank(image_url),
            live_link: non_blank(live_link),
        }
    }
}

/// Splits a comma separated label list, keeping order and dropping empty labels.
pub fn parse_tech_stack(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tech_stack_trims_and_drops_empty_labels() {
        assert_eq!(
            parse_tech_stack(" Rust, Leptos ,, axum,"),
            vec!["Rust", "Leptos", "axum"]
        );
        assert!(parse_tech_stack("  ").is_empty());
    }

    #[test]
    fn test_from_form_drops_blank_links() {
        let input = ProjectInput::from_form(" Folio ", "A site", "Rust", "  ", "https://example.com");
        assert_eq!(input.title, "Folio");
        assert_eq!(input.image_url, None);
        assert_eq!(input.live_link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_project_deserializes_seed_shape() {
        let raw = r#"{"id":"p1","title":"Folio","description":"desc","tech_stack":["Rust"],"image_url":null}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.tech_stack, vec!["Rust"]);
        assert_eq!(project.live_link, None);
    }

    #[test]
    fn test_tech_stack_str_round_trips_through_form_parsing() {
        let project = Project {
            tech_stack: vec!["Rust".into(), "Tailwind CSS".into()],
            ..Default::default()
        };
        assert_eq!(parse_tech_stack(&project.tech_stack_str()), project.tech_stack);
    }
}
