use crate::Project;

/// State of the create/edit modal. Visibility and the edit target live in one value
/// so closing always resets both together.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ProjectEditor {
    #[default]
    Closed,
    Create,
    Edit(Project),
}

impl ProjectEditor {
    pub fn open_create(&mut self) {
        *self = ProjectEditor::Create;
    }

    pub fn open_edit(&mut self, project: Project) {
        *self = ProjectEditor::Edit(project);
    }

    pub fn close(&mut self) {
        *self = ProjectEditor::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ProjectEditor::Closed)
    }

    /// Project under edit, `None` in create mode.
    pub fn project(&self) -> Option<&Project> {
        match self {
            ProjectEditor::Edit(project) => Some(project),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.project().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "p1".to_string(),
            title: "Folio".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_closed() {
        let editor = ProjectEditor::default();
        assert!(!editor.is_open());
        assert!(editor.project().is_none());
    }

    #[test]
    fn test_open_edit_selects_project() {
        let mut editor = ProjectEditor::default();
        editor.open_edit(project());
        assert!(editor.is_open());
        assert!(editor.is_editing());
        assert_eq!(editor.project().map(|p| p.id.as_str()), Some("p1"));
    }

    #[test]
    fn test_close_after_edit_then_add_opens_create_mode() {
        let mut editor = ProjectEditor::default();
        editor.open_edit(project());
        editor.close();
        assert_eq!(editor, ProjectEditor::Closed);

        editor.open_create();
        assert!(editor.is_open());
        assert!(!editor.is_editing());
        assert!(editor.project().is_none());
    }
}
