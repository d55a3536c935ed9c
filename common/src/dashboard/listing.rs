use crate::Project;

/// What the projects table shows for the current list snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectList<'a> {
    /// No snapshot has arrived yet.
    Loading,
    /// The list loaded but holds nothing; the table offers "Add Your First Project".
    Empty,
    Rows(&'a [Project]),
}

impl<'a> ProjectList<'a> {
    pub fn from_snapshot(snapshot: Option<&'a [Project]>) -> Self {
        match snapshot {
            None => Self::Loading,
            Some([]) => Self::Empty,
            Some(rows) => Self::Rows(rows),
        }
    }

    pub fn offers_first_project(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_snapshot_is_loading() {
        let list = ProjectList::from_snapshot(None);
        assert_eq!(list, ProjectList::Loading);
        assert!(!list.offers_first_project());
    }

    #[test]
    fn test_empty_snapshot_offers_first_project() {
        let list = ProjectList::from_snapshot(Some(&[]));
        assert_eq!(list, ProjectList::Empty);
        assert!(list.offers_first_project());
    }

    #[test]
    fn test_loaded_snapshot_keeps_server_order() {
        let projects = vec![
            Project {
                id: "b".to_string(),
                ..Default::default()
            },
            Project {
                id: "a".to_string(),
                ..Default::default()
            },
        ];
        let list = ProjectList::from_snapshot(Some(projects.as_slice()));
        assert!(!list.offers_first_project());
        match list {
            ProjectList::Rows(rows) => {
                let ids: Vec<_> = rows.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids, ["b", "a"]);
            }
            other => panic!("expected rows, got {other:?}"),
        }
    }
}
