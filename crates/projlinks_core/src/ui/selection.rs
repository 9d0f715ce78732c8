//! Project selection state machine.
//!
//! `NoSelection --select(known id)--> Selected(id)`
//! `Selected(id) --delete(id)--> NoSelection`
//! `* --select(unknown id)--> NoSelection`

use crate::model::id::ProjectId;
use crate::model::project::Project;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(ProjectId),
}

impl Selection {
    /// Selects `id` if it names a project in `projects`, otherwise clears.
    pub fn select(&mut self, id: &ProjectId, projects: &[Project]) {
        *self = if projects.iter().any(|project| project.id() == id) {
            Self::Selected(id.clone())
        } else {
            Self::NoSelection
        };
    }

    pub fn clear(&mut self) {
        *self = Self::NoSelection;
    }

    /// Clears the selection when it points at `id`.
    pub fn clear_if(&mut self, id: &ProjectId) {
        if self.selected_id() == Some(id) {
            self.clear();
        }
    }

    pub fn selected_id(&self) -> Option<&ProjectId> {
        match self {
            Self::NoSelection => None,
            Self::Selected(id) => Some(id),
        }
    }

    /// Resolves the selection against the current list.
    ///
    /// A selected id that no longer exists behaves as no selection.
    pub fn resolve<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected_id()?;
        projects.iter().find(|project| project.id() == id)
    }
}
