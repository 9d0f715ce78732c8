//! Modal dialogs and the form values they hold.

use crate::model::id::{LinkId, ProjectId};
use crate::model::link::Link;
use crate::ui::event::InputField;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    /// Manual link entry for the selected project.
    AddLink,
    /// Editing one existing link.
    EditLink {
        project_id: ProjectId,
        link_id: LinkId,
    },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Current text of every tracked input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub project_name: String,
    pub link_url: String,
    pub link_title: String,
    pub edit_url: String,
    pub edit_title: String,
}

impl FormState {
    pub fn set(&mut self, field: InputField, value: String) {
        *self.field_mut(field) = value;
    }

    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::ProjectName => &self.project_name,
            InputField::LinkUrl => &self.link_url,
            InputField::LinkTitle => &self.link_title,
            InputField::EditUrl => &self.edit_url,
            InputField::EditTitle => &self.edit_title,
        }
    }

    pub fn clear_add_link(&mut self) {
        self.link_url.clear();
        self.link_title.clear();
    }

    pub fn load_edit_link(&mut self, link: &Link) {
        self.edit_url = link.url.clone();
        self.edit_title = link.title.clone();
    }

    pub fn clear_edit_link(&mut self) {
        self.edit_url.clear();
        self.edit_title.clear();
    }

    fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::ProjectName => &mut self.project_name,
            InputField::LinkUrl => &mut self.link_url,
            InputField::LinkTitle => &mut self.link_title,
            InputField::EditUrl => &mut self.edit_url,
            InputField::EditTitle => &mut self.edit_title,
        }
    }
}
