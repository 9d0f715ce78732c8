//! Host events and delegated `data-action` decoding.
//!
//! Rendered markup tags every interactive element with `data-action` and the
//! ids it acts on. A host installs one delegated listener per event type,
//! finds the closest element carrying `data-action`, and decodes it with
//! [`UiAction::from_attributes`]. Because action buttons sit inside project
//! cards, the closest match for a button click is the button, so card
//! selection never fires for clicks on action buttons.

use crate::model::id::{LinkId, ProjectId};
use crate::ui::drag_drop::{DragPhase, DragTarget};

pub const ACTION_CREATE_PROJECT: &str = "create-project";
pub const ACTION_EXPORT_ALL: &str = "export-all";
pub const ACTION_SELECT_PROJECT: &str = "select-project";
pub const ACTION_EXPORT_PROJECT: &str = "export-project";
pub const ACTION_DELETE_PROJECT: &str = "delete-project";
pub const ACTION_EDIT_LINK: &str = "edit-link";
pub const ACTION_DELETE_LINK: &str = "delete-link";
pub const ACTION_OPEN_ADD_LINK: &str = "open-add-link";
pub const ACTION_SUBMIT_ADD_LINK: &str = "submit-add-link";
pub const ACTION_SUBMIT_EDIT_LINK: &str = "submit-edit-link";
pub const ACTION_CLOSE_MODAL: &str = "close-modal";
pub const ACTION_MODAL_BACKDROP: &str = "modal-backdrop";
/// Marks the dialog body so clicks inside it never reach the backdrop.
pub const ACTION_MODAL_DIALOG: &str = "modal-dialog";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    CreateProject,
    ExportAll,
    SelectProject(ProjectId),
    ExportProject(ProjectId),
    DeleteProject(ProjectId),
    EditLink {
        project_id: ProjectId,
        link_id: LinkId,
    },
    DeleteLink {
        project_id: ProjectId,
        link_id: LinkId,
    },
    /// Click on the drop zone.
    OpenAddLink,
    SubmitAddLink,
    SubmitEditLink,
    CloseModal,
    /// Click on the modal overlay outside the dialog.
    ModalBackdrop,
}

impl UiAction {
    /// Decodes a delegated click from element attributes.
    ///
    /// Returns `None` for unknown actions or when a required id is missing.
    pub fn from_attributes(
        action: &str,
        project_id: Option<&str>,
        link_id: Option<&str>,
    ) -> Option<Self> {
        let project = || project_id.map(ProjectId::from);
        let link = || link_id.map(LinkId::from);

        let decoded = match action {
            ACTION_CREATE_PROJECT => Self::CreateProject,
            ACTION_EXPORT_ALL => Self::ExportAll,
            ACTION_SELECT_PROJECT => Self::SelectProject(project()?),
            ACTION_EXPORT_PROJECT => Self::ExportProject(project()?),
            ACTION_DELETE_PROJECT => Self::DeleteProject(project()?),
            ACTION_EDIT_LINK => Self::EditLink {
                project_id: project()?,
                link_id: link()?,
            },
            ACTION_DELETE_LINK => Self::DeleteLink {
                project_id: project()?,
                link_id: link()?,
            },
            ACTION_OPEN_ADD_LINK => Self::OpenAddLink,
            ACTION_SUBMIT_ADD_LINK => Self::SubmitAddLink,
            ACTION_SUBMIT_EDIT_LINK => Self::SubmitEditLink,
            ACTION_CLOSE_MODAL => Self::CloseModal,
            ACTION_MODAL_BACKDROP => Self::ModalBackdrop,
            ACTION_MODAL_DIALOG => return None,
            _ => return None,
        };
        Some(decoded)
    }
}

/// Text inputs whose values the controller tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    ProjectName,
    LinkUrl,
    LinkTitle,
    EditUrl,
    EditTitle,
}

impl InputField {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::ProjectName => "projectNameInput",
            Self::LinkUrl => "linkUrlInput",
            Self::LinkTitle => "linkTitleInput",
            Self::EditUrl => "editLinkUrlInput",
            Self::EditTitle => "editLinkTitleInput",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        [
            Self::ProjectName,
            Self::LinkUrl,
            Self::LinkTitle,
            Self::EditUrl,
            Self::EditTitle,
        ]
        .into_iter()
        .find(|field| field.element_id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(UiAction),
    Input { field: InputField, value: String },
    KeyPress { field: InputField, key: String },
    Drag { target: DragTarget, phase: DragPhase },
}

/// How the host should treat the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    pub fn suppress() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
        }
    }
}
