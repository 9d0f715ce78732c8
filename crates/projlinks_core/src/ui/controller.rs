//! Application controller: the single owner of store and view state.
//!
//! # Responsibility
//! - Dispatch host events to store operations.
//! - Drive the selection, modal and drop-zone state machines.
//! - Re-render the whole view after every event.
//!
//! # Invariants
//! - A rejected operation surfaces exactly one notice and changes no state.
//! - Deleting a project asks the host for confirmation first.
//! - Every drag event is answered with default handling suppressed.

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::model::id::{LinkId, ProjectId};
use crate::repo::project_repo::{ProjectRepository, SlotProjectRepository};
use crate::repo::slot_repo::SqliteSlotStorage;
use crate::service::export::ExportFile;
use crate::service::project_store::ProjectStore;
use crate::service::{StoreError, StoreResult};
use crate::ui::drag_drop::{
    extract_dropped_url, DragPayload, DragPhase, DragTarget, DropExtraction, DropZoneState,
};
use crate::ui::event::{EventResponse, InputField, UiAction, UiEvent};
use crate::ui::modal::{FormState, Modal};
use crate::ui::notice::{Notice, NoticeBoard, NoticeKind};
use crate::ui::render::{render_view, RenderedView, ViewModel};
use crate::ui::selection::Selection;
use log::{debug, info};
use rusqlite::Connection;

pub const CONFIRM_DELETE_PROJECT: &str =
    "Are you sure you want to delete this project and all its links?";
pub const SELECT_PROJECT_FIRST: &str = "Please select a project first!";
pub const LINK_ADDED: &str = "Link added successfully!";
pub const LINK_UPDATED: &str = "Link updated successfully!";
pub const INVALID_DROP: &str =
    "Invalid URL dropped. Please drag a valid URL from your browser address bar or a bookmark.";
pub const FILES_UNSUPPORTED: &str =
    "Dropped files are not supported. Please drag the URL directly from your browser address bar or bookmark.";

/// Browser capabilities the controller needs.
pub trait UiHost {
    /// Blocking yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
    /// Blocking notice.
    fn alert(&mut self, message: &str);
    /// Offers a file for download.
    fn offer_download(&mut self, file: ExportFile);
}

pub struct AppController<R: ProjectRepository, C: Clock, H: UiHost> {
    store: ProjectStore<R, C>,
    host: H,
    config: AppConfig,
    selection: Selection,
    modal: Modal,
    forms: FormState,
    drop_zone: DropZoneState,
    notices: NoticeBoard,
    view: RenderedView,
}

impl<R: ProjectRepository, C: Clock, H: UiHost> AppController<R, C, H> {
    /// Opens the store (seeding demo data into empty storage) and renders.
    pub fn start(repo: R, clock: C, host: H, config: AppConfig) -> StoreResult<Self> {
        let store = ProjectStore::open(repo, clock, config.app_metadata.clone())?;
        let mut controller = Self {
            store,
            host,
            config,
            selection: Selection::default(),
            modal: Modal::default(),
            forms: FormState::default(),
            drop_zone: DropZoneState::default(),
            notices: NoticeBoard::default(),
            view: RenderedView::default(),
        };
        controller.rerender();
        Ok(controller)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &ProjectStore<R, C> {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The last full render.
    pub fn view(&self) -> &RenderedView {
        &self.view
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn forms(&self) -> &FormState {
        &self.forms
    }

    pub fn drop_zone(&self) -> DropZoneState {
        self.drop_zone
    }

    /// Selected project id, or `None` when nothing (or a vanished project)
    /// is selected.
    pub fn selected_project_id(&self) -> Option<&ProjectId> {
        self.selection
            .resolve(self.store.projects())
            .map(|project| project.id())
    }

    pub fn visible_notice(&self) -> Option<&Notice> {
        self.notices.visible(self.store.clock().now())
    }

    /// Timer hook: hides an expired notice. Returns whether the view changed.
    pub fn tick(&mut self) -> bool {
        let changed = self.notices.expire(self.store.clock().now());
        if changed {
            self.rerender();
        }
        changed
    }

    pub fn dispatch(&mut self, event: UiEvent) -> EventResponse {
        let response = match event {
            UiEvent::Click(action) => {
                self.on_action(action);
                EventResponse::default()
            }
            UiEvent::Input { field, value } => {
                self.forms.set(field, value);
                return EventResponse::default();
            }
            UiEvent::KeyPress { field, key } => {
                if key == "Enter" {
                    match field {
                        InputField::ProjectName => self.create_project(),
                        InputField::LinkUrl => self.submit_add_link(),
                        InputField::EditUrl => self.submit_edit_link(),
                        InputField::LinkTitle | InputField::EditTitle => {}
                    }
                }
                EventResponse::default()
            }
            UiEvent::Drag { target, phase } => {
                self.on_drag(target, phase);
                EventResponse::suppress()
            }
        };
        self.rerender();
        response
    }

    /// Selects a project by id; unknown ids clear the selection.
    pub fn select_project(&mut self, id: &ProjectId) {
        self.selection.select(id, self.store.projects());
        debug!(
            "event=project_select module=ui status=ok selected={}",
            self.selection.selected_id().is_some()
        );
    }

    fn on_action(&mut self, action: UiAction) {
        match action {
            UiAction::CreateProject => self.create_project(),
            UiAction::ExportAll => self.export_all(),
            UiAction::SelectProject(id) => self.select_project(&id),
            UiAction::ExportProject(id) => self.export_project(&id),
            UiAction::DeleteProject(id) => self.delete_project(&id),
            UiAction::EditLink {
                project_id,
                link_id,
            } => self.open_edit_link(project_id, link_id),
            UiAction::DeleteLink {
                project_id,
                link_id,
            } => self.delete_link(&project_id, &link_id),
            UiAction::OpenAddLink => self.open_add_link(),
            UiAction::SubmitAddLink => self.submit_add_link(),
            UiAction::SubmitEditLink => self.submit_edit_link(),
            UiAction::CloseModal | UiAction::ModalBackdrop => self.close_modal(),
        }
    }

    fn create_project(&mut self) {
        let name = self.forms.project_name.clone();
        match self.store.create_project(&name) {
            Ok(project) => {
                self.forms.project_name.clear();
                self.selection.select(project.id(), self.store.projects());
                self.success(format!("Project \"{}\" created successfully!", project.name));
            }
            Err(err) => self.reject(&err),
        }
    }

    fn delete_project(&mut self, id: &ProjectId) {
        if !self.host.confirm(CONFIRM_DELETE_PROJECT) {
            debug!("event=project_delete module=ui status=cancelled");
            return;
        }
        match self.store.delete_project(id) {
            Ok(_) => {
                self.selection.clear_if(id);
                let editing_deleted = matches!(
                    &self.modal,
                    Modal::EditLink { project_id, .. } if project_id == id
                );
                let adding_without_target =
                    self.modal == Modal::AddLink && self.selection.selected_id().is_none();
                if editing_deleted || adding_without_target {
                    self.close_modal();
                }
            }
            Err(err) => self.reject(&err),
        }
    }

    fn delete_link(&mut self, project_id: &ProjectId, link_id: &LinkId) {
        if let Err(err) = self.store.delete_link(project_id, link_id) {
            self.reject(&err);
        }
    }

    fn export_project(&mut self, id: &ProjectId) {
        match self.store.export_project(id) {
            Ok(Some(file)) => self.host.offer_download(file),
            Ok(None) => {}
            Err(err) => self.reject(&err),
        }
    }

    fn export_all(&mut self) {
        match self.store.export_all_projects() {
            Ok(file) => self.host.offer_download(file),
            Err(err) => self.reject(&err),
        }
    }

    fn open_add_link(&mut self) {
        if self.selected_project_id().is_none() {
            self.warn(SELECT_PROJECT_FIRST);
            return;
        }
        self.modal = Modal::AddLink;
    }

    fn open_edit_link(&mut self, project_id: ProjectId, link_id: LinkId) {
        let Some(link) = self
            .store
            .project(&project_id)
            .and_then(|project| project.link(&link_id))
        else {
            self.reject(&StoreError::LinkNotFound(link_id));
            return;
        };
        self.forms.load_edit_link(link);
        self.modal = Modal::EditLink {
            project_id,
            link_id,
        };
    }

    fn close_modal(&mut self) {
        if matches!(self.modal, Modal::EditLink { .. }) {
            self.forms.clear_edit_link();
        }
        self.modal = Modal::Closed;
    }

    fn submit_add_link(&mut self) {
        if self.modal != Modal::AddLink {
            return;
        }
        let Some(project_id) = self.selected_project_id().cloned() else {
            self.close_modal();
            self.warn(SELECT_PROJECT_FIRST);
            return;
        };

        let url = self.forms.link_url.trim().to_string();
        let title = self.forms.link_title.trim().to_string();
        match self.store.add_link(&project_id, &url, Some(&title)) {
            Ok(Some(_)) => {
                self.forms.clear_add_link();
                self.close_modal();
                self.success(LINK_ADDED);
            }
            Ok(None) => {
                self.selection.clear();
                self.close_modal();
                self.warn(SELECT_PROJECT_FIRST);
            }
            Err(err) => self.reject(&err),
        }
    }

    fn submit_edit_link(&mut self) {
        let Modal::EditLink {
            project_id,
            link_id,
        } = self.modal.clone()
        else {
            return;
        };

        let url = self.forms.edit_url.trim().to_string();
        let title = self.forms.edit_title.trim().to_string();
        match self
            .store
            .edit_link(&project_id, &link_id, &url, Some(&title))
        {
            Ok(_) => {
                self.close_modal();
                self.success(LINK_UPDATED);
            }
            Err(err) => self.reject(&err),
        }
    }

    fn on_drag(&mut self, target: DragTarget, phase: DragPhase) {
        let active = self.selected_project_id().is_some();
        self.drop_zone.on_drag(target, &phase, active);

        if let (DragTarget::DropZone, DragPhase::Drop(payload)) = (target, phase) {
            self.on_drop(&payload);
        }
    }

    fn on_drop(&mut self, payload: &DragPayload) {
        let Some(project_id) = self.selected_project_id().cloned() else {
            self.warn(SELECT_PROJECT_FIRST);
            return;
        };

        match extract_dropped_url(payload) {
            DropExtraction::Url(url) => match self.store.add_link(&project_id, &url, None) {
                Ok(Some(_)) => self.success(LINK_ADDED),
                Ok(None) => {
                    self.selection.clear();
                    self.warn(SELECT_PROJECT_FIRST);
                }
                Err(err) => self.reject(&err),
            },
            DropExtraction::FilesUnsupported => {
                info!("event=link_drop module=ui status=rejected error_code=files_unsupported");
                self.host.alert(FILES_UNSUPPORTED);
            }
            DropExtraction::Invalid => {
                info!("event=link_drop module=ui status=rejected error_code=invalid_url");
                self.host.alert(INVALID_DROP);
            }
        }
    }

    fn success(&mut self, text: impl Into<String>) {
        let now = self.store.clock().now();
        let duration = self.config.success_notice_duration();
        self.notices.show(NoticeKind::Success, text, now, duration);
    }

    fn warn(&mut self, text: impl Into<String>) {
        let now = self.store.clock().now();
        let duration = self.config.warning_notice_duration();
        self.notices.show(NoticeKind::Warning, text, now, duration);
    }

    fn reject(&mut self, err: &StoreError) {
        self.host.alert(err.user_message());
    }

    fn rerender(&mut self) {
        let now = self.store.clock().now();
        let model = ViewModel {
            projects: self.store.projects(),
            selected: self
                .selection
                .resolve(self.store.projects())
                .map(|project| project.id()),
            drop_zone: self.drop_zone,
            modal: &self.modal,
            forms: &self.forms,
            notice: self.notices.visible(now),
            metadata: self.store.metadata(),
        };
        self.view = render_view(&model);
    }
}

impl<'conn, C: Clock, H: UiHost>
    AppController<SlotProjectRepository<SqliteSlotStorage<'conn>>, C, H>
{
    /// Starts over the configured `storageKey` slot of an open database.
    pub fn open(
        conn: &'conn Connection,
        clock: C,
        host: H,
        config: AppConfig,
    ) -> StoreResult<Self> {
        let repo = SlotProjectRepository::new(
            SqliteSlotStorage::new(conn),
            config.storage_key.clone(),
        );
        Self::start(repo, clock, host, config)
    }
}
