//! Core logic for the project links manager.
//!
//! Projects group saved URLs. The crate owns the data model, its storage
//! slot, export documents, and the interaction state machine a host page
//! drives through [`AppController`].

pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod ui;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AppConfig, AppMetadata, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{LinkId, ProjectId};
pub use model::link::Link;
pub use model::project::Project;
pub use model::timestamp::Timestamp;
pub use model::url_rules::{extract_title_from_url, is_valid_url};
pub use repo::project_repo::{ProjectRepository, SlotProjectRepository};
pub use repo::slot_repo::{MemorySlotStorage, SlotStorage, SqliteSlotStorage};
pub use repo::{RepoError, RepoResult};
pub use service::export::ExportFile;
pub use service::project_store::ProjectStore;
pub use service::{StoreError, StoreResult};
pub use ui::controller::{AppController, UiHost};
pub use ui::drag_drop::{DragPayload, DragPhase, DragTarget, DroppedFile};
pub use ui::event::{EventResponse, InputField, UiAction, UiEvent};
pub use ui::render::RenderedView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
