//! Project list persistence inside one storage slot.
//!
//! # Responsibility
//! - Encode the full ordered project list as one JSON array.
//! - Decode it on startup, treating absent or corrupt data as empty.
//!
//! # Invariants
//! - Order of projects and links is preserved exactly.
//! - Corrupt slot content is logged and reported as absent; it is left in
//!   place until the next successful save overwrites it.

use crate::model::project::Project;
use crate::repo::slot_repo::SlotStorage;
use crate::repo::{RepoError, RepoResult};
use log::{debug, warn};

/// Loads and saves the complete project list.
pub trait ProjectRepository {
    /// Returns the stored list, or an empty list when nothing usable is stored.
    fn load_projects(&self) -> RepoResult<Vec<Project>>;
    fn save_projects(&self, projects: &[Project]) -> RepoResult<()>;
}

/// Stores the project list as JSON under one slot key.
pub struct SlotProjectRepository<S: SlotStorage> {
    storage: S,
    key: String,
}

impl<S: SlotStorage> SlotProjectRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: SlotStorage> ProjectRepository for SlotProjectRepository<S> {
    fn load_projects(&self) -> RepoResult<Vec<Project>> {
        let Some(raw) = self.storage.get_slot(&self.key)? else {
            debug!("event=projects_load module=repo status=ok source=absent");
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            debug!("event=projects_load module=repo status=ok source=empty");
            return Ok(Vec::new());
        }

        match decode_projects(&raw) {
            Ok(projects) => {
                debug!(
                    "event=projects_load module=repo status=ok source=slot projects={}",
                    projects.len()
                );
                Ok(projects)
            }
            Err(err) => {
                warn!(
                    "event=projects_load module=repo status=degraded error_code=corrupt_slot bytes={} error={}",
                    raw.len(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_projects(&self, projects: &[Project]) -> RepoResult<()> {
        let encoded = encode_projects(projects)?;
        self.storage.set_slot(&self.key, &encoded)?;
        debug!(
            "event=projects_save module=repo status=ok projects={} bytes={}",
            projects.len(),
            encoded.len()
        );
        Ok(())
    }
}

/// Encodes the persisted document: a compact JSON array of projects.
pub fn encode_projects(projects: &[Project]) -> RepoResult<String> {
    serde_json::to_string(projects).map_err(RepoError::Encode)
}

/// Decodes the persisted document.
///
/// A JSON `null` decodes to an empty list.
pub fn decode_projects(raw: &str) -> Result<Vec<Project>, serde_json::Error> {
    let projects: Option<Vec<Project>> = serde_json::from_str(raw)?;
    Ok(projects.unwrap_or_default())
}
