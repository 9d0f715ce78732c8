//! Project entity: a named, ordered collection of links.

use crate::model::id::{LinkId, ProjectId};
use crate::model::link::Link;
use crate::model::timestamp::{iso_millis, Timestamp};
use serde::{Deserialize, Serialize};

/// Named group of links.
///
/// # Invariants
/// - `id` never changes after construction.
/// - Link urls are unique within `links` (enforced by the store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    pub name: String,
    pub links: Vec<Link>,
    #[serde(with = "iso_millis")]
    pub created_at: Timestamp,
}

impl Project {
    /// Creates an empty project with a generated id.
    pub fn new(name: impl Into<String>, created_at: Timestamp) -> Self {
        Self::with_id(ProjectId::generate(), name, created_at)
    }

    /// Creates an empty project with a caller-provided id.
    pub fn with_id(id: ProjectId, name: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            links: Vec::new(),
            created_at,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn link(&self, link_id: &LinkId) -> Option<&Link> {
        self.links.iter().find(|link| link.id() == link_id)
    }

    pub fn link_mut(&mut self, link_id: &LinkId) -> Option<&mut Link> {
        self.links.iter_mut().find(|link| link.id() == link_id)
    }

    /// Returns whether a link other than `except` already stores `url`.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn has_url(&self, url: &str, except: Option<&LinkId>) -> bool {
        self.links
            .iter()
            .any(|link| link.url == url && Some(link.id()) != except)
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
