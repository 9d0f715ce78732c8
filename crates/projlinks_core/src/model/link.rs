//! Link entity owned by a project.

use crate::model::id::LinkId;
use crate::model::timestamp::{iso_millis, iso_millis_opt, Timestamp};
use serde::{Deserialize, Serialize};

/// One saved URL inside a project.
///
/// `id` is private so it cannot change after assignment; `url` and `title`
/// change only through [`Link::edit`], which stamps `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    id: LinkId,
    pub url: String,
    pub title: String,
    #[serde(with = "iso_millis")]
    pub added_at: Timestamp,
    #[serde(
        default,
        with = "iso_millis_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<Timestamp>,
}

impl Link {
    /// Creates a link with a generated id.
    pub fn new(url: impl Into<String>, title: impl Into<String>, added_at: Timestamp) -> Self {
        Self::with_id(LinkId::generate(), url, title, added_at)
    }

    /// Creates a link with a caller-provided id (seed data, imports).
    pub fn with_id(
        id: LinkId,
        url: impl Into<String>,
        title: impl Into<String>,
        added_at: Timestamp,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            title: title.into(),
            added_at,
            updated_at: None,
        }
    }

    pub fn id(&self) -> &LinkId {
        &self.id
    }

    /// Replaces url and title in place and records the edit time.
    pub fn edit(&mut self, url: impl Into<String>, title: impl Into<String>, at: Timestamp) {
        self.url = url.into();
        self.title = title.into();
        self.updated_at = Some(at);
    }
}
