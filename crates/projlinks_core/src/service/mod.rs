//! Use-case services over the project list.
//!
//! # Responsibility
//! - Enforce naming and URL invariants before anything is persisted.
//! - Build export documents.
//! - Keep UI callers decoupled from storage details.

pub mod demo;
pub mod export;
pub mod project_store;

use crate::model::id::{LinkId, ProjectId};
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejection or failure of a store operation.
///
/// Every variant leaves the project list exactly as it was before the call.
#[derive(Debug)]
pub enum StoreError {
    /// Project name is blank after trimming.
    EmptyProjectName,
    /// A project with this exact name exists.
    DuplicateProjectName(String),
    /// URL is blank after trimming.
    EmptyUrl,
    /// URL is not an absolute http(s) URL.
    InvalidUrl(String),
    /// Another link in the same project already stores this URL.
    DuplicateUrl(String),
    ProjectNotFound(ProjectId),
    LinkNotFound(LinkId),
    /// Export requested while no projects exist.
    NothingToExport,
    /// Export document could not be encoded.
    Export(serde_json::Error),
    /// Persistence failure.
    Repo(RepoError),
}

impl StoreError {
    /// Text shown to the user in a blocking notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyProjectName => "Please enter a project name",
            Self::DuplicateProjectName(_) => "A project with this name already exists",
            Self::EmptyUrl => "Please enter a URL",
            Self::InvalidUrl(_) => "Please enter a valid URL (including http:// or https://)",
            Self::DuplicateUrl(_) => "This link already exists in the project",
            Self::ProjectNotFound(_) => "This project no longer exists",
            Self::LinkNotFound(_) => "This link no longer exists",
            Self::NothingToExport => "No projects to export",
            Self::Export(_) => "Export failed. Please try again.",
            Self::Repo(_) => "Your changes could not be saved. Please try again.",
        }
    }

    /// Stable machine-readable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyProjectName => "empty_project_name",
            Self::DuplicateProjectName(_) => "duplicate_project_name",
            Self::EmptyUrl => "empty_url",
            Self::InvalidUrl(_) => "invalid_url",
            Self::DuplicateUrl(_) => "duplicate_url",
            Self::ProjectNotFound(_) => "project_not_found",
            Self::LinkNotFound(_) => "link_not_found",
            Self::NothingToExport => "nothing_to_export",
            Self::Export(_) => "export_encode_failed",
            Self::Repo(_) => "persist_failed",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectName => write!(f, "project name must not be blank"),
            Self::DuplicateProjectName(name) => write!(f, "project name already exists: `{name}`"),
            Self::EmptyUrl => write!(f, "url must not be blank"),
            Self::InvalidUrl(url) => write!(f, "url is not an absolute http(s) url: `{url}`"),
            Self::DuplicateUrl(url) => write!(f, "url already exists in project: `{url}`"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::LinkNotFound(id) => write!(f, "link not found: {id}"),
            Self::NothingToExport => write!(f, "no projects to export"),
            Self::Export(err) => write!(f, "failed to encode export: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Export(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
