//! Export documents offered to the user as JSON downloads.
//!
//! # Invariants
//! - Counts in an envelope always match the arrays it carries.
//! - Documents are pretty-printed with two-space indentation.

use crate::config::AppMetadata;
use crate::model::link::Link;
use crate::model::project::Project;
use crate::model::timestamp::{iso_millis, Timestamp};
use serde::Serialize;

pub const EXPORT_MIME_TYPE: &str = "application/json";
pub const ALL_PROJECTS_FILE_NAME: &str = "all_projects_links.json";

/// A file ready to hand to the host for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectExport<'a> {
    app_metadata: &'a AppMetadata,
    project_name: &'a str,
    #[serde(with = "iso_millis")]
    created_at: Timestamp,
    #[serde(with = "iso_millis")]
    exported_at: Timestamp,
    links_count: usize,
    links: &'a [Link],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AllProjectsExport<'a> {
    app_metadata: &'a AppMetadata,
    #[serde(with = "iso_millis")]
    exported_at: Timestamp,
    projects_count: usize,
    total_links: usize,
    projects: &'a [Project],
}

/// Builds `{projectName}_links.json` for one project.
pub fn export_project(
    project: &Project,
    metadata: &AppMetadata,
    exported_at: Timestamp,
) -> Result<ExportFile, serde_json::Error> {
    let document = ProjectExport {
        app_metadata: metadata,
        project_name: &project.name,
        created_at: project.created_at,
        exported_at,
        links_count: project.link_count(),
        links: &project.links,
    };
    Ok(ExportFile {
        filename: format!("{}_links.json", project.name),
        mime_type: EXPORT_MIME_TYPE,
        contents: serde_json::to_string_pretty(&document)?,
    })
}

/// Builds `all_projects_links.json` for the full list.
pub fn export_all_projects(
    projects: &[Project],
    metadata: &AppMetadata,
    exported_at: Timestamp,
) -> Result<ExportFile, serde_json::Error> {
    let document = AllProjectsExport {
        app_metadata: metadata,
        exported_at,
        projects_count: projects.len(),
        total_links: projects.iter().map(Project::link_count).sum(),
        projects,
    };
    Ok(ExportFile {
        filename: ALL_PROJECTS_FILE_NAME.to_string(),
        mime_type: EXPORT_MIME_TYPE,
        contents: serde_json::to_string_pretty(&document)?,
    })
}
