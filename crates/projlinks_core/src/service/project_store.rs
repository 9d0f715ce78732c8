//! Project store: the ordered project list and its mutations.
//!
//! # Responsibility
//! - Own the in-memory project list and keep the storage slot in sync.
//! - Enforce name and URL uniqueness rules.
//! - Seed demonstration data into empty storage.
//!
//! # Invariants
//! - Project names are unique (exact, case-sensitive match).
//! - Link URLs are unique within a project, excluding the link being edited.
//! - A mutation is visible in memory only after it has been persisted; a
//!   rejected or failed call changes nothing.

use crate::clock::Clock;
use crate::config::AppMetadata;
use crate::model::id::{LinkId, ProjectId};
use crate::model::link::Link;
use crate::model::project::Project;
use crate::model::url_rules::{extract_title_from_url, is_valid_url};
use crate::repo::project_repo::ProjectRepository;
use crate::service::demo::demo_projects;
use crate::service::export::{self, ExportFile};
use crate::service::{StoreError, StoreResult};
use log::{info, warn};

pub struct ProjectStore<R: ProjectRepository, C: Clock> {
    repo: R,
    clock: C,
    metadata: AppMetadata,
    projects: Vec<Project>,
}

impl<R: ProjectRepository, C: Clock> ProjectStore<R, C> {
    /// Loads the persisted list, seeding demo projects when it is empty.
    ///
    /// # Side effects
    /// - Writes the seed to storage when seeding happens.
    pub fn open(repo: R, clock: C, metadata: AppMetadata) -> StoreResult<Self> {
        let projects = repo.load_projects()?;
        let mut store = Self {
            repo,
            clock,
            metadata,
            projects,
        };

        if store.projects.is_empty() {
            let seed = demo_projects(store.clock.now());
            store.commit(seed)?;
            info!(
                "event=demo_seed module=store status=ok projects={}",
                store.projects.len()
            );
        } else {
            info!(
                "event=store_open module=store status=ok projects={}",
                store.projects.len()
            );
        }

        Ok(store)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.project(id).is_some()
    }

    pub fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Appends a new empty project named `name` (trimmed).
    pub fn create_project(&mut self, name: &str) -> StoreResult<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.reject("project_create", StoreError::EmptyProjectName));
        }
        if self.projects.iter().any(|project| project.name == name) {
            return Err(self.reject(
                "project_create",
                StoreError::DuplicateProjectName(name.to_string()),
            ));
        }

        let project = Project::new(name, self.clock.now());
        let mut next = self.projects.clone();
        next.push(project.clone());
        self.commit(next)?;

        info!(
            "event=project_create module=store status=ok project_id={}",
            project.id()
        );
        Ok(project)
    }

    /// Removes a project and every link it owns.
    ///
    /// Returns `false` when `id` is unknown. Callers are responsible for the
    /// confirmation gate.
    pub fn delete_project(&mut self, id: &ProjectId) -> StoreResult<bool> {
        let Some(removed) = self.project(id).map(Project::link_count) else {
            return Ok(false);
        };

        let next = self
            .projects
            .iter()
            .filter(|project| project.id() != id)
            .cloned()
            .collect();
        self.commit(next)?;

        info!(
            "event=project_delete module=store status=ok project_id={} links_removed={}",
            id, removed
        );
        Ok(true)
    }

    /// Appends a link to a project.
    ///
    /// Returns `Ok(None)` without touching storage when `project_id` is
    /// unknown. A blank or absent `title` is derived from the URL hostname.
    pub fn add_link(
        &mut self,
        project_id: &ProjectId,
        url: &str,
        title: Option<&str>,
    ) -> StoreResult<Option<Link>> {
        let Some(index) = self.position(project_id) else {
            return Ok(None);
        };
        let url = self.checked_url("link_add", url)?;
        if self.projects[index].has_url(url, None) {
            return Err(self.reject("link_add", StoreError::DuplicateUrl(url.to_string())));
        }

        let link = Link::new(url, resolve_title(title, url), self.clock.now());
        let mut next = self.projects.clone();
        next[index].links.push(link.clone());
        self.commit(next)?;

        info!(
            "event=link_add module=store status=ok project_id={} link_id={}",
            project_id,
            link.id()
        );
        Ok(Some(link))
    }

    /// Removes one link. Returns whether anything was removed.
    pub fn delete_link(&mut self, project_id: &ProjectId, link_id: &LinkId) -> StoreResult<bool> {
        let Some(index) = self.position(project_id) else {
            return Ok(false);
        };
        if self.projects[index].link(link_id).is_none() {
            return Ok(false);
        }

        let mut next = self.projects.clone();
        next[index].links.retain(|link| link.id() != link_id);
        self.commit(next)?;

        info!(
            "event=link_delete module=store status=ok project_id={} link_id={}",
            project_id, link_id
        );
        Ok(true)
    }

    /// Replaces a link's URL and title in place and stamps `updated_at`.
    ///
    /// Keeping the link's own URL is allowed; taking another link's URL is not.
    pub fn edit_link(
        &mut self,
        project_id: &ProjectId,
        link_id: &LinkId,
        new_url: &str,
        new_title: Option<&str>,
    ) -> StoreResult<Link> {
        let new_url = self.checked_url("link_edit", new_url)?;
        let Some(index) = self.position(project_id) else {
            return Err(self.reject(
                "link_edit",
                StoreError::ProjectNotFound(project_id.clone()),
            ));
        };
        if self.projects[index].link(link_id).is_none() {
            return Err(self.reject("link_edit", StoreError::LinkNotFound(link_id.clone())));
        }
        if self.projects[index].has_url(new_url, Some(link_id)) {
            return Err(self.reject(
                "link_edit",
                StoreError::DuplicateUrl(new_url.to_string()),
            ));
        }

        let now = self.clock.now();
        let mut next = self.projects.clone();
        let link = next[index]
            .link_mut(link_id)
            .ok_or_else(|| StoreError::LinkNotFound(link_id.clone()))?;
        link.edit(new_url, resolve_title(new_title, new_url), now);
        let edited = link.clone();
        self.commit(next)?;

        info!(
            "event=link_edit module=store status=ok project_id={} link_id={}",
            project_id, link_id
        );
        Ok(edited)
    }

    /// Builds the single-project export, or `None` for an unknown id.
    pub fn export_project(&self, id: &ProjectId) -> StoreResult<Option<ExportFile>> {
        let Some(project) = self.project(id) else {
            return Ok(None);
        };
        let file = export::export_project(project, &self.metadata, self.clock.now())
            .map_err(StoreError::Export)?;
        info!(
            "event=project_export module=store status=ok project_id={} links={}",
            id,
            project.link_count()
        );
        Ok(Some(file))
    }

    /// Builds the all-projects export; fails when there is nothing to export.
    pub fn export_all_projects(&self) -> StoreResult<ExportFile> {
        if self.projects.is_empty() {
            return Err(self.reject("projects_export", StoreError::NothingToExport));
        }
        let file = export::export_all_projects(&self.projects, &self.metadata, self.clock.now())
            .map_err(StoreError::Export)?;
        info!(
            "event=projects_export module=store status=ok projects={}",
            self.projects.len()
        );
        Ok(file)
    }

    fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| project.id() == id)
    }

    fn checked_url<'a>(&self, event: &str, url: &'a str) -> StoreResult<&'a str> {
        let url = url.trim();
        if url.is_empty() {
            return Err(self.reject(event, StoreError::EmptyUrl));
        }
        if !is_valid_url(url) {
            return Err(self.reject(event, StoreError::InvalidUrl(url.to_string())));
        }
        Ok(url)
    }

    fn reject(&self, event: &str, err: StoreError) -> StoreError {
        info!(
            "event={event} module=store status=rejected error_code={}",
            err.code()
        );
        err
    }

    fn commit(&mut self, next: Vec<Project>) -> StoreResult<()> {
        if let Err(err) = self.repo.save_projects(&next) {
            warn!(
                "event=projects_persist module=store status=error error_code=persist_failed error={}",
                err
            );
            return Err(err.into());
        }
        self.projects = next;
        Ok(())
    }
}

fn resolve_title(title: Option<&str>, url: &str) -> String {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => extract_title_from_url(url),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_title;

    #[test]
    fn blank_titles_fall_back_to_hostname() {
        assert_eq!(resolve_title(None, "https://www.rust-lang.org"), "Rust-lang.org");
        assert_eq!(resolve_title(Some("  "), "https://crates.io"), "Crates.io");
        assert_eq!(resolve_title(Some(" Docs "), "https://docs.rs"), "Docs");
    }
}
