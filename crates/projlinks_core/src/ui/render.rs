//! Markup rendering.
//!
//! # Responsibility
//! - Produce the complete view as HTML fragments from explicit state.
//!
//! # Invariants
//! - Rendering is pure: same view model, same markup.
//! - Every user-supplied string (names, titles, urls, ids) is escaped.
//! - Links are emitted as anchors only for http(s) targets.

use crate::config::AppMetadata;
use crate::model::id::ProjectId;
use crate::model::link::Link;
use crate::model::project::Project;
use crate::model::timestamp::parse_timestamp;
use crate::model::url_rules::is_valid_url;
use crate::ui::drag_drop::DropZoneState;
use crate::ui::event::{
    InputField, ACTION_CLOSE_MODAL, ACTION_DELETE_LINK, ACTION_DELETE_PROJECT, ACTION_EDIT_LINK,
    ACTION_EXPORT_PROJECT, ACTION_MODAL_BACKDROP, ACTION_MODAL_DIALOG, ACTION_OPEN_ADD_LINK,
    ACTION_SELECT_PROJECT, ACTION_SUBMIT_ADD_LINK, ACTION_SUBMIT_EDIT_LINK,
};
use crate::ui::modal::{FormState, Modal};
use crate::ui::notice::Notice;

pub const NO_PROJECTS_PLACEHOLDER: &str = "No projects yet. Create your first project above!";
pub const NO_LINKS_PLACEHOLDER: &str = "No links yet";

/// Everything the renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct ViewModel<'a> {
    pub projects: &'a [Project],
    /// Selected project id, already resolved against `projects`.
    pub selected: Option<&'a ProjectId>,
    pub drop_zone: DropZoneState,
    pub modal: &'a Modal,
    pub forms: &'a FormState,
    pub notice: Option<&'a Notice>,
    pub metadata: &'a AppMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropZoneView {
    pub class: String,
    /// `data-action` for the zone element itself, so the whole zone is clickable.
    pub action: &'static str,
    pub html: String,
}

/// The full rendered page state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    pub projects_html: String,
    pub drop_zone: DropZoneView,
    pub modal_html: String,
    pub notice_html: String,
    pub app_info_html: String,
    /// Raw value for the project name input.
    pub project_name_value: String,
}

pub fn render_view(model: &ViewModel<'_>) -> RenderedView {
    RenderedView {
        projects_html: render_projects(model.projects, model.selected),
        drop_zone: render_drop_zone(model),
        modal_html: render_modal(model.modal, model.forms),
        notice_html: model.notice.map(render_notice).unwrap_or_default(),
        app_info_html: render_app_info(model.metadata),
        project_name_value: model.forms.project_name.clone(),
    }
}

/// Escapes text for element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_projects(projects: &[Project], selected: Option<&ProjectId>) -> String {
    if projects.is_empty() {
        return format!(r#"<div class="no-projects">{NO_PROJECTS_PLACEHOLDER}</div>"#);
    }
    projects
        .iter()
        .map(|project| render_project(project, selected == Some(project.id())))
        .collect()
}

fn render_project(project: &Project, is_selected: bool) -> String {
    let id = escape_html(project.id().as_str());
    let card_class = if is_selected {
        "project-card selected"
    } else {
        "project-card"
    };
    let count = project.link_count();
    let noun = if count == 1 { "link" } else { "links" };
    let links = if project.links.is_empty() {
        format!(r#"<p class="no-links">{NO_LINKS_PLACEHOLDER}</p>"#)
    } else {
        let items: String = project
            .links
            .iter()
            .map(|link| render_link(&id, link))
            .collect();
        format!(r#"<ul class="links-list">{items}</ul>"#)
    };

    format!(
        concat!(
            r#"<div class="{card_class}" data-action="{select}" data-project-id="{id}">"#,
            r#"<div class="project-header">"#,
            r#"<h3 class="project-name">{name}</h3>"#,
            r#"<div class="project-actions">"#,
            r#"<button class="export-project-btn" data-action="{export}" data-project-id="{id}">Export</button>"#,
            r#"<button class="delete-project-btn" data-action="{delete}" data-project-id="{id}">Delete</button>"#,
            r#"</div></div>"#,
            r#"<div class="project-info">"#,
            r#"<p><strong>{count}</strong> {noun}</p>"#,
            r#"<p>Created: {created}</p>"#,
            r#"</div>{links}</div>"#,
        ),
        card_class = card_class,
        select = ACTION_SELECT_PROJECT,
        id = id,
        name = escape_html(&project.name),
        export = ACTION_EXPORT_PROJECT,
        delete = ACTION_DELETE_PROJECT,
        count = count,
        noun = noun,
        created = project.created_at.format("%-m/%-d/%Y"),
        links = links,
    )
}

fn render_link(project_id: &str, link: &Link) -> String {
    let link_id = escape_html(link.id().as_str());
    let url = escape_html(&link.url);
    let title = escape_html(&link.title);
    let label = if is_valid_url(&link.url) {
        format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{title}</a>"#)
    } else {
        format!(r#"<span class="link-unsafe">{title}</span>"#)
    };

    format!(
        concat!(
            r#"<li class="link-item">"#,
            r#"<div class="link-info">{label}<div class="link-title">{url}</div></div>"#,
            r#"<div class="link-actions">"#,
            r#"<button class="edit-link-btn" data-action="{edit}" data-project-id="{project_id}" data-link-id="{link_id}">Edit</button>"#,
            r#"<button class="delete-link-btn" data-action="{delete}" data-project-id="{project_id}" data-link-id="{link_id}">×</button>"#,
            r#"</div></li>"#,
        ),
        label = label,
        url = url,
        edit = ACTION_EDIT_LINK,
        delete = ACTION_DELETE_LINK,
        project_id = project_id,
        link_id = link_id,
    )
}

fn render_drop_zone(model: &ViewModel<'_>) -> DropZoneView {
    let selected = model
        .selected
        .and_then(|id| model.projects.iter().find(|project| project.id() == id));

    let (class, heading, hint) = match selected {
        Some(project) => (
            if model.drop_zone.drag_over {
                "drop-zone drag-over"
            } else {
                "drop-zone"
            },
            format!("Drop Links for &quot;{}&quot;", escape_html(&project.name)),
            "Drag links here or click to add manually",
        ),
        None => (
            "drop-zone disabled",
            "Drag and Drop Links Here".to_string(),
            "Select a project first, then drag links or URLs here to add them",
        ),
    };

    DropZoneView {
        class: class.to_string(),
        action: ACTION_OPEN_ADD_LINK,
        html: format!(
            r#"<div class="drop-zone-content"><h3>{heading}</h3><p>{hint}</p><div class="drop-icon">📎</div></div>"#
        ),
    }
}

fn render_modal(modal: &Modal, forms: &FormState) -> String {
    let (heading, url_field, title_field, submit_action, submit_label) = match modal {
        Modal::Closed => return String::new(),
        Modal::AddLink => (
            "Add Link",
            InputField::LinkUrl,
            InputField::LinkTitle,
            ACTION_SUBMIT_ADD_LINK,
            "Add Link",
        ),
        Modal::EditLink { .. } => (
            "Edit Link",
            InputField::EditUrl,
            InputField::EditTitle,
            ACTION_SUBMIT_EDIT_LINK,
            "Save Changes",
        ),
    };

    format!(
        concat!(
            r#"<div class="modal" data-action="{backdrop}">"#,
            r#"<div class="modal-content" data-action="{dialog}">"#,
            r#"<span class="close" data-action="{close}">&times;</span>"#,
            r#"<h3>{heading}</h3>"#,
            r#"<input type="url" id="{url_id}" placeholder="https://example.com" value="{url_value}">"#,
            r#"<input type="text" id="{title_id}" placeholder="Optional title" value="{title_value}">"#,
            r#"<button data-action="{submit}">{submit_label}</button>"#,
            r#"</div></div>"#,
        ),
        backdrop = ACTION_MODAL_BACKDROP,
        dialog = ACTION_MODAL_DIALOG,
        close = ACTION_CLOSE_MODAL,
        heading = heading,
        url_id = url_field.element_id(),
        url_value = escape_html(forms.get(url_field)),
        title_id = title_field.element_id(),
        title_value = escape_html(forms.get(title_field)),
        submit = submit_action,
        submit_label = submit_label,
    )
}

fn render_notice(notice: &Notice) -> String {
    format!(
        r#"<div id="successMessage" class="{}">{}</div>"#,
        notice.kind.css_class(),
        escape_html(&notice.text)
    )
}

fn render_app_info(metadata: &AppMetadata) -> String {
    format!(
        concat!(
            r#"<div class="app-info">"#,
            r#"<span>v{version}</span> "#,
            r#"<span>Created: <span id="createdDate">{created}</span></span> "#,
            r#"<span>Updated: <span id="updatedDate">{updated}</span></span>"#,
            r#"</div>"#,
        ),
        version = escape_html(&metadata.version),
        created = escape_html(&display_date(&metadata.created_date)),
        updated = escape_html(&display_date(&metadata.updated_date)),
    )
}

/// `Sep 19, 2025, 08:52 AM UTC`; unparseable input is shown as-is.
fn display_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Ok(ts) => ts.format("%b %-d, %Y, %I:%M %p UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_date, escape_html, render_projects, NO_PROJECTS_PLACEHOLDER};
    use crate::model::id::ProjectId;
    use crate::model::link::Link;
    use crate::model::project::Project;
    use chrono::{TimeZone, Utc};

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(
            escape_html(r#"<b class="x">Tom & 'Jerry'</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert!(render_projects(&[], None).contains(NO_PROJECTS_PLACEHOLDER));
    }

    #[test]
    fn selected_card_carries_marker_and_counts() {
        let created = Utc.with_ymd_and_hms(2025, 9, 19, 8, 0, 0).unwrap();
        let mut project = Project::with_id(ProjectId::from("p1"), "Reading", created);
        project
            .links
            .push(Link::new("https://a.dev", "A", created));

        let selected = ProjectId::from("p1");
        let html = render_projects(std::slice::from_ref(&project), Some(&selected));
        assert!(html.contains(r#"class="project-card selected""#));
        assert!(html.contains("<strong>1</strong> link<"));
        assert!(html.contains("Created: 9/19/2025"));

        let html = render_projects(std::slice::from_ref(&project), None);
        assert!(!html.contains("selected"));
    }

    #[test]
    fn non_http_persisted_url_is_not_linked() {
        let created = Utc.with_ymd_and_hms(2025, 9, 19, 8, 0, 0).unwrap();
        let mut project = Project::with_id(ProjectId::from("p1"), "P", created);
        project
            .links
            .push(Link::new("javascript:alert(1)", "bad", created));

        let html = render_projects(&[project], None);
        assert!(!html.contains("href=\"javascript"));
        assert!(html.contains("link-unsafe"));
    }

    #[test]
    fn app_dates_render_in_short_english_form() {
        assert_eq!(
            display_date("2025-09-19T08:52:40.000Z"),
            "Sep 19, 2025, 08:52 AM UTC"
        );
        assert_eq!(display_date("soon"), "soon");
    }
}
