//! Drag-and-drop protocol and drop payload extraction.
//!
//! # Invariants
//! - Every drag event anywhere in the document has its default handling
//!   suppressed, so a stray drop never navigates away.
//! - Only the drop zone reacts to enter/over/leave/drop.
//! - URL extraction prefers `text/uri-list`, then `text/plain`, then the
//!   legacy `URL` representation, and keeps only the first entry.

use crate::model::url_rules::is_valid_url;

/// Where a drag event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Document,
    DropZone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    /// `to_inside_zone` is true when the pointer moved to a descendant of the
    /// zone rather than out of it.
    Leave { to_inside_zone: bool },
    Drop(DragPayload),
}

/// A file carried by a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub mime_type: String,
}

/// The representations a platform drag payload may carry.
///
/// Empty strings are treated the same as missing representations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragPayload {
    pub uri_list: Option<String>,
    pub text_plain: Option<String>,
    pub legacy_url: Option<String>,
    pub files: Vec<DroppedFile>,
}

impl DragPayload {
    pub fn from_uri_list(value: impl Into<String>) -> Self {
        Self {
            uri_list: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn from_text(value: impl Into<String>) -> Self {
        Self {
            text_plain: Some(value.into()),
            ..Self::default()
        }
    }
}

/// What a drop produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropExtraction {
    /// A valid http(s) URL.
    Url(String),
    /// Only files were dropped; there is no URL representation.
    FilesUnsupported,
    /// Empty, malformed, or non-http(s) content.
    Invalid,
}

/// Extracts the dropped URL following the representation priority order.
pub fn extract_dropped_url(payload: &DragPayload) -> DropExtraction {
    let raw = [&payload.uri_list, &payload.text_plain, &payload.legacy_url]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty());

    let first_entry = raw
        .and_then(|value| value.split(['\n', '\t']).next())
        .map(str::trim)
        .unwrap_or_default();

    if first_entry.is_empty() {
        if payload.files.is_empty() {
            return DropExtraction::Invalid;
        }
        return DropExtraction::FilesUnsupported;
    }
    if is_valid_url(first_entry) {
        DropExtraction::Url(first_entry.to_string())
    } else {
        DropExtraction::Invalid
    }
}

/// Visual state of the drop zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropZoneState {
    pub drag_over: bool,
}

impl DropZoneState {
    /// Applies a non-drop drag event. `active` is whether a project is
    /// selected.
    pub fn on_drag(&mut self, target: DragTarget, phase: &DragPhase, active: bool) {
        if target != DragTarget::DropZone {
            return;
        }
        match phase {
            DragPhase::Enter | DragPhase::Over => {
                if active {
                    self.drag_over = true;
                }
            }
            DragPhase::Leave { to_inside_zone } => {
                if !to_inside_zone {
                    self.drag_over = false;
                }
            }
            DragPhase::Drop(_) => self.drag_over = false,
        }
    }
}
