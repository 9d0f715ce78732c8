//! Interaction layer: selection, modals, drag-and-drop, notices, markup.
//!
//! # Responsibility
//! - Turn host events into store calls and keep view state consistent.
//! - Render the full view from explicit state after every event.
//!
//! # Invariants
//! - The drop zone and add-link affordance act only while a known project
//!   is selected.
//! - Interactive markup carries entity ids in `data-*` attributes; there is
//!   no global lookup.

pub mod controller;
pub mod drag_drop;
pub mod event;
pub mod modal;
pub mod notice;
pub mod render;
pub mod selection;
