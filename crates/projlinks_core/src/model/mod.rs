//! Domain model for projects and their links.
//!
//! # Responsibility
//! - Define the persisted shapes of `Project` and `Link`.
//! - Own the URL rules shared by every input path (drop, modal, edit).
//!
//! # Invariants
//! - Entity ids are assigned once and never change.
//! - A project exclusively owns its links; deleting it drops them all.

pub mod id;
pub mod link;
pub mod project;
pub mod timestamp;
pub mod url_rules;
