//! Demonstration projects seeded into empty storage.

use crate::model::id::{LinkId, ProjectId};
use crate::model::link::Link;
use crate::model::project::Project;
use crate::model::timestamp::Timestamp;

const DEMO_PROJECTS: &[(&str, &str, &[(&str, &str, &str)])] = &[
    (
        "demo1",
        "Web Development Resources",
        &[
            (
                "link1",
                "https://developer.mozilla.org/en-US/docs/Web",
                "MDN Web Docs",
            ),
            ("link2", "https://stackoverflow.com", "Stack Overflow"),
            ("link3", "https://github.com", "GitHub"),
        ],
    ),
    (
        "demo2",
        "Design Inspiration",
        &[
            ("link4", "https://dribbble.com", "Dribbble"),
            ("link5", "https://behance.net", "Behance"),
            ("link6", "https://awwwards.com", "Awwwards"),
        ],
    ),
];

/// Builds the fixed demo projects, all stamped with `now`.
pub fn demo_projects(now: Timestamp) -> Vec<Project> {
    DEMO_PROJECTS
        .iter()
        .map(|(id, name, links)| {
            let mut project = Project::with_id(ProjectId::from(*id), *name, now);
            project.links = links
                .iter()
                .map(|(link_id, url, title)| Link::with_id(LinkId::from(*link_id), *url, *title, now))
                .collect();
            project
        })
        .collect()
}
