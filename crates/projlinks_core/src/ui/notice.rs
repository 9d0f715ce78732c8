//! Transient notices with auto-hide deadlines.
//!
//! There is one notice slot. Showing a notice replaces whatever is displayed
//! and restarts the countdown; nothing queues.

use crate::model::timestamp::Timestamp;
use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success-message",
            Self::Warning => "warning-message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub hide_at: Timestamp,
}

#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
}

impl NoticeBoard {
    /// Replaces the current notice. A deadline past the representable range
    /// saturates, so such a notice never hides.
    pub fn show(
        &mut self,
        kind: NoticeKind,
        text: impl Into<String>,
        now: Timestamp,
        duration: TimeDelta,
    ) {
        self.current = Some(Notice {
            kind,
            text: text.into(),
            hide_at: now
                .checked_add_signed(duration)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
    }

    /// The notice on screen at `now`, if its deadline has not passed.
    pub fn visible(&self, now: Timestamp) -> Option<&Notice> {
        self.current.as_ref().filter(|notice| now < notice.hide_at)
    }

    /// Drops an expired notice. Returns whether one was dropped.
    pub fn expire(&mut self, now: Timestamp) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|notice| now >= notice.hide_at);
        if expired {
            self.current = None;
        }
        expired
    }
}
