//! Transient user notifications.
//!
//! Mutations record a success or failure notice; the front end drains and
//! shows them, then they are gone. Nothing here is persisted.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Accumulator for pending notices.
#[derive(Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
}

impl Notices {
    /// Record a success notice.
    pub fn success(&mut self, text: impl Into<String>) {
        self.items.push(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        });
    }

    /// Record an error notice.
    pub fn error(&mut self, text: impl Into<String>) {
        self.items.push(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        });
    }

    /// Drain all pending notices, oldest first.
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.items)
    }

    /// Peek at pending notices without draining.
    #[must_use]
    pub fn pending(&self) -> &[Notice] {
        &self.items
    }
}
