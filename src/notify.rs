//! Transient Notifications

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast shown at the top of the page until it expires or is clicked away
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Assigned by the store when pushed
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { id: 0, kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { id: 0, kind: NoticeKind::Error, text: text.into() }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice success",
            NoticeKind::Error => "notice error",
        }
    }
}
