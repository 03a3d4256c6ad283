use thiserror::Error;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HrError {
    #[error("unknown page {0}")]
    UnknownPage(String),
    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
    #[error("{kind} {id} not found")]
    RecordNotFound { kind: &'static str, id: String },
    #[error("leave request {0} has already been decided")]
    AlreadyDecided(String),
    #[error("profile is not in edit mode")]
    NotEditing,
    #[error("field {0} is read-only")]
    ReadOnlyField(String),
    #[error("{0}")]
    Validation(String),
    #[error("failed to render page: {0}")]
    Render(String),
}

impl HrError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            kind,
            id: id.into(),
        }
    }

    /// True for lookups that failed because nothing matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownPage(_) | Self::RecordNotFound { .. })
    }
}
