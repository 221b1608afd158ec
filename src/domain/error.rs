use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("unknown post status `{value}`")]
    UnknownStatus { value: String },
    #[error("unknown auto-upload action `{value}`")]
    UnknownAutoUploadAction { value: String },
}

impl DomainError {
    pub fn unknown_status(value: impl Into<String>) -> Self {
        Self::UnknownStatus {
            value: value.into(),
        }
    }

    pub fn unknown_auto_upload_action(value: impl Into<String>) -> Self {
        Self::UnknownAutoUploadAction {
            value: value.into(),
        }
    }
}
