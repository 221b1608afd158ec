//! Shared lifecycle enumerations aligned with the backend's wire strings.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Where a post currently sits in its lifecycle.
///
/// Wire strings follow the backend REST API, which is why `Scheduled`
/// serializes as `future`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "future")]
    Scheduled,
    #[serde(rename = "private")]
    PublishPrivate,
    #[serde(rename = "publish")]
    Publish,
    #[serde(rename = "trash")]
    Trash,
    /// Returned by the backend when a post was permanently deleted.
    #[serde(rename = "deleted")]
    Deleted,
}

impl PostStatus {
    pub const ALL: [PostStatus; 7] = [
        PostStatus::Draft,
        PostStatus::Pending,
        PostStatus::Scheduled,
        PostStatus::PublishPrivate,
        PostStatus::Publish,
        PostStatus::Trash,
        PostStatus::Deleted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Scheduled => "future",
            PostStatus::PublishPrivate => "private",
            PostStatus::Publish => "publish",
            PostStatus::Trash => "trash",
            PostStatus::Deleted => "deleted",
        }
    }

    /// Human display title used by list rows and pickers.
    pub fn title(self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Pending => "Pending review",
            PostStatus::Scheduled => "Scheduled",
            PostStatus::PublishPrivate => "Private",
            PostStatus::Publish => "Published",
            PostStatus::Trash => "Trashed",
            PostStatus::Deleted => "Deleted",
        }
    }
}

impl TryFrom<&str> for PostStatus {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "draft" => Ok(PostStatus::Draft),
            "pending" => Ok(PostStatus::Pending),
            "future" => Ok(PostStatus::Scheduled),
            "private" => Ok(PostStatus::PublishPrivate),
            "publish" => Ok(PostStatus::Publish),
            "trash" => Ok(PostStatus::Trash),
            "deleted" => Ok(PostStatus::Deleted),
            other => Err(DomainError::unknown_status(other)),
        }
    }
}

/// Which kind of content the editor session is working on.
///
/// Only used to pick the noun in user-facing notice copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Post,
    Page,
}

impl EntityKind {
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Post => "post",
            EntityKind::Page => "page",
        }
    }

    pub fn noun_title(self) -> &'static str {
        match self {
            EntityKind::Post => "Post",
            EntityKind::Page => "Page",
        }
    }
}

/// How many automatic upload retries have already been made for the current
/// revision's pending change.
///
/// Advances strictly `NotAttempted -> Attempted -> ReachedLimit`, driven by
/// the external retry tracker. This crate only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoUploadAttemptState {
    NotAttempted,
    Attempted,
    ReachedLimit,
}

/// What the surrounding retry policy intends to do next with the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoUploadAction {
    /// The change will be re-uploaded as-is.
    Upload,
    /// Only a local autosave will be taken; nothing reaches the backend.
    AutoSave,
    /// No further automatic action.
    Nothing,
}

impl AutoUploadAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AutoUploadAction::Upload => "upload",
            AutoUploadAction::AutoSave => "auto_save",
            AutoUploadAction::Nothing => "nothing",
        }
    }
}

impl TryFrom<&str> for AutoUploadAction {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "upload" => Ok(AutoUploadAction::Upload),
            "auto_save" => Ok(AutoUploadAction::AutoSave),
            "nothing" => Ok(AutoUploadAction::Nothing),
            other => Err(DomainError::unknown_auto_upload_action(other)),
        }
    }
}
