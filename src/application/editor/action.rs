//! The publish action offered by the editor's primary button.

use serde::{Deserialize, Serialize};

/// What pressing the primary editor button currently does.
///
/// Derived from the post's lifecycle facts, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishAction {
    Save,
    SaveAsDraft,
    Schedule,
    Publish,
    PublishNow,
    Update,
    SubmitForReview,
}

impl PublishAction {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            PublishAction::Save => "Save",
            PublishAction::SaveAsDraft => "Save as Draft",
            PublishAction::Schedule => "Schedule",
            PublishAction::Publish => "Publish",
            PublishAction::PublishNow => "Publish Now",
            PublishAction::Update => "Update",
            PublishAction::SubmitForReview => "Submit for Review",
        }
    }

    /// Progress text shown while the action is running.
    pub fn in_progress_label(self) -> &'static str {
        match self {
            PublishAction::Save | PublishAction::SaveAsDraft => "Saving...",
            PublishAction::Schedule => "Scheduling...",
            PublishAction::Publish | PublishAction::PublishNow => "Publishing...",
            PublishAction::Update => "Updating...",
            PublishAction::SubmitForReview => "Submitting for Review...",
        }
    }

    /// Notice text shown when the action fails.
    pub fn error_label(self) -> &'static str {
        match self {
            PublishAction::Save | PublishAction::SaveAsDraft => "Error occurred during saving",
            PublishAction::Schedule => "Error occurred during scheduling",
            PublishAction::Publish | PublishAction::PublishNow => {
                "Error occurred during publishing"
            }
            PublishAction::Update => "Error occurred during updating",
            PublishAction::SubmitForReview => "Error occurred during submission for review",
        }
    }

    /// Confirmation question asked before the action runs.
    pub fn confirmation_prompt(self) -> &'static str {
        match self {
            PublishAction::Save | PublishAction::SaveAsDraft => "Save draft?",
            PublishAction::Schedule => "Schedule your post?",
            PublishAction::Publish | PublishAction::PublishNow => "Are you sure you want to publish?",
            PublishAction::Update => "Update your post?",
            PublishAction::SubmitForReview => "Submit for review?",
        }
    }

    /// Analytics event tag recorded when the action completes.
    pub fn analytics_stat(self) -> &'static str {
        match self {
            PublishAction::Save => "editor_saved_draft",
            PublishAction::SaveAsDraft => "editor_quick_saved_draft",
            PublishAction::Schedule => "editor_scheduled_post",
            PublishAction::Publish => "editor_published_post",
            PublishAction::PublishNow => "editor_quick_published_post",
            PublishAction::Update => "editor_updated_post",
            PublishAction::SubmitForReview => "editor_submitted_for_review",
        }
    }

    /// Whether completing the action closes the editor.
    ///
    /// These are the publish-like actions: they hand the change to the
    /// uploader and dismiss, instead of keeping the session open.
    pub fn dismisses_editor(self) -> bool {
        matches!(
            self,
            PublishAction::Publish | PublishAction::PublishNow | PublishAction::Schedule
        )
    }

    /// The quick action offered next to the primary button, if any.
    pub fn secondary(self) -> Option<PublishAction> {
        match self {
            PublishAction::Publish => Some(PublishAction::SaveAsDraft),
            PublishAction::Update => Some(PublishAction::PublishNow),
            _ => None,
        }
    }
}
