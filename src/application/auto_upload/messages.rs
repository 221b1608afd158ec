//! Canned notice copy for auto-upload outcomes.
//!
//! One catalog serves both posts and pages; the entity kind only selects
//! the noun. Every function here returns a member of the fixed catalog,
//! never ad-hoc text.

use crate::domain::types::{EntityKind, PostStatus};

/// Generic notice for failures that carry no retry framing.
pub(super) fn generic_failure(kind: EntityKind) -> String {
    format!("{} failed to upload", kind.noun_title())
}

/// "We'll do X when your device is back online."
pub(super) fn will_upload_when_online(status: PostStatus, kind: EntityKind) -> String {
    let noun = kind.noun();
    match status {
        PostStatus::Draft => {
            "We'll save your draft when your device is back online.".to_string()
        }
        PostStatus::PublishPrivate => {
            format!("We'll publish your private {noun} when your device is back online.")
        }
        PostStatus::Scheduled => {
            format!("We'll schedule your {noun} when your device is back online.")
        }
        PostStatus::Publish => {
            format!("We'll publish the {noun} when your device is back online.")
        }
        PostStatus::Pending | PostStatus::Trash | PostStatus::Deleted => {
            format!("We'll submit your {noun} for review when your device is back online.")
        }
    }
}

/// "We couldn't X, but we'll try again later."
pub(super) fn retrying_after_failure(status: PostStatus, kind: EntityKind) -> String {
    let noun = kind.noun();
    match status {
        PostStatus::Draft => {
            "We couldn't save your draft, but we'll try again later.".to_string()
        }
        PostStatus::PublishPrivate => {
            format!("We couldn't publish your private {noun}, but we'll try again later.")
        }
        PostStatus::Scheduled => {
            format!("We couldn't schedule your {noun}, but we'll try again later.")
        }
        PostStatus::Publish => {
            format!("We couldn't publish the {noun}, but we'll try again later.")
        }
        PostStatus::Pending | PostStatus::Trash | PostStatus::Deleted => {
            format!("We couldn't submit your {noun} for review, but we'll try again later.")
        }
    }
}

/// Terminal "we couldn't complete this action, and didn't X."
pub(super) fn gave_up(status: PostStatus, kind: EntityKind) -> String {
    let noun = kind.noun();
    match status {
        PostStatus::Draft => {
            "We couldn't complete this action, and didn't save your draft.".to_string()
        }
        PostStatus::PublishPrivate => {
            format!("We couldn't complete this action, and didn't publish your private {noun}.")
        }
        PostStatus::Scheduled => {
            format!("We couldn't complete this action, and didn't schedule your {noun}.")
        }
        PostStatus::Publish => {
            format!("We couldn't complete this action, and didn't publish the {noun}.")
        }
        PostStatus::Pending | PostStatus::Trash | PostStatus::Deleted => {
            format!("We couldn't complete this action, and didn't submit your {noun} for review.")
        }
    }
}

/// Terminal failed-media variant.
pub(super) fn failed_media(status: PostStatus, kind: EntityKind) -> String {
    let noun = kind.noun();
    match status {
        PostStatus::Publish => {
            format!("We couldn't upload this media, and didn't publish the {noun}.")
        }
        PostStatus::PublishPrivate => {
            format!("We couldn't upload this media, and didn't publish this private {noun}.")
        }
        PostStatus::Scheduled => {
            format!("We couldn't upload this media, and didn't schedule this {noun}.")
        }
        PostStatus::Pending => {
            format!("We couldn't upload this media, and didn't submit this {noun} for review.")
        }
        PostStatus::Draft | PostStatus::Trash | PostStatus::Deleted => {
            "We couldn't upload this media.".to_string()
        }
    }
}

/// Shown when the user cancels a pending auto-upload themselves.
pub(super) fn cancel(status: PostStatus) -> &'static str {
    match status {
        PostStatus::Publish | PostStatus::PublishPrivate => "We won't publish these changes.",
        PostStatus::Scheduled => "We won't schedule these changes.",
        PostStatus::Draft => "We won't save the latest changes to your draft.",
        PostStatus::Pending | PostStatus::Trash | PostStatus::Deleted => {
            "We won't submit these changes for review."
        }
    }
}
