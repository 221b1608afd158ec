//! Auto-upload failure classification.
//!
//! When an upload attempt concludes, the hosting app asks this module which
//! notice to show. The answer is pure text plus a finality bit; retry
//! scheduling itself lives in the external retry tracker. The classifier
//! never mutates anything and is total over all its enum inputs, so the
//! displayed copy can never fall out of the fixed catalog.

mod messages;

use serde::{Deserialize, Serialize};

use crate::domain::types::{AutoUploadAction, AutoUploadAttemptState, EntityKind, PostStatus};

/// The user-facing outcome of a concluded upload attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureMessage {
    /// Notice copy to display.
    pub text: String,
    /// True when no further automatic retry will be attempted.
    pub is_final: bool,
}

impl FailureMessage {
    fn terminal(text: String) -> Self {
        Self {
            text,
            is_final: true,
        }
    }

    fn retrying(text: String) -> Self {
        Self {
            text,
            is_final: false,
        }
    }
}

/// Selects the notice for a concluded upload attempt.
///
/// Decision order matters and short-circuits:
/// 1. online failures are surfaced immediately with no retry framing;
/// 2. offline, the attempt state picks the tier: a promise to upload once
///    back online, a "we'll try again later" after a failed retry, or
///    terminal copy once the retry limit is reached (with a failed-media
///    variant);
/// 3. within a tier the post status picks the verb, and any intended
///    follow-up other than an upload suppresses retry framing entirely.
pub fn failure_message(
    status: PostStatus,
    kind: EntityKind,
    is_internet_reachable: bool,
    attempt_state: AutoUploadAttemptState,
    auto_upload_action: AutoUploadAction,
    has_failed_media: bool,
) -> FailureMessage {
    if is_internet_reachable {
        return FailureMessage::terminal(messages::generic_failure(kind));
    }

    match attempt_state {
        AutoUploadAttemptState::NotAttempted => {
            if auto_upload_action != AutoUploadAction::Upload {
                return FailureMessage::terminal(messages::generic_failure(kind));
            }
            FailureMessage::retrying(messages::will_upload_when_online(status, kind))
        }
        AutoUploadAttemptState::Attempted => {
            if auto_upload_action != AutoUploadAction::Upload {
                return FailureMessage::terminal(messages::generic_failure(kind));
            }
            FailureMessage::retrying(messages::retrying_after_failure(status, kind))
        }
        AutoUploadAttemptState::ReachedLimit => {
            if has_failed_media {
                FailureMessage::terminal(messages::failed_media(status, kind))
            } else {
                FailureMessage::terminal(messages::gave_up(status, kind))
            }
        }
    }
}

/// Notice shown when the user explicitly cancels a pending auto-upload.
pub fn cancel_message(status: PostStatus) -> &'static str {
    messages::cancel(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_failures_skip_retry_framing() {
        for attempt in [
            AutoUploadAttemptState::NotAttempted,
            AutoUploadAttemptState::Attempted,
            AutoUploadAttemptState::ReachedLimit,
        ] {
            let message = failure_message(
                PostStatus::Publish,
                EntityKind::Post,
                true,
                attempt,
                AutoUploadAction::Upload,
                false,
            );
            assert_eq!(message.text, "Post failed to upload");
            assert!(message.is_final);
        }
    }

    #[test]
    fn non_upload_follow_up_gets_generic_notice() {
        for attempt in [
            AutoUploadAttemptState::NotAttempted,
            AutoUploadAttemptState::Attempted,
        ] {
            for action in [AutoUploadAction::AutoSave, AutoUploadAction::Nothing] {
                let message = failure_message(
                    PostStatus::Draft,
                    EntityKind::Page,
                    false,
                    attempt,
                    action,
                    false,
                );
                assert_eq!(message.text, "Page failed to upload");
                assert!(message.is_final);
            }
        }
    }

    #[test]
    fn failed_media_wins_at_the_retry_limit() {
        let message = failure_message(
            PostStatus::Publish,
            EntityKind::Post,
            false,
            AutoUploadAttemptState::ReachedLimit,
            AutoUploadAction::Upload,
            true,
        );
        assert_eq!(
            message.text,
            "We couldn't upload this media, and didn't publish the post."
        );
        assert!(message.is_final);
    }

    #[test]
    fn cancel_copy_by_status() {
        assert_eq!(
            cancel_message(PostStatus::Publish),
            "We won't publish these changes."
        );
        assert_eq!(
            cancel_message(PostStatus::PublishPrivate),
            "We won't publish these changes."
        );
        assert_eq!(
            cancel_message(PostStatus::Scheduled),
            "We won't schedule these changes."
        );
        assert_eq!(
            cancel_message(PostStatus::Draft),
            "We won't save the latest changes to your draft."
        );
        assert_eq!(
            cancel_message(PostStatus::Pending),
            "We won't submit these changes for review."
        );
    }
}
