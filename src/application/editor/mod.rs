//! Editor publish-state machine.
//!
//! One instance lives for one editor session. It projects the post's
//! lifecycle facts into the action the primary button performs and whether
//! that button is enabled right now. It owns no I/O and never mutates the
//! post itself; the hosting editor feeds it [`EditorEvent`]s and reads the
//! derived state back.

mod action;

pub use action::PublishAction;

use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::domain::types::PostStatus;

/// Publish dates less than this far ahead of now count as "now".
///
/// Matches the scheduling skew the editor UI applies, so a post dated a few
/// seconds ahead is not treated as a scheduled post.
const FUTURE_DATE_SKEW: Duration = Duration::minutes(1);

/// A fact about the editor session that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The post's lifecycle status was changed.
    StatusChanged(PostStatus),
    /// The post's publish date was set or cleared.
    PublishDateChanged(Option<OffsetDateTime>),
    /// Whether the post has any content.
    ContentChanged(bool),
    /// Whether the revision holds unsaved changes.
    ChangesChanged(bool),
    /// Whether an upload of the post is currently in flight.
    PublishingChanged(bool),
    /// Whether media attached to the post is currently uploading.
    MediaUploadChanged(bool),
}

/// A derived value that flipped as the result of an [`EditorEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// The primary button now performs a different action.
    Action(PublishAction),
    /// The primary button's enablement flipped.
    ActionAllowed(bool),
}

/// Projects a post's lifecycle facts into the current publish action and
/// button enablement.
///
/// Single-writer: the instance is owned by one editor session and must be
/// mutated from one place at a time. Observer callbacks run synchronously
/// after the triggering event has fully settled, and only when the derived
/// value actually changed. `apply` holds `&mut self` for the whole event,
/// including callbacks, so a callback cannot re-enter the machine; queue
/// follow-up events in the host instead.
pub struct PublishStateMachine {
    original_status: Option<PostStatus>,
    current_status: Option<PostStatus>,
    user_can_publish: bool,
    publish_date: Option<OffsetDateTime>,
    has_content: bool,
    has_changes: bool,
    is_publishing: bool,
    is_uploading_media: bool,
    action: PublishAction,
    action_allowed: bool,
    observer: Option<Box<dyn FnMut(StateChange)>>,
}

impl PublishStateMachine {
    /// Creates the machine for one editor session.
    ///
    /// `original_status` is the status the post had before this session;
    /// `None` means a brand-new post. `user_can_publish` is fixed for the
    /// session.
    pub fn new(
        original_status: Option<PostStatus>,
        user_can_publish: bool,
        publish_date: Option<OffsetDateTime>,
    ) -> Self {
        let action = match original_status {
            None => PublishAction::Publish,
            Some(PostStatus::Draft) if !user_can_publish => PublishAction::SubmitForReview,
            Some(_) => PublishAction::Update,
        };

        Self {
            original_status,
            current_status: original_status,
            user_can_publish,
            publish_date,
            has_content: false,
            has_changes: false,
            is_publishing: false,
            is_uploading_media: false,
            action,
            action_allowed: false,
            observer: None,
        }
    }

    /// Registers the callback notified when a derived value flips.
    ///
    /// Replaces any previous observer. The callback is invoked inline from
    /// [`apply`](Self::apply) once the new state has settled.
    pub fn set_observer(&mut self, observer: impl FnMut(StateChange) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Applies one session event and notifies the observer of any flips.
    pub fn apply(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::StatusChanged(status) => {
                self.current_status = Some(status);
                let action = derive_action(status, self.original_status, self.user_can_publish);
                self.set_action(action);
            }
            EditorEvent::PublishDateChanged(date) => {
                self.publish_date = date;
            }
            EditorEvent::ContentChanged(value) => self.has_content = value,
            EditorEvent::ChangesChanged(value) => self.has_changes = value,
            EditorEvent::PublishingChanged(value) => self.is_publishing = value,
            EditorEvent::MediaUploadChanged(value) => self.is_uploading_media = value,
        }

        self.refresh_enablement();
    }

    /// The action the primary button currently performs.
    pub fn action(&self) -> PublishAction {
        self.action
    }

    /// Label for the primary button.
    pub fn publish_button_label(&self) -> &'static str {
        self.action.label()
    }

    /// Progress text for the in-flight action.
    pub fn publish_verb_label(&self) -> &'static str {
        self.action.in_progress_label()
    }

    /// Whether the primary button is currently enabled.
    pub fn is_publish_button_enabled(&self) -> bool {
        self.action_allowed
    }

    /// The quick action offered next to the primary button, when shown.
    pub fn secondary_action(&self) -> Option<PublishAction> {
        self.action.secondary()
    }

    /// Whether the secondary quick action should be offered at all.
    ///
    /// Suppressed for empty posts, for updates to already-live content, and
    /// for future-dated drafts (where "Publish Now" would contradict the
    /// chosen date).
    pub fn is_secondary_action_shown(&self) -> bool {
        if !self.has_content {
            return false;
        }

        let already_live = matches!(
            self.current_status,
            Some(PostStatus::Publish | PostStatus::PublishPrivate | PostStatus::Scheduled)
        );
        if self.action == PublishAction::Update && already_live {
            return false;
        }

        if self.is_future_dated_draft() {
            return false;
        }

        self.action.secondary().is_some()
    }

    /// Status as last observed, `None` until the first status event for a
    /// brand-new post.
    pub fn current_status(&self) -> Option<PostStatus> {
        self.current_status
    }

    pub fn original_status(&self) -> Option<PostStatus> {
        self.original_status
    }

    pub fn user_can_publish(&self) -> bool {
        self.user_can_publish
    }

    fn is_future_dated_draft(&self) -> bool {
        self.current_status == Some(PostStatus::Draft)
            && self
                .publish_date
                .is_some_and(|date| date > OffsetDateTime::now_utc() + FUTURE_DATE_SKEW)
    }

    fn set_action(&mut self, action: PublishAction) {
        if action == self.action {
            return;
        }

        debug!(
            target = "application::editor",
            from = ?self.action,
            to = ?action,
            "publish action changed"
        );

        self.action = action;
        self.notify(StateChange::Action(action));
    }

    fn refresh_enablement(&mut self) {
        let allowed = self.has_content
            && self.has_changes
            && !self.is_publishing
            && (self.action.dismisses_editor() || !self.is_uploading_media);

        if allowed == self.action_allowed {
            return;
        }

        debug!(
            target = "application::editor",
            allowed, "publish action enablement changed"
        );

        self.action_allowed = allowed;
        self.notify(StateChange::ActionAllowed(allowed));
    }

    fn notify(&mut self, change: StateChange) {
        if let Some(observer) = self.observer.as_mut() {
            observer(change);
        }
    }
}

/// The status-to-action decision table.
///
/// A post earns a publish-like action only the first time it leaves draft;
/// afterwards the button always reads "Update". Users without publish
/// capability are routed to "Submit for Review" wherever a save or publish
/// would otherwise be offered. Trashed and deleted posts fall back to
/// "Save" so the editor never dead-ends.
fn derive_action(
    status: PostStatus,
    original_status: Option<PostStatus>,
    user_can_publish: bool,
) -> PublishAction {
    let first_publish = matches!(original_status, None | Some(PostStatus::Draft));

    match status {
        PostStatus::Draft if original_status.is_some_and(|s| s != PostStatus::Draft) => {
            PublishAction::Update
        }
        PostStatus::Draft | PostStatus::Pending => {
            if user_can_publish {
                PublishAction::Save
            } else {
                PublishAction::SubmitForReview
            }
        }
        PostStatus::Publish | PostStatus::PublishPrivate if first_publish => {
            if user_can_publish {
                PublishAction::Publish
            } else {
                PublishAction::SubmitForReview
            }
        }
        PostStatus::Publish | PostStatus::PublishPrivate => PublishAction::Update,
        PostStatus::Scheduled if first_publish => {
            if user_can_publish {
                PublishAction::Schedule
            } else {
                PublishAction::SubmitForReview
            }
        }
        PostStatus::Scheduled => PublishAction::Update,
        PostStatus::Trash | PostStatus::Deleted => PublishAction::Save,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_offers_publish() {
        let machine = PublishStateMachine::new(None, true, None);
        assert_eq!(machine.action(), PublishAction::Publish);
    }

    #[test]
    fn contributor_draft_offers_submit_for_review() {
        let machine = PublishStateMachine::new(Some(PostStatus::Draft), false, None);
        assert_eq!(machine.action(), PublishAction::SubmitForReview);
    }

    #[test]
    fn existing_post_offers_update() {
        for status in [
            PostStatus::Publish,
            PostStatus::PublishPrivate,
            PostStatus::Scheduled,
            PostStatus::Pending,
        ] {
            let machine = PublishStateMachine::new(Some(status), true, None);
            assert_eq!(machine.action(), PublishAction::Update, "{status:?}");
        }
    }

    #[test]
    fn derive_action_is_total() {
        let originals = std::iter::once(None).chain(PostStatus::ALL.into_iter().map(Some));
        for original in originals {
            for status in PostStatus::ALL {
                for can_publish in [false, true] {
                    // Must not panic for any combination.
                    let _ = derive_action(status, original, can_publish);
                }
            }
        }
    }

    #[test]
    fn first_publish_requires_capability() {
        for status in [
            PostStatus::Publish,
            PostStatus::PublishPrivate,
            PostStatus::Scheduled,
        ] {
            let expected = if status == PostStatus::Scheduled {
                PublishAction::Schedule
            } else {
                PublishAction::Publish
            };
            assert_eq!(derive_action(status, None, true), expected);
            assert_eq!(derive_action(status, Some(PostStatus::Draft), true), expected);
            assert_eq!(
                derive_action(status, None, false),
                PublishAction::SubmitForReview
            );
            assert_eq!(
                derive_action(status, Some(PostStatus::Draft), false),
                PublishAction::SubmitForReview
            );
        }
    }

    #[test]
    fn republishing_live_content_is_an_update() {
        for original in [
            PostStatus::Publish,
            PostStatus::PublishPrivate,
            PostStatus::Scheduled,
            PostStatus::Pending,
        ] {
            for status in [
                PostStatus::Publish,
                PostStatus::PublishPrivate,
                PostStatus::Scheduled,
            ] {
                assert_eq!(
                    derive_action(status, Some(original), true),
                    PublishAction::Update,
                    "{original:?} -> {status:?}"
                );
            }
        }
    }

    #[test]
    fn returning_to_draft_after_publish_is_an_update() {
        assert_eq!(
            derive_action(PostStatus::Draft, Some(PostStatus::Publish), true),
            PublishAction::Update
        );
        assert_eq!(
            derive_action(PostStatus::Draft, Some(PostStatus::Scheduled), true),
            PublishAction::Update
        );
    }

    #[test]
    fn drafts_and_pending_save() {
        assert_eq!(derive_action(PostStatus::Draft, None, true), PublishAction::Save);
        assert_eq!(
            derive_action(PostStatus::Draft, Some(PostStatus::Draft), true),
            PublishAction::Save
        );
        assert_eq!(
            derive_action(PostStatus::Pending, Some(PostStatus::Publish), true),
            PublishAction::Save
        );
    }

    #[test]
    fn contributor_draft_stays_submit_for_review_after_status_event() {
        let mut machine = PublishStateMachine::new(Some(PostStatus::Draft), false, None);
        assert_eq!(machine.action(), PublishAction::SubmitForReview);

        machine.apply(EditorEvent::StatusChanged(PostStatus::Draft));
        assert_eq!(machine.action(), PublishAction::SubmitForReview);
    }

    #[test]
    fn trashed_and_deleted_fall_back_to_save() {
        for original in std::iter::once(None).chain(PostStatus::ALL.into_iter().map(Some)) {
            for can_publish in [false, true] {
                assert_eq!(
                    derive_action(PostStatus::Trash, original, can_publish),
                    PublishAction::Save
                );
                assert_eq!(
                    derive_action(PostStatus::Deleted, original, can_publish),
                    PublishAction::Save
                );
            }
        }
    }
}
