//! Publish-state decision engine for blogging-client editors.
//!
//! Two cooperating cores, both pure and synchronous:
//!
//! - [`application::editor::PublishStateMachine`] projects a post's
//!   lifecycle facts into the action the editor's primary button performs
//!   and whether that button is enabled;
//! - [`application::auto_upload`] selects the user-facing notice shown when
//!   a background upload attempt concludes, keeping the copy consistent
//!   with connectivity and how many retries remain.
//!
//! Persistence, networking, rendering, and media upload mechanics are the
//! hosting app's business; this crate only consumes read-only lifecycle
//! facts and emits actions, booleans, and notice text.

pub mod application;
pub mod domain;

pub use application::auto_upload::{FailureMessage, cancel_message, failure_message};
pub use application::editor::{EditorEvent, PublishAction, PublishStateMachine, StateChange};
pub use domain::error::DomainError;
pub use domain::types::{
    AutoUploadAction, AutoUploadAttemptState, EntityKind, PostStatus,
};
