use tokio::sync::watch;
use validator::Validate;

use crate::{ContactDraft, FALLBACK_MESSAGE, Field, REQUIRED_FIELDS_MESSAGE, SubmitTransport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Message shown under the form after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == FeedbackKind::Success
    }
}

/// Which branch a [`FormCollector::submit`] call took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A required field was empty, the transport was not called.
    Invalid,
    /// The handler stored the submission.
    Accepted,
    /// The handler answered with a failure envelope.
    Rejected,
    /// No envelope could be obtained from the handler.
    Failed,
}

/// Restores [`Status::Idle`] when dropped, so the flag is cleared on every
/// exit path of a submit, including unwinding and cancellation.
struct SubmittingGuard<'a>(&'a watch::Sender<Status>);

impl<'a> SubmittingGuard<'a> {
    fn enter(status: &'a watch::Sender<Status>) -> Self {
        status.send_replace(Status::Submitting);
        Self(status)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(Status::Idle);
    }
}

/// Client side of the pipeline: owns the draft and the feedback state and
/// dispatches completed drafts through a [`SubmitTransport`].
///
/// `submit` borrows the collector mutably, which rules out a second submit
/// while one is in flight.
pub struct FormCollector<T> {
    transport: T,
    draft: ContactDraft,
    status: watch::Sender<Status>,
    feedback: Option<Feedback>,
}

impl<T: SubmitTransport> FormCollector<T> {
    pub fn new(transport: T) -> Self {
        Self::with_draft(transport, ContactDraft::default())
    }

    pub fn with_draft(transport: T, draft: ContactDraft) -> Self {
        Self {
            transport,
            draft,
            status: watch::Sender::new(Status::Idle),
            feedback: None,
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn status(&self) -> Status {
        *self.status.borrow()
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == Status::Submitting
    }

    /// Receives every status transition, e.g. to disable a submit button.
    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.status.subscribe()
    }

    pub async fn submit(&mut self) -> Outcome {
        if self.draft.validate().is_err() {
            tracing::debug!("contact form incomplete, nothing sent");
            self.feedback = Some(Feedback::error(REQUIRED_FIELDS_MESSAGE));

            return Outcome::Invalid;
        }

        self.feedback = None;
        let submission = self.draft.to_submission();

        let response = {
            let _guard = SubmittingGuard::enter(&self.status);
            self.transport.send(&submission).await
        };

        match response {
            Ok(result) if result.success => {
                self.feedback = Some(Feedback::success(result.message));
                self.draft = ContactDraft::default();

                Outcome::Accepted
            }
            Ok(result) => {
                self.feedback = Some(Feedback::error(result.message));

                Outcome::Rejected
            }
            Err(err) => {
                tracing::error!(
                    kind = err.kind(),
                    err = %err,
                    "contact submission could not reach the handler"
                );
                self.feedback = Some(Feedback::error(FALLBACK_MESSAGE));

                Outcome::Failed
            }
        }
    }
}
