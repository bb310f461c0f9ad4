use std::future::Future;

use formsend_models::{contact::MessageId, form::FormField};

/// The contact form controller. Drives field validation on blur and the
/// one-shot submit workflow.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Runs field-level validation for a field that just lost focus and
    /// updates its inline feedback.
    fn handle_blur(&self, field: FormField);

    /// Runs form-level validation followed by a single backend write. Every
    /// failure path already ended in a user-visible toast by the time this
    /// returns; the outcome exists for host logging only.
    fn handle_submit(&self) -> impl Future<Output = SubmitOutcome> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was written; the backend assigned this id.
    Submitted(MessageId),
    /// Form-level validation rejected the submission; nothing was sent.
    Rejected,
    /// The backend write failed.
    StoreFailed,
}

#[cfg(feature = "mock")]
impl MockContactFormService {
    pub fn with_handle_blur(mut self, field: FormField) -> Self {
        self.expect_handle_blur()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(());
        self
    }

    pub fn with_handle_submit(mut self, outcome: SubmitOutcome) -> Self {
        self.expect_handle_submit()
            .once()
            .return_once(move || Box::pin(std::future::ready(outcome)));
        self
    }
}
