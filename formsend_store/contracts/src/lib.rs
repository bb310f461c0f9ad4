use std::future::Future;

use formsend_models::contact::{ContactMessage, MessageId};
use thiserror::Error;

/// Narrow view of the document-store backend: append one record to the
/// message collection, get back the id the backend assigned.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MessageStore: Send + Sync + 'static {
    fn add(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<MessageId, MessageStoreError>> + Send;
}

#[derive(Debug, Error)]
pub enum MessageStoreError {
    #[error("Permission denied.")]
    PermissionDenied,
    #[error("Service temporarily unavailable.")]
    Unavailable,
    #[error("Authentication error.")]
    Unauthenticated,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockMessageStore {
    pub fn with_add(mut self, message: ContactMessage, result: Result<MessageId, MessageStoreError>) -> Self {
        self.expect_add()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
