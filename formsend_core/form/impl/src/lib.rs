use std::sync::Arc;

use formsend_core_form_contracts::{ContactFormService, SubmitOutcome};
use formsend_core_notify_contracts::NotificationService;
use formsend_models::{
    contact::UserAgent,
    form::{FieldValues, FormField},
    notification::Severity,
};
use formsend_store_contracts::{MessageStore, MessageStoreError};
use formsend_ui_contracts::FormPage;

pub mod validate;

#[cfg(test)]
mod tests;

/// Label shown on the submit control while a write is in flight.
pub const SENDING_LABEL: &str = "Sending...";

pub const SUCCESS_TOAST: &str = "✓ Thank you! Your message has been sent successfully.";

#[derive(Debug)]
pub struct ContactFormServiceImpl<Page, Store, Notify> {
    page: Arc<Page>,
    store: Store,
    notify: Notify,
    config: ContactFormServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFormServiceConfig {
    /// Client metadata attached to every outgoing record.
    pub user_agent: UserAgent,
}

impl<Page, Store, Notify> ContactFormServiceImpl<Page, Store, Notify> {
    pub fn new(
        page: Arc<Page>,
        store: Store,
        notify: Notify,
        config: ContactFormServiceConfig,
    ) -> Self {
        Self {
            page,
            store,
            notify,
            config,
        }
    }
}

impl<P, S, N> ContactFormService for ContactFormServiceImpl<P, S, N>
where
    P: FormPage,
    S: MessageStore,
    N: NotificationService,
{
    fn handle_blur(&self, field: FormField) {
        let value = self.page.field_value(field);
        match validate::field_feedback(field, &value) {
            Some(feedback) => self.page.mark_invalid(field, feedback.into()),
            None => self.page.clear_invalid(field),
        }
    }

    async fn handle_submit(&self) -> SubmitOutcome {
        let values = FieldValues {
            name: self.page.field_value(FormField::Name),
            email: self.page.field_value(FormField::Email),
            message: self.page.field_value(FormField::Message),
        };

        let message = match validate::validate_form(&values, &self.config.user_agent) {
            Ok(message) => message,
            Err(rejection) => {
                self.notify.show(rejection.message.into(), Severity::Error);
                if let Some(field) = rejection.focus {
                    self.page.focus(field);
                }
                return SubmitOutcome::Rejected;
            }
        };

        // Lock the control for the duration of the write; nothing can start a
        // second submission until the unconditional restore below.
        self.page.set_submit_enabled(false);
        let original_label = self.page.submit_label();
        self.page.set_submit_label(SENDING_LABEL.into());

        let outcome = match self.store.add(&message).await {
            Ok(id) => {
                tracing::info!(%id, "message sent");
                self.notify.show(SUCCESS_TOAST.into(), Severity::Success);
                self.page.reset_fields();
                SubmitOutcome::Submitted(id)
            }
            Err(err) => {
                tracing::error!("failed to send message: {err}");
                self.notify.show(store_error_toast(&err), Severity::Error);
                SubmitOutcome::StoreFailed
            }
        };

        // Always runs, success or failure.
        self.page.set_submit_enabled(true);
        self.page.set_submit_label(original_label);

        outcome
    }
}

fn store_error_toast(err: &MessageStoreError) -> String {
    let detail = match err {
        MessageStoreError::PermissionDenied => "Permission denied. Please try again later.".into(),
        MessageStoreError::Unavailable => {
            "Service temporarily unavailable. Please try again.".into()
        }
        MessageStoreError::Unauthenticated => {
            "Authentication error. Please refresh and try again.".into()
        }
        MessageStoreError::Other(err) => err.to_string(),
    };
    format!("Error sending message: {detail}")
}
