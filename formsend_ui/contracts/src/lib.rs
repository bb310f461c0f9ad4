use formsend_models::{
    form::FormField,
    notification::{Toast, ToastId},
};
use tokio::sync::mpsc::UnboundedReceiver;

/// Everything the form workflow needs from the page it lives on.
///
/// The page owns the three inputs, the submit control, the toast overlay area
/// and the global style sheet; this trait is the only way the core touches any
/// of them, so the actual UI runtime stays swappable.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormPage: Send + Sync + 'static {
    /// Current raw (untrimmed) value of a field.
    fn field_value(&self, field: FormField) -> String;

    fn focus(&self, field: FormField);

    /// Applies the invalid marker and places the inline feedback text next to
    /// the field. At most one feedback element per field; repeated calls
    /// replace its text instead of duplicating it.
    fn mark_invalid(&self, field: FormField, feedback: String);

    /// Removes the invalid marker and the inline feedback element. No-op when
    /// the field is not marked.
    fn clear_invalid(&self, field: FormField);

    fn submit_label(&self) -> String;

    fn set_submit_label(&self, label: String);

    fn set_submit_enabled(&self, enabled: bool);

    /// Resets all three fields to empty.
    fn reset_fields(&self);

    fn insert_toast(&self, toast: Toast) -> ToastId;

    /// Starts the exit animation of a toast panel. The panel stays in the
    /// page until [`FormPage::remove_toast`].
    fn begin_toast_exit(&self, id: ToastId);

    fn remove_toast(&self, id: ToastId);

    /// One-time global style registration (animation keyframes plus the
    /// invalid-field, inline-feedback and disabled-button classes). Returns
    /// `false` without doing anything when the styles are already installed.
    fn install_styles(&self) -> bool;

    /// Subscribes to the page's form events (field blur, submit request).
    fn subscribe(&self) -> UnboundedReceiver<FormEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    FieldBlurred(FormField),
    SubmitRequested,
}

#[cfg(feature = "mock")]
impl MockFormPage {
    pub fn with_field_value(mut self, field: FormField, value: &str) -> Self {
        let value = value.to_owned();
        self.expect_field_value()
            .once()
            .with(mockall::predicate::eq(field))
            .return_once(|_| value);
        self
    }

    pub fn with_focus(mut self, field: FormField) -> Self {
        self.expect_focus()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(());
        self
    }

    pub fn with_mark_invalid(mut self, field: FormField, feedback: &str) -> Self {
        self.expect_mark_invalid()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(feedback.to_owned()),
            )
            .return_const(());
        self
    }

    pub fn with_clear_invalid(mut self, field: FormField) -> Self {
        self.expect_clear_invalid()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(());
        self
    }

    pub fn with_submit_label(mut self, label: &str) -> Self {
        let label = label.to_owned();
        self.expect_submit_label().once().return_once(|| label);
        self
    }

    pub fn with_set_submit_label(mut self, label: &str) -> Self {
        self.expect_set_submit_label()
            .once()
            .with(mockall::predicate::eq(label.to_owned()))
            .return_const(());
        self
    }

    pub fn with_set_submit_enabled(mut self, enabled: bool) -> Self {
        self.expect_set_submit_enabled()
            .once()
            .with(mockall::predicate::eq(enabled))
            .return_const(());
        self
    }

    pub fn with_reset_fields(mut self) -> Self {
        self.expect_reset_fields().once().return_const(());
        self
    }

    pub fn with_insert_toast(mut self, toast: Toast, id: ToastId) -> Self {
        self.expect_insert_toast()
            .once()
            .with(mockall::predicate::eq(toast))
            .return_const(id);
        self
    }

    pub fn with_begin_toast_exit(mut self, id: ToastId) -> Self {
        self.expect_begin_toast_exit()
            .once()
            .with(mockall::predicate::eq(id))
            .return_const(());
        self
    }

    pub fn with_remove_toast(mut self, id: ToastId) -> Self {
        self.expect_remove_toast()
            .once()
            .with(mockall::predicate::eq(id))
            .return_const(());
        self
    }

    pub fn with_install_styles(mut self, result: bool) -> Self {
        self.expect_install_styles().once().return_const(result);
        self
    }
}
