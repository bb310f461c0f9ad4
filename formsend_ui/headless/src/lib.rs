use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use formsend_models::{
    form::FormField,
    notification::{Toast, ToastId},
};
use formsend_ui_contracts::{FormEvent, FormPage};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// The style block a browser page would register once at load time.
pub const STYLE_SHEET: &str = r#"
@keyframes slideInUp {
  from { transform: translateY(100%); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes slideOutDown {
  from { transform: translateY(0); opacity: 1; }
  to { transform: translateY(100%); opacity: 0; }
}

.is-invalid { border-color: #ef4444 !important; }

.invalid-feedback {
  color: #ef4444;
  font-size: 0.875rem;
  margin-top: 0.25rem;
  display: block;
}

.btn-submit:disabled { opacity: 0.7; cursor: not-allowed; }
"#;

pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// In-memory page implementation backing the console runtime and the
/// integration tests. All state lives behind a single mutex; no method holds
/// the lock across an await point.
#[derive(Debug, Default)]
pub struct HeadlessPage {
    state: Mutex<PageState>,
}

#[derive(Debug)]
struct PageState {
    fields: HashMap<FormField, FieldState>,
    submit_enabled: bool,
    submit_label: String,
    toasts: Vec<ToastPanel>,
    style_sheet: Option<&'static str>,
    subscribers: Vec<UnboundedSender<FormEvent>>,
}

#[derive(Debug, Default, Clone)]
struct FieldState {
    value: String,
    feedback: Option<String>,
    focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastPanel {
    pub id: ToastId,
    pub toast: Toast,
    pub exiting: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            fields: FormField::ALL
                .into_iter()
                .map(|field| (field, FieldState::default()))
                .collect(),
            submit_enabled: true,
            submit_label: DEFAULT_SUBMIT_LABEL.into(),
            toasts: Vec::new(),
            style_sheet: None,
            subscribers: Vec::new(),
        }
    }
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field's value without blurring it, as if the user were still
    /// typing.
    pub fn set_value(&self, field: FormField, value: &str) {
        self.lock().fields.get_mut(&field).unwrap().value = value.into();
    }

    /// Moves focus away from a field, notifying subscribers.
    pub fn blur(&self, field: FormField) {
        self.lock().fields.get_mut(&field).unwrap().focused = false;
        self.emit(FormEvent::FieldBlurred(field));
    }

    /// Types a value into a field and then leaves it.
    pub fn enter(&self, field: FormField, value: &str) {
        self.set_value(field, value);
        self.blur(field);
    }

    /// Presses the submit control. A disabled control swallows the press;
    /// returns whether a submit request was actually emitted.
    pub fn press_submit(&self) -> bool {
        if !self.lock().submit_enabled {
            tracing::debug!("submit control is disabled, press ignored");
            return false;
        }
        self.emit(FormEvent::SubmitRequested);
        true
    }

    pub fn feedback(&self, field: FormField) -> Option<String> {
        self.lock().fields[&field].feedback.clone()
    }

    pub fn is_invalid(&self, field: FormField) -> bool {
        self.lock().fields[&field].feedback.is_some()
    }

    pub fn is_focused(&self, field: FormField) -> bool {
        self.lock().fields[&field].focused
    }

    pub fn submit_enabled(&self) -> bool {
        self.lock().submit_enabled
    }

    pub fn toasts(&self) -> Vec<ToastPanel> {
        self.lock().toasts.clone()
    }

    pub fn styles_installed(&self) -> bool {
        self.lock().style_sheet.is_some()
    }

    pub fn style_sheet(&self) -> Option<&'static str> {
        self.lock().style_sheet
    }

    fn emit(&self, event: FormEvent) {
        self.lock()
            .subscribers
            .retain(|subscriber| subscriber.send(event).is_ok());
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl FormPage for HeadlessPage {
    fn field_value(&self, field: FormField) -> String {
        self.lock().fields[&field].value.clone()
    }

    fn focus(&self, field: FormField) {
        let mut state = self.lock();
        for (name, field_state) in state.fields.iter_mut() {
            field_state.focused = *name == field;
        }
    }

    fn mark_invalid(&self, field: FormField, feedback: String) {
        tracing::debug!(?field, feedback, "mark field invalid");
        self.lock().fields.get_mut(&field).unwrap().feedback = Some(feedback);
    }

    fn clear_invalid(&self, field: FormField) {
        self.lock().fields.get_mut(&field).unwrap().feedback = None;
    }

    fn submit_label(&self) -> String {
        self.lock().submit_label.clone()
    }

    fn set_submit_label(&self, label: String) {
        self.lock().submit_label = label;
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.lock().submit_enabled = enabled;
    }

    fn reset_fields(&self) {
        for field_state in self.lock().fields.values_mut() {
            field_state.value.clear();
        }
    }

    fn insert_toast(&self, toast: Toast) -> ToastId {
        let id = ToastId::from(Uuid::new_v4());
        tracing::info!(
            severity = ?toast.severity,
            color = toast.severity.color(),
            message = toast.message,
            "toast"
        );
        self.lock().toasts.push(ToastPanel {
            id,
            toast,
            exiting: false,
        });
        id
    }

    fn begin_toast_exit(&self, id: ToastId) {
        if let Some(panel) = self.lock().toasts.iter_mut().find(|panel| panel.id == id) {
            panel.exiting = true;
        }
    }

    fn remove_toast(&self, id: ToastId) {
        self.lock().toasts.retain(|panel| panel.id != id);
    }

    fn install_styles(&self) -> bool {
        let mut state = self.lock();
        if state.style_sheet.is_some() {
            return false;
        }
        state.style_sheet = Some(STYLE_SHEET);
        true
    }

    fn subscribe(&self) -> UnboundedReceiver<FormEvent> {
        let (tx, rx) = unbounded_channel();
        self.lock().subscribers.push(tx);
        rx
    }
}
