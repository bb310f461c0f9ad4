use std::{sync::Arc, time::Duration};

use formsend::bootstrap::{bootstrap, pump_events};
use formsend_config::{ClientConfig, Config, ToastConfig};
use formsend_core_form_contracts::{ContactFormService, SubmitOutcome};
use formsend_core_form_impl::{ContactFormServiceConfig, ContactFormServiceImpl, SENDING_LABEL};
use formsend_core_notify_impl::{NotificationServiceConfig, NotificationServiceImpl};
use formsend_demo::{CONTACT_MESSAGE, EMAIL, MESSAGE, MESSAGE_ID_1, NAME, USER_AGENT};
use formsend_models::{form::FormField, notification::Severity};
use formsend_shared_impl::delay::DelayServiceImpl;
use formsend_store_contracts::{MessageStoreError, MockMessageStore};
use formsend_ui_contracts::FormPage;
use formsend_ui_headless::{HeadlessPage, DEFAULT_SUBMIT_LABEL};
use pretty_assertions::assert_eq;

type Controller = ContactFormServiceImpl<
    HeadlessPage,
    MockMessageStore,
    NotificationServiceImpl<HeadlessPage, DelayServiceImpl>,
>;

fn wire(page: &Arc<HeadlessPage>, store: MockMessageStore) -> Controller {
    let notify = NotificationServiceImpl::new(
        Arc::clone(page),
        Arc::new(DelayServiceImpl),
        NotificationServiceConfig::default(),
    );

    ContactFormServiceImpl::new(
        Arc::clone(page),
        store,
        notify,
        ContactFormServiceConfig {
            user_agent: USER_AGENT.clone(),
        },
    )
}

async fn wait_until(page: &Arc<HeadlessPage>, predicate: impl Fn(&HeadlessPage) -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !predicate(page) {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

#[tokio::test]
async fn valid_submission_stores_the_message_and_resets_the_form() {
    // Arrange
    let page = Arc::new(HeadlessPage::new());
    let store =
        MockMessageStore::new().with_add(CONTACT_MESSAGE.clone(), Ok(MESSAGE_ID_1.clone()));
    let controller = wire(&page, store);

    page.enter(FormField::Name, NAME);
    page.enter(FormField::Email, EMAIL);
    page.enter(FormField::Message, MESSAGE);

    // Act
    let outcome = controller.handle_submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Submitted(MESSAGE_ID_1.clone()));
    for field in FormField::ALL {
        assert_eq!(page.field_value(field), "");
    }
    assert!(page.submit_enabled());
    assert_eq!(page.submit_label(), DEFAULT_SUBMIT_LABEL);

    let toasts = page.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].toast.severity, Severity::Success);
    assert!(toasts[0].toast.message.contains("has been sent successfully"));
}

#[tokio::test]
async fn empty_name_blocks_the_write_and_focuses_the_field() {
    // Arrange
    let page = Arc::new(HeadlessPage::new());
    // no `add` expectation: any write attempt fails the test
    let controller = wire(&page, MockMessageStore::new());

    page.enter(FormField::Email, EMAIL);
    page.enter(FormField::Message, MESSAGE);

    // Act
    let outcome = controller.handle_submit().await;

    // Assert
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert!(page.is_focused(FormField::Name));

    let toasts = page.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].toast.severity, Severity::Error);
    assert_eq!(toasts[0].toast.message, "Please enter your name");
}

#[tokio::test]
async fn a_pending_submission_locks_the_control() {
    // Arrange
    let page = Arc::new(HeadlessPage::new());
    let (entered_tx, entered_rx) = tokio::sync::oneshot::channel();
    let (release_tx, release_rx) = tokio::sync::oneshot::channel();

    let mut store = MockMessageStore::new();
    let id = MESSAGE_ID_1.clone();
    store.expect_add().once().return_once(move |_| {
        Box::pin(async move {
            entered_tx.send(()).unwrap();
            release_rx.await.unwrap();
            Ok(id)
        })
    });

    let controller = Arc::new(wire(&page, store));

    page.enter(FormField::Name, NAME);
    page.enter(FormField::Email, EMAIL);
    page.enter(FormField::Message, MESSAGE);

    // Act
    let submit = tokio::spawn({
        let controller = Arc::clone(&controller);
        async move { controller.handle_submit().await }
    });

    entered_rx.await.unwrap();

    // Assert: while the write is pending, the control is locked and a second
    // press is swallowed.
    assert!(!page.submit_enabled());
    assert_eq!(page.submit_label(), SENDING_LABEL);
    assert!(!page.press_submit());

    release_tx.send(()).unwrap();
    let outcome = submit.await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Submitted(MESSAGE_ID_1.clone()));
    assert!(page.submit_enabled());
    assert_eq!(page.submit_label(), DEFAULT_SUBMIT_LABEL);
}

#[tokio::test]
async fn pump_drives_blur_validation_and_submission() {
    // Arrange
    let page = Arc::new(HeadlessPage::new());
    let store = MockMessageStore::new().with_add(
        CONTACT_MESSAGE.clone(),
        Err(MessageStoreError::PermissionDenied),
    );
    let controller = wire(&page, store);

    let events = page.subscribe();
    let pump = tokio::spawn(pump_events(controller, events));

    // Act: leave a malformed email behind, fix it, then submit.
    page.enter(FormField::Email, "a@b");
    wait_until(&page, |page| page.is_invalid(FormField::Email)).await;
    assert_eq!(
        page.feedback(FormField::Email).as_deref(),
        Some("Please enter a valid email")
    );

    page.enter(FormField::Name, NAME);
    page.enter(FormField::Email, EMAIL);
    page.enter(FormField::Message, MESSAGE);
    wait_until(&page, |page| !page.is_invalid(FormField::Email)).await;

    assert!(page.press_submit());

    // Assert
    wait_until(&page, |page| {
        page.toasts()
            .iter()
            .any(|panel| panel.toast.message.contains("Permission denied."))
    })
    .await;
    assert!(page.submit_enabled());

    pump.abort();
}

#[tokio::test]
async fn bootstrap_without_backend_disables_the_form() {
    // Arrange
    let config = Config {
        client: ClientConfig { user_agent: None },
        toast: ToastConfig { duration_secs: 5 },
        backend: None,
    };
    let page = Arc::new(HeadlessPage::new());

    // Act + Assert: no controller, but the styles were still registered.
    assert!(bootstrap(&config, &page).is_none());
    assert!(page.styles_installed());
}
