use std::sync::Arc;

use formsend_core_notify_contracts::MockNotificationService;
use formsend_store_contracts::MockMessageStore;
use formsend_ui_contracts::MockFormPage;

use crate::{ContactFormServiceConfig, ContactFormServiceImpl};


type Sut = ContactFormServiceImpl<MockFormPage, MockMessageStore, MockNotificationService>;

fn sut(page: MockFormPage, store: MockMessageStore, notify: MockNotificationService) -> Sut {
    ContactFormServiceImpl::new(
        Arc::new(page),
        store,
        notify,
        ContactFormServiceConfig {
            user_agent: formsend_demo::USER_AGENT.clone(),
        },
    )
}
