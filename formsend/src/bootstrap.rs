use std::{sync::Arc, time::Duration};

use formsend_config::Config;
use formsend_core_form_contracts::ContactFormService;
use formsend_core_form_impl::{ContactFormServiceConfig, ContactFormServiceImpl};
use formsend_core_notify_impl::{NotificationServiceConfig, NotificationServiceImpl};
use formsend_models::contact::UserAgent;
use formsend_shared_impl::delay::DelayServiceImpl;
use formsend_store_rest::{http::USER_AGENT, RestMessageStore, RestMessageStoreConfig};
use formsend_ui_contracts::{FormEvent, FormPage};
use formsend_ui_headless::HeadlessPage;
use tokio::sync::mpsc::UnboundedReceiver;

pub type Notify = NotificationServiceImpl<HeadlessPage, DelayServiceImpl>;
pub type Controller = ContactFormServiceImpl<HeadlessPage, RestMessageStore, Notify>;

/// Page-load hook: registers the styles unconditionally, then wires the
/// controller - but only when the backend client is configured. Without a
/// backend there is no degraded mode; the form stays inert for this run.
pub fn bootstrap(config: &Config, page: &Arc<HeadlessPage>) -> Option<Controller> {
    page.install_styles();

    let Some(backend) = &config.backend else {
        tracing::error!("No backend configured, contact form disabled");
        return None;
    };

    let store = RestMessageStore::new(RestMessageStoreConfig {
        endpoint: Arc::new(backend.endpoint.clone()),
        collection: backend.collection.clone(),
        api_key: backend.api_key.clone(),
    });

    let notify = NotificationServiceImpl::new(
        Arc::clone(page),
        Arc::new(DelayServiceImpl),
        NotificationServiceConfig {
            default_duration: Duration::from_secs(config.toast.duration_secs),
        },
    );

    let user_agent = match &config.client.user_agent {
        Some(user_agent) => user_agent.clone(),
        // the built-in agent is always a valid UserAgent
        None => UserAgent::try_new(USER_AGENT.clone()).unwrap(),
    };

    Some(ContactFormServiceImpl::new(
        Arc::clone(page),
        store,
        notify,
        ContactFormServiceConfig { user_agent },
    ))
}

/// Dispatches page events to the controller, one at a time. Submissions are
/// awaited to completion before the next event is picked up, which combined
/// with the disabled submit control keeps at most one write in flight.
pub async fn pump_events<C: ContactFormService>(
    controller: C,
    mut events: UnboundedReceiver<FormEvent>,
) {
    while let Some(event) = events.recv().await {
        match event {
            FormEvent::FieldBlurred(field) => controller.handle_blur(field),
            FormEvent::SubmitRequested => {
                let outcome = controller.handle_submit().await;
                tracing::debug!(?outcome, "submit handled");
            }
        }
    }
}
