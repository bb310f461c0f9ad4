//! Canonical sample values shared by the unit and integration tests.

use std::sync::LazyLock;

use formsend_models::contact::{ContactMessage, MessageId, MessageStatus, UserAgent};

pub const NAME: &str = "Jo";
pub const EMAIL: &str = "jo@x.co";
pub const MESSAGE: &str = "Hello, this is long enough.";

pub static USER_AGENT: LazyLock<UserAgent> =
    LazyLock::new(|| "formsend/tests".try_into().unwrap());

pub static MESSAGE_ID_1: LazyLock<MessageId> =
    LazyLock::new(|| "doc-83ff01".try_into().unwrap());

pub static CONTACT_MESSAGE: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    name: NAME.try_into().unwrap(),
    email: EMAIL.try_into().unwrap(),
    message: MESSAGE.try_into().unwrap(),
    status: MessageStatus::New,
    user_agent: USER_AGENT.clone(),
});
