use formsend_models::{
    contact::{
        ContactMessage, ContactMessageContent, ContactMessageEmail, ContactMessageName,
        MessageStatus, UserAgent, CONTACT_EMAIL_REGEX,
    },
    form::{FieldValues, FormField},
};

/// Why a submission was rejected: the toast text to show and the field to
/// refocus, where the original behavior refocuses one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub message: &'static str,
    pub focus: Option<FormField>,
}

impl Rejection {
    fn new(message: &'static str, focus: Option<FormField>) -> Self {
        Self { message, focus }
    }
}

/// Form-level validation: sequential, first failure wins. Values are trimmed
/// before each check. On success the outgoing record is fully built.
pub fn validate_form(
    values: &FieldValues,
    user_agent: &UserAgent,
) -> Result<ContactMessage, Rejection> {
    let name = values.name.trim();
    let email = values.email.trim();
    let message = values.message.trim();

    if name.is_empty() {
        return Err(Rejection::new(
            "Please enter your name",
            Some(FormField::Name),
        ));
    }
    // The short-name rejection never refocused the field. Kept as observed.
    let name = ContactMessageName::try_new(name)
        .map_err(|_| Rejection::new("Name must be at least 2 characters", None))?;

    if email.is_empty() {
        return Err(Rejection::new(
            "Please enter your email",
            Some(FormField::Email),
        ));
    }
    let email = ContactMessageEmail::try_new(email)
        .map_err(|_| Rejection::new("Please enter a valid email address", Some(FormField::Email)))?;

    if message.is_empty() {
        return Err(Rejection::new(
            "Please enter your message",
            Some(FormField::Message),
        ));
    }
    let message = ContactMessageContent::try_new(message)
        .map_err(|_| Rejection::new("Message must be at least 10 characters long", None))?;

    Ok(ContactMessage {
        name,
        email,
        message,
        status: MessageStatus::New,
        user_agent: user_agent.clone(),
    })
}

/// Field-level validation for a field losing focus. Empty fields produce no
/// feedback; only a non-empty value that breaks its rule does.
pub fn field_feedback(field: FormField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match field {
        FormField::Name if value.chars().count() < 2 => {
            Some("Name must be at least 2 characters")
        }
        FormField::Email if !CONTACT_EMAIL_REGEX.is_match(value) => {
            Some("Please enter a valid email")
        }
        FormField::Message if value.chars().count() < 10 => {
            Some("Message must be at least 10 characters")
        }
        _ => None,
    }
}
