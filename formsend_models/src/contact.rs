use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single contact message as handed to the backend. The submission
/// timestamp is assigned by the backend at write time and is therefore not
/// part of this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: ContactMessageName,
    pub email: ContactMessageEmail,
    pub message: ContactMessageContent,
    pub status: MessageStatus,
    pub user_agent: UserAgent,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageName(String);

#[nutype(
    sanitize(trim),
    validate(regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageEmail(String);

/// `local@domain.tld` shape, nothing more. Deliverability is the backend's
/// problem.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    New,
}

#[nutype(
    validate(not_empty, len_char_max = 512),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct UserAgent(String);

/// Identifier assigned by the backend on write. Only ever used for logging.
#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct MessageId(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        for accepted in ["a@b.c", "jo@x.co", "max.mustermann@example.de"] {
            ContactMessageEmail::try_from(accepted).unwrap();
        }
        for rejected in ["a@b", "a.com", "", " ", "a b@c.d", "a@b c.d"] {
            ContactMessageEmail::try_from(rejected).unwrap_err();
        }
    }

    #[test]
    fn name_length() {
        ContactMessageName::try_from("J").unwrap_err();
        ContactMessageName::try_from("Jo").unwrap();
        // trimming happens before the length check
        ContactMessageName::try_from(" J ").unwrap_err();
    }

    #[test]
    fn content_length() {
        ContactMessageContent::try_from("123456789").unwrap_err();
        ContactMessageContent::try_from("1234567890").unwrap();
    }

    #[test]
    fn wire_format() {
        let message = ContactMessage {
            name: "Jo".try_into().unwrap(),
            email: "jo@x.co".try_into().unwrap(),
            message: "Hello, this is long enough.".try_into().unwrap(),
            status: MessageStatus::New,
            user_agent: "formsend/0.0.0".try_into().unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({
                "name": "Jo",
                "email": "jo@x.co",
                "message": "Hello, this is long enough.",
                "status": "new",
                "userAgent": "formsend/0.0.0",
            })
        );
    }
}
