use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Collection that receives contact form submissions.
pub const CONTACT_COLLECTION: &str = "contactmessage";

/// Contact form payload as sent by the client.
///
/// Unknown fields are ignored, including any client-supplied `received_at`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 120, message = "Name must be 1-120 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,
    #[validate(length(min = 5, max = 5000, message = "Message must be 5-5000 characters"))]
    pub message: String,
    pub tags: Option<Vec<String>>,
}

/// A validated submission as persisted in the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub tags: Option<Vec<String>>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub received_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(submission: ContactSubmission, received_at: DateTime<Utc>) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            tags: submission.tags,
            received_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(value: serde_json::Value) -> ContactSubmission {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn minimal_submission_is_valid() {
        let s = submission(json!({
            "name": "A",
            "email": "a@example.com",
            "message": "hello there"
        }));
        assert!(s.validate().is_ok());
        assert!(s.subject.is_none());
        assert!(s.tags.is_none());
    }

    #[test]
    fn message_length_boundary_is_five_characters() {
        let short = submission(json!({"name": "A", "email": "a@example.com", "message": "abcd"}));
        let errors = short.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));

        let exact = submission(json!({"name": "A", "email": "a@example.com", "message": "abcde"}));
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Five two-byte characters.
        let s = submission(json!({"name": "Ä", "email": "a@example.com", "message": "ééééé"}));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn rejects_bad_email_empty_name_and_long_subject() {
        let s = submission(json!({
            "name": "",
            "email": "not-an-email",
            "subject": "x".repeat(201),
            "message": "hello there"
        }));
        let errors = s.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("subject"));
        assert!(!fields.contains_key("message"));
    }

    #[test]
    fn rejects_overlong_name_and_message() {
        let s = submission(json!({
            "name": "n".repeat(121),
            "email": "a@example.com",
            "message": "m".repeat(5001)
        }));
        let errors = s.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn client_received_at_is_ignored() {
        let s = submission(json!({
            "name": "A",
            "email": "a@example.com",
            "message": "hello there",
            "received_at": "1999-01-01T00:00:00Z"
        }));
        let now = Utc::now();
        let stored = ContactMessage::new(s, now);
        assert_eq!(stored.received_at, now);
    }

    #[test]
    fn stored_document_carries_bson_datetime() {
        let s = submission(json!({
            "name": "A",
            "email": "a@example.com",
            "message": "hello there",
            "tags": ["hire", "freelance"]
        }));
        let document = mongodb::bson::to_document(&ContactMessage::new(s, Utc::now())).unwrap();
        assert!(document.get_datetime("received_at").is_ok());
        assert_eq!(document.get_array("tags").unwrap().len(), 2);
        assert!(document.contains_key("subject"));
    }
}
