use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

#[cfg(feature = "ssr")]
pub mod handler;
#[cfg(feature = "ssr")]
pub mod mailer;
#[cfg(feature = "ssr")]
pub(crate) mod service;

#[cfg(feature = "ssr")]
pub use service::ContactService;

pub const DEFAULT_SUBJECT: &str = "Novo contato pelo portfólio";
pub const DEFAULT_RECIPIENT: &str = "matheuscastroks@gmail.com";
/// Generic message returned for every failed submission.
pub const FAILURE_MESSAGE: &str = "Erro ao enviar e-mail";
/// Length shown by the form's character counter. Not enforced anywhere.
pub const MESSAGE_COUNTER_LIMIT: usize = 500;

/// A visitor's contact request, as received from the form or the JSON endpoint.
///
/// Nothing here is validated: absent fields are empty, non-string JSON scalars keep
/// their JSON text, and an empty subject falls back to [`DEFAULT_SUBJECT`] when the
/// mail is composed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub priority: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
}

impl ContactSubmission {
    /// Accepts any JSON object; anything else (arrays included) is rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, ContactError> {
        match serde_json::from_slice(body).map_err(ContactError::InvalidPayload)? {
            fields @ Value::Object(_) => {
                serde_json::from_value(fields).map_err(ContactError::InvalidPayload)
            }
            _ => Err(ContactError::NotAnObject),
        }
    }

    pub fn subject(&self) -> &str {
        match self.subject.as_deref() {
            Some(subject) if !subject.is_empty() => subject,
            _ => DEFAULT_SUBJECT,
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Nome: {}\nE-mail: {}\nPrioridade: {}\nMensagem: {}\n",
            self.name, self.email, self.priority, self.message
        )
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(Value::deserialize(deserializer)?))
}

/// The message handed to a mail transport.
///
/// The visitor's address only ever goes into `reply_to`; the transport decides the
/// sender from its own authenticated account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub sender_name: String,
    pub reply_to: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    pub fn compose(submission: &ContactSubmission, recipient: &str) -> Self {
        Self {
            sender_name: submission.name.clone(),
            reply_to: submission.email.clone(),
            to: recipient.to_string(),
            subject: submission.subject().to_string(),
            body: submission.body(),
        }
    }
}

/// Labels offered by the contact form. Advisory only, never checked server side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Normal,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

/// Body of every `/api/contact` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn not_sent() -> Self {
        Self {
            success: false,
            error: Some(FAILURE_MESSAGE.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Couldn't parse contact submission: {0}")]
    InvalidPayload(#[source] serde_json::Error),
    #[error("Contact submission must be a JSON object")]
    NotAnObject,
    #[cfg(feature = "ssr")]
    #[error("Couldn't send contact email: {0}")]
    Mail(#[from] mailer::MailError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: None,
            priority: "high".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_parse_full_payload() {
        let body = br#"{"name":"Ana","email":"ana@example.com","subject":"Job","priority":"high","message":"Hello"}"#;
        let submission = ContactSubmission::from_json(body).unwrap();
        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.email, "ana@example.com");
        assert_eq!(submission.subject.as_deref(), Some("Job"));
        assert_eq!(submission.priority, "high");
        assert_eq!(submission.message, "Hello");
    }

    #[test]
    fn test_parse_tolerates_missing_and_odd_fields() {
        let body = br#"{"name":42,"priority":null,"message":true,"extra":"ignored"}"#;
        let submission = ContactSubmission::from_json(body).unwrap();
        assert_eq!(submission.name, "42");
        assert_eq!(submission.email, "");
        assert_eq!(submission.subject, None);
        assert_eq!(submission.priority, "");
        assert_eq!(submission.message, "true");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            ContactSubmission::from_json(b"not json"),
            Err(ContactError::InvalidPayload(_))
        ));
        assert!(matches!(
            ContactSubmission::from_json(b"[1, 2]"),
            Err(ContactError::NotAnObject)
        ));
        assert!(matches!(
            ContactSubmission::from_json(b"\"Ana\""),
            Err(ContactError::NotAnObject)
        ));
        assert!(matches!(
            ContactSubmission::from_json(b"null"),
            Err(ContactError::NotAnObject)
        ));
    }

    #[test]
    fn test_missing_subject_uses_default() {
        assert_eq!(ana().subject(), DEFAULT_SUBJECT);

        let empty = ContactSubmission {
            subject: Some(String::new()),
            ..ana()
        };
        assert_eq!(empty.subject(), DEFAULT_SUBJECT);

        let given = ContactSubmission {
            subject: Some("Freelance".to_string()),
            ..ana()
        };
        assert_eq!(given.subject(), "Freelance");
    }

    #[test]
    fn test_body_keeps_values_verbatim() {
        let submission = ContactSubmission {
            name: "  <b>Ana</b> ".to_string(),
            message: "line one\nline & two".to_string(),
            ..ana()
        };
        let body = submission.body();
        assert_eq!(
            body,
            "Nome:   <b>Ana</b> \nE-mail: ana@example.com\nPrioridade: high\nMensagem: line one\nline & two\n"
        );
    }

    #[test]
    fn test_compose_outgoing_mail() {
        let mail = OutgoingMail::compose(&ana(), DEFAULT_RECIPIENT);
        assert_eq!(mail.sender_name, "Ana");
        assert_eq!(mail.reply_to, "ana@example.com");
        assert_eq!(mail.to, DEFAULT_RECIPIENT);
        assert_eq!(mail.subject, DEFAULT_SUBJECT);
        for value in ["Ana", "ana@example.com", "high", "Hello"] {
            assert!(mail.body.contains(value), "body is missing {value}");
        }
    }

    #[test]
    fn test_response_serialization() {
        assert_eq!(
            serde_json::to_string(&ContactResponse::sent()).unwrap(),
            r#"{"success":true}"#
        );
        assert_eq!(
            serde_json::to_string(&ContactResponse::not_sent()).unwrap(),
            r#"{"success":false,"error":"Erro ao enviar e-mail"}"#
        );
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::default(), Priority::Normal);
        let values = Priority::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>();
        assert_eq!(values, vec!["low", "normal", "high", "urgent"]);
    }
}
