use async_trait::async_trait;
use lettre::{
    address::AddressError,
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::{info, warn};

use super::OutgoingMail;
use crate::config::MailConfig;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("SMTP credentials are not configured")]
    MissingCredentials,
    #[error("Invalid email address: {0}")]
    Address(#[from] AddressError),
    #[error("Couldn't build email message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP transport failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Anything that can deliver an [`OutgoingMail`].
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// How the relay connection gets encrypted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SmtpSecurity {
    /// TLS from the first byte (port 465 and the default).
    ImplicitTls,
    /// Plain connection upgraded with STARTTLS (submission port 587).
    StartTls,
}

impl SmtpSecurity {
    fn for_port(port: Option<u16>) -> Self {
        match port {
            Some(587) => Self::StartTls,
            _ => Self::ImplicitTls,
        }
    }
}

struct SmtpAccount {
    address: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

/// SMTP relay authenticated as the site owner's account.
///
/// Without credentials the mailer still gets built, and every send fails.
pub struct SmtpMailer {
    account: Option<SmtpAccount>,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let (username, password) = match (&config.username, &config.password) {
            (Some(username), Some(password)) => (username, password),
            _ => {
                warn!(
                    smtp_host = %config.smtp_host,
                    "EMAIL_USER/EMAIL_PASS not set, contact submissions will fail"
                );
                return Ok(Self { account: None });
            }
        };

        let security = SmtpSecurity::for_port(config.smtp_port);
        let mut builder = match security {
            SmtpSecurity::ImplicitTls => {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            }
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            }
        }
        .credentials(Credentials::new(username.clone(), password.clone()));
        if let Some(port) = config.smtp_port {
            builder = builder.port(port);
        }
        info!(
            smtp_host = %config.smtp_host,
            smtp_port = ?config.smtp_port,
            ?security,
            from = %username,
            "SMTP mailer initialized"
        );

        Ok(Self {
            account: Some(SmtpAccount {
                address: username.clone(),
                transport: builder.build(),
            }),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let account = self.account.as_ref().ok_or(MailError::MissingCredentials)?;
        let message = build_message(mail, &account.address)?;
        account.transport.send(message).await?;
        Ok(())
    }
}

fn build_message(mail: &OutgoingMail, account: &str) -> Result<Message, MailError> {
    let sender_name = Some(mail.sender_name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    let from = Mailbox::new(sender_name, account.parse::<Address>()?);
    let reply_to = Mailbox::new(None, mail.reply_to.parse::<Address>()?);
    let to = Mailbox::new(None, mail.to.parse::<Address>()?);

    let message = Message::builder()
        .from(from)
        .reply_to(reply_to)
        .to(to)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(mail.body.clone())?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactSubmission, DEFAULT_RECIPIENT};

    fn mail(email: &str) -> OutgoingMail {
        let submission = ContactSubmission {
            name: "Ana".to_string(),
            email: email.to_string(),
            subject: Some("Hello there".to_string()),
            priority: "high".to_string(),
            message: "Hello".to_string(),
        };
        OutgoingMail::compose(&submission, DEFAULT_RECIPIENT)
    }

    fn unconfigured() -> MailConfig {
        MailConfig {
            username: None,
            password: None,
            recipient: DEFAULT_RECIPIENT.to_string(),
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: None,
        }
    }

    #[test]
    fn test_message_headers() {
        let message = build_message(&mail("ana@example.com"), "site@example.com").unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Reply-To: ana@example.com"));
        assert!(formatted.contains("site@example.com"));
        assert!(formatted.contains(&format!("To: {DEFAULT_RECIPIENT}")));
        assert!(formatted.contains("Subject: Hello there"));
        assert!(formatted.contains("Prioridade: high"));
    }

    #[test]
    fn test_malformed_visitor_address_fails() {
        assert!(matches!(
            build_message(&mail("not an address"), "site@example.com"),
            Err(MailError::Address(_))
        ));
    }

    #[test]
    fn test_security_follows_port() {
        assert_eq!(SmtpSecurity::for_port(None), SmtpSecurity::ImplicitTls);
        assert_eq!(SmtpSecurity::for_port(Some(465)), SmtpSecurity::ImplicitTls);
        assert_eq!(SmtpSecurity::for_port(Some(587)), SmtpSecurity::StartTls);
    }

    #[tokio::test]
    async fn test_submission_port_builds_mailer() {
        let config = MailConfig {
            username: Some("site@example.com".to_string()),
            password: Some("secret".to_string()),
            smtp_port: Some(587),
            ..unconfigured()
        };
        let mailer = SmtpMailer::new(&config).unwrap();
        assert!(mailer.account.is_some());
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_at_send_time() {
        let mailer = SmtpMailer::new(&unconfigured()).unwrap();
        let res = mailer.send(&mail("ana@example.com")).await;
        assert!(matches!(res, Err(MailError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_password_alone_is_not_enough() {
        let config = MailConfig {
            password: Some("secret".to_string()),
            ..unconfigured()
        };
        let mailer = SmtpMailer::new(&config).unwrap();
        assert!(mailer.account.is_none());
    }
}
