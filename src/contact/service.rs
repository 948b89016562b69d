use std::sync::Arc;

use tracing::{error, info};

use super::mailer::MailTransport;
use super::{ContactError, ContactSubmission, OutgoingMail};

/// Turns a submission into one email and hands it to the transport.
#[derive(Clone)]
pub struct ContactService {
    transport: Arc<dyn MailTransport>,
    recipient: Arc<str>,
}

impl ContactService {
    pub fn new(transport: Arc<dyn MailTransport>, recipient: impl Into<Arc<str>>) -> Self {
        Self {
            transport,
            recipient: recipient.into(),
        }
    }

    pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let mail = OutgoingMail::compose(submission, &self.recipient);
        self.transport.send(&mail).await?;
        info!(
            priority = %submission.priority,
            subject = %mail.subject,
            "Contact email sent"
        );
        Ok(())
    }

    /// Parses a raw request body and submits it, logging whatever went wrong.
    pub async fn submit_json(&self, body: &[u8]) -> Result<(), ContactError> {
        let res = match ContactSubmission::from_json(body) {
            Ok(submission) => self.submit(&submission).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &res {
            error!(error = %e, "Erro ao enviar e-mail");
        }
        res
    }
}
