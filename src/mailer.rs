//! Outbound mail over authenticated SMTP.
//!
//! One message per run: `multipart/alternative` with a single HTML part,
//! submitted over an implicit-TLS connection to the configured relay. Every
//! failure here is terminal — it is logged and propagated so the process
//! exits non-zero and the scheduler can flag the run.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info, instrument};

use crate::config::MailSettings;
use crate::error::MailError;

/// Mail transport for the digest. Sends to exactly one recipient.
#[derive(Debug)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl Mailer {
    /// Build the transport and validate both addresses up front, so a typo'd
    /// recipient fails before any network traffic.
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let from = parse_mailbox(&settings.username)?;
        let to = parse_mailbox(&settings.recipient)?;

        let credentials =
            Credentials::new(settings.username.clone(), settings.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .port(settings.port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from,
            to,
        })
    }

    /// Send the digest.
    #[instrument(level = "info", skip_all, fields(to = %self.to, subject = %subject))]
    pub async fn send(&self, subject: &str, html_body: &str) -> Result<(), MailError> {
        let message = self.build_message(subject, html_body)?;

        match self.transport.send(message).await {
            Ok(response) => {
                info!(code = %response.code(), "Digest delivered");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Mail delivery failed");
                Err(e.into())
            }
        }
    }

    fn build_message(&self, subject: &str, html_body: &str) -> Result<Message, MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .multipart(
                MultiPart::alternative().singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body.to_string()),
                ),
            )?;
        Ok(message)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}
