//! The lettre-backed SMTP transport.

use crate::config::SmtpConfig;
use crate::core::{EmailMessage, EmailTransport};
use anyhow::Result;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the SMTP transport.
#[derive(Debug, Error)]
pub enum SmtpError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error(transparent)]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// An [`EmailTransport`] backed by an async SMTP client.
///
/// The client is built once and reused for every send; it is never rotated
/// or reconfigured after construction.
pub struct SmtpSender {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpSender {
    /// Builds the SMTP client from resolved credentials.
    ///
    /// Port 465 selects an implicit-TLS session, any other port uses
    /// STARTTLS. lettre exposes a single I/O timeout covering connection
    /// establishment, greeting, and socket reads, so the strictest of the
    /// configured budgets (the socket budget) is applied to all of them.
    pub fn new(
        config: &SmtpConfig,
        host: &str,
        user: &str,
        password: &str,
    ) -> Result<Self, SmtpError> {
        let builder = if config.secure() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        };

        let io_timeout = config
            .socket_timeout_ms
            .min(config.connect_timeout_ms)
            .min(config.greeting_timeout_ms);

        let inner = builder
            .port(config.port)
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .timeout(Some(Duration::from_millis(io_timeout)))
            .build();

        Ok(Self { inner })
    }

    async fn try_send(&self, from: &str, message: &EmailMessage) -> Result<String, SmtpError> {
        let email = Message::builder()
            .from(from.parse()?)
            .to(message.to.parse()?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())?;

        let response = self.inner.send(email).await?;
        Ok(response.message().collect::<Vec<_>>().join(" "))
    }
}

#[async_trait]
impl EmailTransport for SmtpSender {
    fn name(&self) -> &str {
        "smtp"
    }

    async fn send_message(&self, from: &str, message: &EmailMessage) -> Result<String> {
        Ok(self.try_send(from, message).await?)
    }
}
