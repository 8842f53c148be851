//! The bounded-latency email dispatcher.
//!
//! The dispatcher races every transport send against a fixed timer and
//! reports whichever settles first. The race bounds the caller's wait, not
//! the transport operation itself: a send that loses the race keeps running
//! in the background and its eventual outcome is discarded. The transport
//! does not support cancellation, so the losing send is never aborted.

use crate::config::Config;
use crate::core::{EmailMessage, EmailTransport, SendOutcome};
use crate::notification::smtp::SmtpSender;
use crate::notification::templates;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Fixed failure reason returned for every send while unconfigured.
pub const NOT_CONFIGURED_ERROR: &str = "Email service not configured";

/// The email dispatcher. Constructed once at startup and shared by callers.
///
/// The dispatcher has exactly two lifetime states, decided at construction
/// and never revisited: configured (a transport is held for the process
/// lifetime) or unconfigured (every send fails fast with a fixed reason).
pub struct Mailer {
    transport: Option<Arc<dyn EmailTransport>>,
    /// Sender identity for every outgoing message. Caller input is never
    /// used here, to avoid delegated-sending rejections by the provider.
    from: String,
    /// Maximum time a caller waits for one send.
    bound: Duration,
    /// Base URL for links embedded in notification bodies.
    frontend_base: String,
}

impl Mailer {
    /// Creates the dispatcher from configuration.
    ///
    /// Missing SMTP credentials are not an error: the dispatcher starts in
    /// the unconfigured state, logs a warning, and every send returns a
    /// fixed failure result. An `Err` is only returned when credentials are
    /// present but the transport cannot be built from them.
    pub fn from_config(config: &Config) -> Result<Self> {
        let frontend_base = config.links.frontend_base();
        let bound = Duration::from_millis(config.smtp.send_timeout_ms);

        match config.smtp.credentials() {
            Some((host, user, password)) => {
                let sender = SmtpSender::new(&config.smtp, host, user, password)?;
                info!(
                    host,
                    port = config.smtp.port,
                    transport = sender.name(),
                    "email dispatcher configured"
                );
                Ok(Self {
                    transport: Some(Arc::new(sender)),
                    from: user.to_string(),
                    bound,
                    frontend_base,
                })
            }
            None => {
                warn!("SMTP credentials missing; email dispatch disabled for this process");
                Ok(Self {
                    transport: None,
                    from: String::new(),
                    bound,
                    frontend_base,
                })
            }
        }
    }

    /// Creates a configured dispatcher around an arbitrary transport.
    pub fn with_transport(
        transport: Arc<dyn EmailTransport>,
        from: impl Into<String>,
        bound: Duration,
        frontend_base: impl Into<String>,
    ) -> Self {
        Self {
            transport: Some(transport),
            from: from.into(),
            bound,
            frontend_base: frontend_base.into(),
        }
    }

    /// Whether a transport was built at construction.
    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    /// Sends one message, returning within the configured time bound.
    ///
    /// Never returns an error or panics; every failure mode is folded into
    /// the returned [`SendOutcome`].
    pub async fn send(&self, message: &EmailMessage) -> SendOutcome {
        let Some(transport) = &self.transport else {
            warn!(to = %message.to, "email not sent: dispatcher is unconfigured");
            return SendOutcome::failure(NOT_CONFIGURED_ERROR);
        };

        let started = Instant::now();
        let bound_ms = self.bound.as_millis() as u64;

        // Spawned so that losing the race leaves the send running; dropping
        // the join handle discards its eventual outcome.
        let transport = Arc::clone(transport);
        let from = self.from.clone();
        let outgoing = message.clone();
        let in_flight =
            tokio::spawn(async move { transport.send_message(&from, &outgoing).await });

        let result = tokio::select! {
            joined = in_flight => match joined {
                Ok(result) => result,
                Err(join_err) => Err(anyhow!("email send task failed: {join_err}")),
            },
            _ = tokio::time::sleep(self.bound) => Err(anyhow!(
                "Email send timed out after {bound_ms}ms - SMTP server may be slow or unresponsive"
            )),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match result {
            Ok(message_id) => {
                info!(
                    to = %message.to,
                    subject = %message.subject,
                    %message_id,
                    elapsed_ms,
                    "email sent"
                );
                SendOutcome::delivered()
            }
            Err(err) => {
                let reason = err.to_string();
                error!(
                    to = %message.to,
                    subject = %message.subject,
                    error = %reason,
                    elapsed_ms,
                    "email send failed"
                );
                if reason.contains("timed out") {
                    // Distinct message: the bound was exceeded but the
                    // in-flight send may still complete.
                    SendOutcome::failure(format!(
                        "Email delivery timed out after {bound_ms}ms; \
                         the message may still be delivered in the background"
                    ))
                } else {
                    SendOutcome::failure(reason)
                }
            }
        }
    }

    /// Sends the account-approval notification to a newly approved user.
    pub async fn send_approval_notification(
        &self,
        to: &str,
        first_name: &str,
        password: &str,
    ) -> SendOutcome {
        let message = templates::approval_email(to, first_name, password, &self.frontend_base);
        self.send(&message).await
    }
}
