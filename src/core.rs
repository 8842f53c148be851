//! Core domain types and service traits for Mailgate
//!
//! This module defines the value objects exchanged with callers and the
//! trait contract the dispatcher holds against the mail transport.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single outgoing email. Exists only for the duration of one send call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EmailMessage {
    /// The recipient address.
    pub to: String,
    /// The subject line.
    pub subject: String,
    /// The HTML body, treated as an opaque payload.
    pub html: String,
}

impl EmailMessage {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }
}

/// The structured result returned to callers for every send.
///
/// The dispatcher never returns an `Err` or panics from a send; all failure
/// modes are folded into this value so callers decide their own behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendOutcome {
    /// Whether the transport accepted the message within the time bound.
    pub success: bool,
    /// Human-readable failure reason, present only when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendOutcome {
    /// The message was accepted by the transport.
    pub fn delivered() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// The send failed with the given reason.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Hands a message to the external mail transport.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// A unique, descriptive name for the transport (e.g., "smtp").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Sends a single message.
    ///
    /// # Arguments
    /// * `from` - The sender identity, always the configured account.
    /// * `message` - The message to deliver.
    ///
    /// # Returns
    /// * `Ok(message_id)` with the provider-assigned identifier on success
    /// * `Err` if the transport rejected the message or could not be reached
    async fn send_message(&self, from: &str, message: &EmailMessage) -> Result<String>;
}
