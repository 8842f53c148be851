#![allow(dead_code)]
//! Fake mail transports for exercising the dispatcher.

use async_trait::async_trait;
use mailgate::core::{EmailMessage, EmailTransport};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const FAKE_MESSAGE_ID: &str = "250 2.0.0 OK queued as fake-0001";

/// A fake transport that records every message it is handed and succeeds.
#[derive(Clone)]
pub struct RecordingTransport {
    pub sent: Arc<Mutex<Vec<(String, EmailMessage)>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent_messages(&self) -> Vec<(String, EmailMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording_fake"
    }

    async fn send_message(&self, from: &str, message: &EmailMessage) -> anyhow::Result<String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push((from.to_string(), message.clone()));
        Ok(FAKE_MESSAGE_ID.to_string())
    }
}

/// A fake transport that rejects every message with a fixed reason.
pub struct RejectingTransport {
    pub reason: String,
}

impl RejectingTransport {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl EmailTransport for RejectingTransport {
    fn name(&self) -> &str {
        "rejecting_fake"
    }

    async fn send_message(&self, _from: &str, _message: &EmailMessage) -> anyhow::Result<String> {
        Err(anyhow::anyhow!(self.reason.clone()))
    }
}

/// A fake transport that never settles, simulating a hung mail server.
pub struct StalledTransport;

#[async_trait]
impl EmailTransport for StalledTransport {
    fn name(&self) -> &str {
        "stalled_fake"
    }

    async fn send_message(&self, _from: &str, _message: &EmailMessage) -> anyhow::Result<String> {
        std::future::pending().await
    }
}

/// A fake transport that succeeds after a fixed delay, recording the send.
#[derive(Clone)]
pub struct DelayedTransport {
    pub delay: Duration,
    pub sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl DelayedTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailTransport for DelayedTransport {
    fn name(&self) -> &str {
        "delayed_fake"
    }

    async fn send_message(&self, _from: &str, message: &EmailMessage) -> anyhow::Result<String> {
        tokio::time::sleep(self.delay).await;
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(FAKE_MESSAGE_ID.to_string())
    }
}
