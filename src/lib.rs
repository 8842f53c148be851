//! Mailgate - bounded-latency transactional email dispatch
//!
//! This library provides the notification dispatcher used by the web
//! application's account workflows: a thin wrapper around an SMTP transport
//! that guarantees callers a response within a fixed time bound, even when
//! the mail server is slow or unresponsive.

pub mod config;
pub mod core;
pub mod notification;

// Re-export core types for convenience
pub use self::core::{EmailMessage, EmailTransport, SendOutcome};
pub use self::notification::dispatcher::Mailer;

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber for the embedding application.
///
/// The `RUST_LOG` environment variable takes precedence over the supplied
/// default level. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
