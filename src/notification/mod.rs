//! Handles the dispatching of transactional email notifications.
//!
//! This module defines the bounded-latency dispatcher and its collaborators.
//! The dispatcher wraps a mail transport behind a fixed per-call time bound
//! so that a slow or hung mail server can never stall an account workflow
//! indefinitely. All notification types are expressed as HTML builders
//! layered over the single bounded send primitive.

pub mod dispatcher;
pub mod smtp;
pub mod templates;

pub use dispatcher::Mailer;
