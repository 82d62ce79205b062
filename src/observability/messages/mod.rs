// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at the right level with its fields attached.
//!
//! # Organization
//!
//! * `connection` - Broker connection, subscription and shutdown events
//! * `router` - Message dispatch, frame publishing and buzzer events
//!
//! # Usage Pattern
//!
//! ```rust
//! use keypad_router::observability::messages::router::MessageReceived;
//! use keypad_router::observability::messages::StructuredLog;
//!
//! let msg = MessageReceived {
//!     topic: "/unicorn",
//!     payload: b"mx-blue.connect",
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod connection;
pub mod router;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its level.
    fn log(&self);

    /// A span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
