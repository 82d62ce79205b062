// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the broker connection lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Connecting and connection acknowledgements
//! * Topic subscriptions
//! * Connection errors and shutdown

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Connection attempt starting.
///
/// # Log Level
/// `info!` - Important operational event
pub struct Connecting<'a> {
    pub host: &'a str,
    pub port: u16,
    pub client_id: &'a str,
}

impl Display for Connecting<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Connecting to MQTT broker {}:{} as '{}'",
            self.host, self.port, self.client_id
        )
    }
}

impl StructuredLog for Connecting<'_> {
    fn log(&self) {
        tracing::info!(
            host = self.host,
            port = self.port,
            client_id = self.client_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "connection",
            span_name = name,
            host = self.host,
            port = self.port,
            client_id = self.client_id,
        )
    }
}

/// Broker accepted the connection.
///
/// # Log Level
/// `info!` - Important operational event
pub struct Connected {
    pub session_present: bool,
}

impl Display for Connected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Connected to MQTT Broker!")
    }
}

impl StructuredLog for Connected {
    fn log(&self) {
        tracing::info!(session_present = self.session_present, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "connected",
            span_name = name,
            session_present = self.session_present,
        )
    }
}

/// Broker refused the connection.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConnectionRefused<'a> {
    pub return_code: &'a dyn std::fmt::Debug,
}

impl Display for ConnectionRefused<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to connect, return code {:?}", self.return_code)
    }
}

impl StructuredLog for ConnectionRefused<'_> {
    fn log(&self) {
        tracing::error!(return_code = ?self.return_code, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "connection_refused",
            span_name = name,
            return_code = ?self.return_code,
        )
    }
}

/// Subscription request queued.
///
/// # Log Level
/// `info!` - Important operational event
pub struct Subscribed<'a> {
    pub topic: &'a str,
}

impl Display for Subscribed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Subscribed to topic '{}'", self.topic)
    }
}

impl StructuredLog for Subscribed<'_> {
    fn log(&self) {
        tracing::info!(topic = self.topic, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("subscribe", span_name = name, topic = self.topic)
    }
}

/// Subscription request could not be queued.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct SubscribeFailed<'a> {
    pub topic: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SubscribeFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to subscribe to '{}': {}", self.topic, self.error)
    }
}

impl StructuredLog for SubscribeFailed<'_> {
    fn log(&self) {
        tracing::error!(topic = self.topic, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "subscribe_failed",
            span_name = name,
            topic = self.topic,
            error = %self.error,
        )
    }
}

/// Event loop reported a connection error; polling resumes after `retry_in`.
///
/// # Log Level
/// `warn!` - Degraded but recoverable
pub struct ConnectionError<'a> {
    pub error: &'a dyn std::error::Error,
    pub retry_in: Duration,
}

impl Display for ConnectionError<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "MQTT connection error: {}, retrying in {:?}",
            self.error, self.retry_in
        )
    }
}

impl StructuredLog for ConnectionError<'_> {
    fn log(&self) {
        tracing::warn!(
            error = %self.error,
            retry_in_ms = self.retry_in.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "connection_error",
            span_name = name,
            error = %self.error,
            retry_in = ?self.retry_in,
        )
    }
}

/// Event loop leaving, either on shutdown or because the dispatcher is gone.
///
/// # Log Level
/// `warn!` - The router stops receiving messages
pub struct EventLoopStopped;

impl Display for EventLoopStopped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Stopping MQTT event loop and disconnecting")
    }
}

impl StructuredLog for EventLoopStopped {
    fn log(&self) {
        tracing::warn!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("event_loop_stopped", span_name = name)
    }
}
