// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for dispatch and handler events.
//!
//! This module contains message types for logging events related to:
//! * Router startup and periodic refresh
//! * Incoming messages, keystroke decoding and key actions
//! * LED frame construction and publishing
//! * Buzzer triggers and command forwarding

use crate::keypad::KeyEvent;
use std::time::Duration;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Router constructed and bound to its publisher.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RouterReady<'a> {
    pub backend: &'a str,
    pub keys_with_actions: usize,
    pub refresh_interval: Option<Duration>,
}

impl Display for RouterReady<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Router ready, publishing via '{}'", self.backend)
    }
}

impl StructuredLog for RouterReady<'_> {
    fn log(&self) {
        tracing::info!(
            backend = self.backend,
            keys_with_actions = self.keys_with_actions,
            refresh_interval = ?self.refresh_interval,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("router", span_name = name, backend = self.backend)
    }
}

/// Periodic refresh of both color frames.
///
/// # Log Level
/// `debug!`
pub struct RefreshTick;

impl Display for RefreshTick {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Refreshing color frames")
    }
}

impl StructuredLog for RefreshTick {
    fn log(&self) {
        tracing::debug!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("refresh", span_name = name)
    }
}

/// A message arrived on a subscribed topic.
///
/// # Log Level
/// `info!` - Every message is logged
///
/// # Example
/// ```
/// use keypad_router::observability::messages::router::MessageReceived;
///
/// let msg = MessageReceived { topic: "xuhaktu/buzzer", payload: b"+0" };
/// assert_eq!(msg.to_string(), "Received `+0` from `xuhaktu/buzzer` topic");
/// ```
pub struct MessageReceived<'a> {
    pub topic: &'a str,
    pub payload: &'a [u8],
}

impl Display for MessageReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Received `{}` from `{}` topic",
            String::from_utf8_lossy(self.payload),
            self.topic
        )
    }
}

impl StructuredLog for MessageReceived<'_> {
    fn log(&self) {
        tracing::info!(
            topic = self.topic,
            payload_size = self.payload.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "dispatch",
            span_name = name,
            topic = self.topic,
            payload_size = self.payload.len(),
        )
    }
}

/// Keystroke payload decoded.
///
/// # Log Level
/// `debug!`
pub struct KeystrokeDecoded<'a> {
    pub event: &'a KeyEvent,
}

impl Display for KeystrokeDecoded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Keystroke: {}", self.event)
    }
}

impl StructuredLog for KeystrokeDecoded<'_> {
    fn log(&self) {
        let (row, column) = self.event.position();
        tracing::debug!(
            key = self.event.index,
            row,
            column,
            action = ?self.event.action,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "keystroke",
            span_name = name,
            key = self.event.index,
            action = ?self.event.action,
        )
    }
}

/// Keystroke payload could not be decoded.
///
/// # Log Level
/// `warn!` - Unexpected input, no action taken
pub struct KeystrokeUndecodable<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for KeystrokeUndecodable<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Could not decode keystroke: {}", self.error)
    }
}

impl StructuredLog for KeystrokeUndecodable<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("keystroke_undecodable", span_name = name, error = %self.error)
    }
}

/// A configured key action was published.
///
/// # Log Level
/// `info!`
pub struct KeyActionPublished<'a> {
    pub event: &'a KeyEvent,
    pub topic: &'a str,
}

impl Display for KeyActionPublished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Applied action for {}: published to '{}'", self.event, self.topic)
    }
}

impl StructuredLog for KeyActionPublished<'_> {
    fn log(&self) {
        tracing::info!(
            key = self.event.index,
            action = ?self.event.action,
            topic = self.topic,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "key_action",
            span_name = name,
            key = self.event.index,
            topic = self.topic,
        )
    }
}

/// Announce frame could not be built.
///
/// # Log Level
/// `error!` - Nothing is published for this announce
pub struct FrameBuildFailed<'a> {
    pub palette: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for FrameBuildFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to build '{}' color frame: {}",
            self.palette, self.error
        )
    }
}

impl StructuredLog for FrameBuildFailed<'_> {
    fn log(&self) {
        tracing::error!(palette = self.palette, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "frame_build_failed",
            span_name = name,
            palette = self.palette,
            error = %self.error,
        )
    }
}

/// Color frame handed to the publisher.
///
/// # Log Level
/// `debug!`
pub struct FramePublished<'a> {
    pub topic: &'a str,
    pub led_count: usize,
    pub payload_size: usize,
}

impl Display for FramePublished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Published {} LED colors ({} bytes) to '{}'",
            self.led_count, self.payload_size, self.topic
        )
    }
}

impl StructuredLog for FramePublished<'_> {
    fn log(&self) {
        tracing::debug!(
            topic = self.topic,
            led_count = self.led_count,
            payload_size = self.payload_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "frame_published",
            span_name = name,
            topic = self.topic,
            led_count = self.led_count,
        )
    }
}

/// A publish failed. Not retried.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PublishFailed<'a> {
    pub topic: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for PublishFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to send message to topic {}: {}", self.topic, self.error)
    }
}

impl StructuredLog for PublishFailed<'_> {
    fn log(&self) {
        tracing::error!(topic = self.topic, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "publish_failed",
            span_name = name,
            topic = self.topic,
            error = %self.error,
        )
    }
}

/// Buzzer triggered.
///
/// # Log Level
/// `info!`
pub struct Buzz;

impl Display for Buzz {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "buzz")
    }
}

impl StructuredLog for Buzz {
    fn log(&self) {
        tracing::info!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("buzz", span_name = name)
    }
}

/// Buzz command forwarded.
///
/// # Log Level
/// `info!`
pub struct BuzzForwarded<'a> {
    pub topic: &'a str,
    pub payload: &'a str,
}

impl Display for BuzzForwarded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Send `{}` to topic `{}`", self.payload, self.topic)
    }
}

impl StructuredLog for BuzzForwarded<'_> {
    fn log(&self) {
        tracing::info!(topic = self.topic, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("buzz_forwarded", span_name = name, topic = self.topic)
    }
}
