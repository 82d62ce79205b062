// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Publisher backends.
//!
//! # Available Backends
//!
//! ## MQTT Backend
//! Publishes through a `rumqttc::AsyncClient`. The client only queues
//! requests; the event loop owned by [`crate::service`] drives the socket.
//!
//! ## Stub Backend (Test-Only)
//! Testing utilities for the router (only available in test builds):
//! - **RecordingPublisher**: Captures every publish, can reject chosen topics
//! - **FailingPublisher**: Rejects every publish
//!
//! # Architecture
//!
//! ```text
//! Router → dyn Publisher → MqttPublisher → AsyncClient → EventLoop → broker
//! ```

pub mod mqtt;
#[cfg(test)]
pub mod stub;

pub use mqtt::MqttPublisher;
