// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors handing a message to the broker client.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The MQTT client rejected the request (e.g. its event loop is gone).
    #[error("MQTT client error on topic '{topic}': {source}")]
    Client {
        topic: String,
        #[source]
        source: rumqttc::ClientError,
    },

    /// The command payload could not be serialized.
    #[error("Failed to encode payload for topic '{topic}': {source}")]
    Encode {
        topic: String,
        #[source]
        source: serde_json::Error,
    },

    /// Publishing was refused by a publisher implementation.
    #[error("Publish to '{topic}' rejected: {reason}")]
    Rejected { topic: String, reason: String },
}
