// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::PublishError;

/// Outbound side of the broker connection.
///
/// The router only ever needs to hand a payload to a topic; everything about
/// the connection itself stays in the backend.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), PublishError>;

    fn name(&self) -> &'static str;
}
