// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::errors::PublishError;
use crate::traits::Publisher;

/// A message captured by [`RecordingPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

/// A publisher that keeps every message in memory instead of sending it.
///
/// Topics registered with [`RecordingPublisher::failing_on`] are rejected
/// and not recorded.
#[derive(Default)]
pub struct RecordingPublisher {
    messages: Mutex<Vec<PublishedMessage>>,
    failing_topics: HashSet<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, topic: impl Into<String>) -> Self {
        self.failing_topics.insert(topic.into());
        self
    }

    /// Messages published so far, in order.
    pub fn messages(&self) -> Vec<PublishedMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn messages_on(&self, topic: &str) -> Vec<PublishedMessage> {
        self.messages()
            .into_iter()
            .filter(|m| m.topic == topic)
            .collect()
    }
}

#[async_trait::async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), PublishError> {
        if self.failing_topics.contains(topic) {
            return Err(PublishError::Rejected {
                topic: topic.to_string(),
                reason: "Simulated publish failure".to_string(),
            });
        }

        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(PublishedMessage {
                topic: topic.to_string(),
                payload,
            });
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// A publisher that rejects everything
pub struct FailingPublisher;

#[async_trait::async_trait]
impl Publisher for FailingPublisher {
    async fn publish(&self, topic: &str, _payload: Vec<u8>) -> Result<(), PublishError> {
        Err(PublishError::Rejected {
            topic: topic.to_string(),
            reason: "Simulated publish failure".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_keeps_order() {
        let publisher = RecordingPublisher::new();
        publisher.publish("a", vec![1]).await.unwrap();
        publisher.publish("b", vec![2]).await.unwrap();
        publisher.publish("a", vec![3]).await.unwrap();

        let topics: Vec<_> = publisher.messages().into_iter().map(|m| m.topic).collect();
        assert_eq!(topics, vec!["a", "b", "a"]);
        assert_eq!(publisher.messages_on("a").len(), 2);
    }

    #[tokio::test]
    async fn test_failing_topic_is_not_recorded() {
        let publisher = RecordingPublisher::new().failing_on("b");

        assert!(publisher.publish("b", vec![2]).await.is_err());
        assert!(publisher.publish("a", vec![1]).await.is_ok());
        assert_eq!(publisher.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_publisher() {
        let result = FailingPublisher.publish("x", vec![]).await;
        assert!(matches!(result, Err(PublishError::Rejected { .. })));
    }
}
