// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use rumqttc::{AsyncClient, QoS};

use crate::errors::PublishError;
use crate::traits::Publisher;

/// Publishes through a live `rumqttc` client.
///
/// Messages go out at-most-once and unretained. `AsyncClient` only queues the
/// request; the service's event loop task does the actual network write.
#[derive(Clone)]
pub struct MqttPublisher {
    client: AsyncClient,
    qos: QoS,
}

impl MqttPublisher {
    pub fn new(client: AsyncClient) -> Self {
        Self {
            client,
            qos: QoS::AtMostOnce,
        }
    }
}

#[async_trait]
impl Publisher for MqttPublisher {
    async fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), PublishError> {
        self.client
            .publish(topic, self.qos, false, payload)
            .await
            .map_err(|source| PublishError::Client {
                topic: topic.to_string(),
                source,
            })
    }

    fn name(&self) -> &'static str {
        "mqtt"
    }
}
