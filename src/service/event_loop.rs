// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rumqttc::{AsyncClient, ConnectionError, Event, EventLoop, Outgoing, Packet, QoS};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::observability::messages::connection::{
    self, Connected, ConnectionRefused, EventLoopStopped, SubscribeFailed, Subscribed,
};
use crate::observability::messages::StructuredLog;
use crate::service::IncomingMessage;

/// How long to keep polling after a disconnect request so it reaches the broker.
const DISCONNECT_GRACE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct EventLoopSettings {
    pub subscriptions: Vec<String>,
    pub reconnect_delay: Duration,
}

/// Poll the broker connection until `shutdown` is cancelled.
///
/// Subscriptions are (re)issued after every successful `ConnAck` since the
/// session is clean. Connection errors are logged and polling resumes after
/// `reconnect_delay`; the client reconnects on the next poll.
pub async fn run_event_loop(
    mut event_loop: EventLoop,
    client: AsyncClient,
    settings: EventLoopSettings,
    messages: UnboundedSender<IncomingMessage>,
    shutdown: CancellationToken,
) {
    loop {
        let event = tokio::select! {
            _ = shutdown.cancelled() => break,
            event = event_loop.poll() => event,
        };

        match event {
            Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                Connected {
                    session_present: ack.session_present,
                }
                .log();
                subscribe_all(&client, &settings.subscriptions);
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let message = IncomingMessage {
                    topic: publish.topic,
                    payload: publish.payload.to_vec(),
                };
                if messages.send(message).is_err() {
                    tracing::warn!("Dispatcher is gone, stopping event loop");
                    break;
                }
            }
            Ok(event) => tracing::trace!(?event, "MQTT event"),
            Err(ConnectionError::ConnectionRefused(code)) => {
                ConnectionRefused { return_code: &code }.log();
                if wait_or_shutdown(settings.reconnect_delay, &shutdown).await {
                    break;
                }
            }
            Err(error) => {
                connection::ConnectionError {
                    error: &error,
                    retry_in: settings.reconnect_delay,
                }
                .log();
                if wait_or_shutdown(settings.reconnect_delay, &shutdown).await {
                    break;
                }
            }
        }
    }

    EventLoopStopped.log();
    disconnect(&mut event_loop, &client).await;
}

/// Queue every subscription from a separate task.
///
/// `subscribe` waits for room in the client's request queue and only the
/// event loop drains that queue. A full queue delays the subscriptions but
/// never drops them.
fn subscribe_all(client: &AsyncClient, topics: &[String]) {
    let client = client.clone();
    let topics = topics.to_vec();

    tokio::spawn(async move {
        for topic in &topics {
            match client.subscribe(topic.as_str(), QoS::AtMostOnce).await {
                Ok(()) => Subscribed { topic }.log(),
                Err(error) => SubscribeFailed {
                    topic,
                    error: &error,
                }
                .log(),
            }
        }
    });
}

/// Sleep for `delay`. Returns true if shutdown was requested meanwhile.
async fn wait_or_shutdown(delay: Duration, shutdown: &CancellationToken) -> bool {
    tokio::select! {
        _ = shutdown.cancelled() => true,
        _ = tokio::time::sleep(delay) => false,
    }
}

/// Queue a disconnect and poll until it has been written or the grace period ends.
async fn disconnect(event_loop: &mut EventLoop, client: &AsyncClient) {
    if client.try_disconnect().is_err() {
        return;
    }

    let flushed = tokio::time::timeout(DISCONNECT_GRACE, async {
        loop {
            match event_loop.poll().await {
                Ok(Event::Outgoing(Outgoing::Disconnect)) | Err(_) => break,
                Ok(_) => continue,
            }
        }
    })
    .await;

    if flushed.is_err() {
        tracing::debug!("Disconnect not confirmed within {:?}", DISCONNECT_GRACE);
    }
}
