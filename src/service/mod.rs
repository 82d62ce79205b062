// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Broker connection and message pump.
//!
//! Two tasks run until the shutdown token is cancelled:
//!
//! ```text
//! EventLoop task ──(IncomingMessage, unbounded mpsc)──► dispatcher task ──► Router
//!      ▲                                                                     │
//!      └──────────────── AsyncClient request queue ◄── MqttPublisher ◄───────┘
//! ```
//!
//! The event loop task only polls the socket and forwards publishes. Routing
//! and publishing happen on the dispatcher task, so a publish waiting on the
//! client's request queue never stalls polling. Messages are dispatched one at
//! a time in arrival order.

mod dispatcher;
mod event_loop;

use rumqttc::{AsyncClient, EventLoop, MqttOptions};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::backends::MqttPublisher;
use crate::config::consts::CLIENT_REQUEST_CAPACITY;
use crate::config::Config;
use crate::observability::messages::connection::Connecting;
use crate::observability::messages::StructuredLog;
use crate::router::Router;

pub use dispatcher::run_dispatcher;
pub use event_loop::{run_event_loop, EventLoopSettings};

/// A message received on one of the subscribed topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub topic: String,
    pub payload: Vec<u8>,
}

/// Build client options from config. The connection is anonymous.
pub fn mqtt_options(config: &Config, client_id: &str) -> MqttOptions {
    let mut options = MqttOptions::new(client_id, &config.broker.host, config.broker.port);
    options.set_keep_alive(config.broker.keep_alive());
    options.set_clean_session(true);
    options
}

/// The running router: client, event loop and dispatcher.
pub struct Service {
    client: AsyncClient,
    event_loop: EventLoop,
    router: Arc<Router>,
    settings: EventLoopSettings,
}

impl Service {
    /// Create the client. Nothing touches the network until [`Service::run`].
    pub fn new(config: &Config) -> Self {
        let client_id = config.broker.resolve_client_id();
        Connecting {
            host: &config.broker.host,
            port: config.broker.port,
            client_id: &client_id,
        }
        .log();

        let options = mqtt_options(config, &client_id);
        let (client, event_loop) = AsyncClient::new(options, CLIENT_REQUEST_CAPACITY);

        let publisher = Arc::new(MqttPublisher::new(client.clone()));
        let router = Arc::new(Router::new(config, publisher));

        let settings = EventLoopSettings {
            subscriptions: config
                .topics
                .subscriptions()
                .iter()
                .map(|t| t.to_string())
                .collect(),
            reconnect_delay: config.broker.reconnect_delay(),
        };

        Self {
            client,
            event_loop,
            router,
            settings,
        }
    }

    /// Run until `shutdown` is cancelled.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), tokio::task::JoinError> {
        let (tx, rx) = mpsc::unbounded_channel();

        let pump = tokio::spawn(run_event_loop(
            self.event_loop,
            self.client,
            self.settings,
            tx,
            shutdown.clone(),
        ));
        let dispatch = tokio::spawn(run_dispatcher(self.router, rx, shutdown));

        let (pump, dispatch) = tokio::join!(pump, dispatch);
        pump?;
        dispatch?;
        Ok(())
    }
}
