// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Topic dispatch.
//!
//! Every incoming message goes through [`Router::dispatch`], which checks
//! three conditions in order and runs the matching handlers:
//!
//! | Condition | Handlers |
//! |---|---|
//! | topic is the keypad topic | keystroke (and its key actions), then announce |
//! | topic is the buzzer topic | buzzer |
//! | topic is the announce topic and payload starts with the prefix | announce |
//!
//! The conditions are independent, so if two configured topics are the same
//! string, every matching branch runs. [`Router::refresh`] re-sends both
//! color frames outside of any message. Handlers never fail outward: errors
//! are logged where they happen and the next message is processed normally.

mod announce;
mod buzzer;
mod keystroke;

#[cfg(test)]
mod integration_tests;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

use crate::config::{BuzzerConfig, ColorConfig, Config, KeyActions, TopicConfig};
use crate::observability::messages::router::{MessageReceived, RefreshTick, RouterReady};
use crate::observability::messages::StructuredLog;
use crate::traits::Publisher;

pub use buzzer::BuzzCommand;

/// Which handler ran for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Keystroke,
    Announce,
    Buzzer,
    Refresh,
}

/// What a single dispatch did. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub handlers: Vec<Handler>,
    pub published: usize,
    pub failed: usize,
}

impl DispatchReport {
    fn record(&mut self, handler: Handler, tally: PublishTally) {
        self.handlers.push(handler);
        self.published += tally.published;
        self.failed += tally.failed;
    }

    /// True if no handler matched the message.
    pub fn is_noop(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Publish outcomes of one handler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PublishTally {
    published: usize,
    failed: usize,
}

impl PublishTally {
    fn count<T, E>(&mut self, result: &Result<T, E>) {
        match result {
            Ok(_) => self.published += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// Routes broker messages to the keypad handlers.
pub struct Router {
    publisher: Arc<dyn Publisher>,
    topics: TopicConfig,
    announce_prefix: String,
    colors: ColorConfig,
    buzzer: BuzzerConfig,
    actions: BTreeMap<u8, KeyActions>,
    refresh_interval: Option<Duration>,
}

impl Router {
    pub fn new(config: &Config, publisher: Arc<dyn Publisher>) -> Self {
        RouterReady {
            backend: publisher.name(),
            keys_with_actions: config.actions.len(),
            refresh_interval: config.refresh_interval,
        }
        .log();

        Self {
            publisher,
            topics: config.topics.clone(),
            announce_prefix: config.announce_prefix.clone(),
            colors: config.colors.clone(),
            buzzer: config.buzzer.clone(),
            actions: config.actions.clone(),
            refresh_interval: config.refresh_interval,
        }
    }

    pub fn topics(&self) -> &TopicConfig {
        &self.topics
    }

    /// How often [`Router::refresh`] should run, if at all.
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval
    }

    /// Handle one incoming message.
    pub async fn dispatch(&self, topic: &str, payload: &[u8]) -> DispatchReport {
        let received = MessageReceived { topic, payload };
        let span = received.span("dispatch");
        received.log();

        async {
            let mut report = DispatchReport::default();

            if topic == self.topics.keypad {
                report.record(Handler::Keystroke, self.handle_keystroke(payload).await);
                report.record(Handler::Announce, self.handle_announce().await);
            }

            if topic == self.topics.buzzer {
                report.record(Handler::Buzzer, self.handle_buzzer(payload).await);
            }

            if topic == self.topics.announce && payload.starts_with(self.announce_prefix.as_bytes()) {
                report.record(Handler::Announce, self.handle_announce().await);
            }

            tracing::debug!(?report, "Dispatch finished");
            report
        }
        .instrument(span)
        .await
    }

    /// Re-send both color frames, as for an announce.
    pub async fn refresh(&self) -> DispatchReport {
        let span = RefreshTick.span("refresh");
        RefreshTick.log();

        async {
            let mut report = DispatchReport::default();
            report.record(Handler::Refresh, self.handle_announce().await);
            report
        }
        .instrument(span)
        .await
    }
}
