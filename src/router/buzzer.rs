// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::config::consts::BUZZ_TRIGGER;
use crate::errors::PublishError;
use crate::observability::messages::router::{Buzz, BuzzForwarded, PublishFailed};
use crate::observability::messages::StructuredLog;
use crate::router::{PublishTally, Router};

/// JSON command sent to the buzzer's command topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuzzCommand<'a> {
    pub args: &'a str,
    pub user: &'a str,
}

impl Router {
    /// Log a buzz when the payload is exactly `+0` and, if enabled, forward
    /// a buzz command. Any other payload is ignored.
    pub(super) async fn handle_buzzer(&self, payload: &[u8]) -> PublishTally {
        let mut tally = PublishTally::default();

        if payload != BUZZ_TRIGGER {
            return tally;
        }

        Buzz.log();

        if !self.buzzer.forward {
            return tally;
        }

        let topic = self.buzzer.command_topic.as_str();
        let command = BuzzCommand {
            args: &self.buzzer.args,
            user: &self.buzzer.user,
        };

        let result = match serde_json::to_vec(&command) {
            Ok(body) => {
                let sent = body.clone();
                self.publisher.publish(topic, body).await.map(|()| sent)
            }
            Err(source) => Err(PublishError::Encode {
                topic: topic.to_string(),
                source,
            }),
        };

        match &result {
            Ok(body) => BuzzForwarded {
                topic,
                payload: &String::from_utf8_lossy(body),
            }
            .log(),
            Err(error) => PublishFailed { topic, error }.log(),
        }
        tally.count(&result);

        tally
    }
}
