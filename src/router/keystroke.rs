// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::keypad::KeyEvent;
use crate::observability::messages::router::{
    KeyActionPublished, KeystrokeDecoded, KeystrokeUndecodable, PublishFailed,
};
use crate::observability::messages::StructuredLog;
use crate::router::{PublishTally, Router};

impl Router {
    /// Log a keystroke and publish the actions configured for it.
    ///
    /// The pad's colors are refreshed by the announce handler that runs right
    /// after this one, whether or not the keystroke decoded.
    pub(super) async fn handle_keystroke(&self, payload: &[u8]) -> PublishTally {
        let mut tally = PublishTally::default();

        let event = match KeyEvent::parse(payload) {
            Ok(event) => event,
            Err(error) => {
                KeystrokeUndecodable { error: &error }.log();
                return tally;
            }
        };
        KeystrokeDecoded { event: &event }.log();

        let Some(actions) = self.actions.get(&event.index) else {
            return tally;
        };

        for action in actions.for_action(event.action) {
            let topic = action.topic.as_str();
            let result = self
                .publisher
                .publish(topic, action.payload.clone().into_bytes())
                .await;
            match &result {
                Ok(()) => KeyActionPublished { event: &event, topic }.log(),
                Err(error) => PublishFailed { topic, error }.log(),
            }
            tally.count(&result);
        }

        tally
    }
}
