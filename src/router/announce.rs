// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::FrameError;
use crate::frame::Palette;
use crate::observability::messages::router::{FrameBuildFailed, FramePublished, PublishFailed};
use crate::observability::messages::StructuredLog;
use crate::router::{PublishTally, Router};

/// An encoded frame ready to publish.
struct EncodedFrame<'a> {
    topic: &'a str,
    led_count: usize,
    payload: Vec<u8>,
}

fn encode_palette<'a>(
    name: &'static str,
    topic: &'a str,
    palette: &Palette,
) -> Result<EncodedFrame<'a>, (&'static str, FrameError)> {
    let frame = palette.to_frame().map_err(|e| (name, e))?;
    let payload = frame.encode().map_err(|e| (name, e))?;
    Ok(EncodedFrame {
        topic,
        led_count: frame.len(),
        payload,
    })
}

impl Router {
    /// Publish both full-pad color frames: released first, then pressed.
    ///
    /// Both frames are built before anything is sent, so a bad palette means
    /// neither frame goes out. A failed publish does not stop the other one.
    pub(super) async fn handle_announce(&self) -> PublishTally {
        let mut tally = PublishTally::default();

        let frames = encode_palette("released", &self.topics.released, &self.colors.released)
            .and_then(|released| {
                let pressed =
                    encode_palette("pressed", &self.topics.pressed, &self.colors.pressed)?;
                Ok([released, pressed])
            });

        let frames = match frames {
            Ok(frames) => frames,
            Err((palette, error)) => {
                FrameBuildFailed {
                    palette,
                    error: &error,
                }
                .log();
                return tally;
            }
        };

        for frame in frames {
            let payload_size = frame.payload.len();
            let result = self.publisher.publish(frame.topic, frame.payload).await;
            match &result {
                Ok(()) => FramePublished {
                    topic: frame.topic,
                    led_count: frame.led_count,
                    payload_size,
                }
                .log(),
                Err(error) => PublishFailed {
                    topic: frame.topic,
                    error,
                }
                .log(),
            }
            tally.count(&result);
        }

        tally
    }
}
