// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::router::Router;
use crate::service::IncomingMessage;

/// Feed incoming messages to the router one at a time, in arrival order.
///
/// When the router has a refresh interval, both color frames are also
/// re-sent on every tick, starting right away. Ticks and messages share this
/// task, so a refresh never interleaves with a dispatch.
///
/// Returns when `shutdown` is cancelled or the event loop drops its sender.
pub async fn run_dispatcher(
    router: Arc<Router>,
    mut messages: UnboundedReceiver<IncomingMessage>,
    shutdown: CancellationToken,
) {
    let mut refresh = router
        .refresh_interval()
        .filter(|period| !period.is_zero())
        .map(|period| {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker
        });

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = next_tick(&mut refresh) => {
                router.refresh().await;
            }
            message = messages.recv() => {
                let Some(message) = message else {
                    tracing::debug!("Message channel closed, stopping dispatcher");
                    break;
                };
                router.dispatch(&message.topic, &message.payload).await;
            }
        }
    }
}

/// Wait for the next refresh tick. Never resolves without a ticker.
async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}
