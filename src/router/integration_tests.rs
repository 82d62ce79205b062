// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::stub::{FailingPublisher, RecordingPublisher};
use crate::config::{Config, KeyActions, PublishAction};
use crate::frame::Palette;
use crate::router::{Handler, Router};

const KEYPAD: &str = "mx-blue/arr/out";
const BUZZER: &str = "xuhaktu/buzzer";
const ANNOUNCE: &str = "/unicorn";
const RELEASED: &str = "mx-blue/arr/released";
const PRESSED: &str = "mx-blue/arr/pressed";

fn router_with(config: Config) -> (Router, Arc<RecordingPublisher>) {
    let publisher = Arc::new(RecordingPublisher::new());
    let router = Router::new(&config, publisher.clone());
    (router, publisher)
}

fn assert_full_frame(payload: &[u8], color: [u8; 3]) {
    assert_eq!(payload.len(), 79);
    assert_eq!(&payload[..4], &[0, 0, 0, 25]);
    for triple in payload[4..].chunks(3) {
        assert_eq!(triple, &color);
    }
}

#[tokio::test]
async fn test_announce_publishes_two_frames() {
    let (router, publisher) = router_with(Config::default());

    let report = router.dispatch(ANNOUNCE, b"mx-blue.connect").await;

    assert_eq!(report.handlers, vec![Handler::Announce]);
    assert_eq!(report.published, 2);
    assert_eq!(report.failed, 0);

    let messages = publisher.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].topic, RELEASED);
    assert_full_frame(&messages[0].payload, [0x00, 0xff, 0x00]);
    assert_eq!(messages[1].topic, PRESSED);
    assert_full_frame(&messages[1].payload, [0x00, 0x00, 0x00]);
}

#[tokio::test]
async fn test_announce_prefix_match_table_driven() {
    struct TestCase {
        payload: &'static [u8],
        expected_publishes: usize,
    }

    let test_cases = vec![
        TestCase { payload: b"mx-blue.connect", expected_publishes: 2 },
        TestCase { payload: b"mx-blue.connect 192.168.1.20", expected_publishes: 2 },
        TestCase { payload: b"mx-blue.connected", expected_publishes: 2 },
        TestCase { payload: b"mx-blue.disconnect", expected_publishes: 0 },
        TestCase { payload: b" mx-blue.connect", expected_publishes: 0 },
        TestCase { payload: b"mx-blue", expected_publishes: 0 },
        TestCase { payload: b"", expected_publishes: 0 },
        TestCase { payload: &[0xff, 0xfe], expected_publishes: 0 },
    ];

    for case in test_cases {
        let (router, publisher) = router_with(Config::default());
        router.dispatch(ANNOUNCE, case.payload).await;
        assert_eq!(
            publisher.messages().len(),
            case.expected_publishes,
            "payload {:?}",
            String::from_utf8_lossy(case.payload)
        );
    }
}

#[tokio::test]
async fn test_keypad_message_logs_and_announces() {
    let (router, publisher) = router_with(Config::default());

    let report = router.dispatch(KEYPAD, b"+7").await;

    assert_eq!(report.handlers, vec![Handler::Keystroke, Handler::Announce]);
    let messages = publisher.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].topic, RELEASED);
    assert_eq!(messages[1].topic, PRESSED);
}

#[tokio::test]
async fn test_undecodable_keystroke_still_announces() {
    let (router, publisher) = router_with(Config::default());

    router.dispatch(KEYPAD, b"garbage").await;

    assert_eq!(publisher.messages().len(), 2);
}

#[tokio::test]
async fn test_buzzer_trigger_without_forwarding_publishes_nothing() {
    let (router, publisher) = router_with(Config::default());

    let report = router.dispatch(BUZZER, b"+0").await;

    assert_eq!(report.handlers, vec![Handler::Buzzer]);
    assert_eq!(report.published, 0);
    assert!(publisher.messages().is_empty());
}

#[tokio::test]
async fn test_buzzer_forwarding_table_driven() {
    struct TestCase {
        payload: &'static [u8],
        expect_forward: bool,
    }

    let test_cases = vec![
        TestCase { payload: b"+0", expect_forward: true },
        TestCase { payload: b"+0\n", expect_forward: false },
        TestCase { payload: b"0", expect_forward: false },
        TestCase { payload: b"-0", expect_forward: false },
        TestCase { payload: b"+1", expect_forward: false },
        TestCase { payload: b"", expect_forward: false },
    ];

    for case in test_cases {
        let mut config = Config::default();
        config.buzzer.forward = true;
        let (router, publisher) = router_with(config);

        router.dispatch(BUZZER, case.payload).await;

        let forwarded = publisher.messages_on("edi/cmd/sob");
        if case.expect_forward {
            assert_eq!(forwarded.len(), 1);
            let body: serde_json::Value = serde_json::from_slice(&forwarded[0].payload).unwrap();
            assert_eq!(body["args"], "hackbuzzer");
            assert_eq!(body["user"], "klausdieter");
        } else {
            assert!(forwarded.is_empty(), "payload {:?}", case.payload);
        }
        assert_eq!(publisher.messages().len(), forwarded.len());
    }
}

#[tokio::test]
async fn test_unrelated_topic_is_noop() {
    let (router, publisher) = router_with(Config::default());

    let report = router.dispatch("some/other/topic", b"mx-blue.connect").await;

    assert!(report.is_noop());
    assert!(publisher.messages().is_empty());
}

#[tokio::test]
async fn test_announce_prefix_on_wrong_topic_is_noop() {
    let (router, publisher) = router_with(Config::default());

    router.dispatch(BUZZER, b"mx-blue.connect").await;

    assert!(publisher.messages().is_empty());
}

#[tokio::test]
async fn test_malformed_palette_is_logged_not_published() {
    let mut config = Config::default();
    config.colors.pressed = Palette::uniform("00zz00");
    let (router, publisher) = router_with(config);

    let report = router.dispatch(ANNOUNCE, b"mx-blue.connect").await;

    assert_eq!(report.handlers, vec![Handler::Announce]);
    assert_eq!(report.published, 0);
    assert_eq!(report.failed, 0);
    assert!(publisher.messages().is_empty());

    // the router keeps working afterwards
    let report = router.dispatch(KEYPAD, b"+1").await;
    assert_eq!(report.handlers, vec![Handler::Keystroke, Handler::Announce]);
}

#[tokio::test]
async fn test_out_of_range_palette_key_is_logged_not_published() {
    let mut config = Config::default();
    config.colors.released = Palette::default_released().with_key(99, "ffffff");
    let (router, publisher) = router_with(config);

    router.dispatch(ANNOUNCE, b"mx-blue.connect").await;

    assert!(publisher.messages().is_empty());
}

#[tokio::test]
async fn test_first_publish_failure_does_not_stop_second() {
    let publisher = Arc::new(RecordingPublisher::new().failing_on(RELEASED));
    let router = Router::new(&Config::default(), publisher.clone());

    let report = router.dispatch(ANNOUNCE, b"mx-blue.connect").await;

    assert_eq!(report.published, 1);
    assert_eq!(report.failed, 1);
    let messages = publisher.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].topic, PRESSED);
}

#[tokio::test]
async fn test_failing_publisher_never_panics() {
    let mut config = Config::default();
    config.buzzer.forward = true;
    let router = Router::new(&config, Arc::new(FailingPublisher));

    let announce = router.dispatch(ANNOUNCE, b"mx-blue.connect").await;
    let buzz = router.dispatch(BUZZER, b"+0").await;

    assert_eq!(announce.failed, 2);
    assert_eq!(buzz.failed, 1);
}

#[tokio::test]
async fn test_shared_topic_runs_every_matching_branch() {
    let mut config = Config::default();
    config.topics.buzzer = KEYPAD.to_string();
    config.buzzer.forward = true;
    let (router, publisher) = router_with(config);

    let report = router.dispatch(KEYPAD, b"+0").await;

    assert_eq!(
        report.handlers,
        vec![Handler::Keystroke, Handler::Announce, Handler::Buzzer]
    );
    assert_eq!(publisher.messages().len(), 3);
}

#[tokio::test]
async fn test_custom_palette_reaches_the_wire() {
    let mut config = Config::default();
    config.colors.released = Palette::uniform("101010").with_key(24, "ff0000");
    let (router, publisher) = router_with(config);

    router.dispatch(ANNOUNCE, b"mx-blue.connect").await;

    let released = &publisher.messages_on(RELEASED)[0].payload;
    assert_eq!(&released[4..7], &[0x10, 0x10, 0x10]);
    assert_eq!(&released[76..79], &[0xff, 0x00, 0x00]);
}

fn config_with_hall_light() -> Config {
    let mut config = Config::default();
    config.actions.insert(
        4,
        KeyActions {
            on_press: vec![PublishAction {
                topic: "lights/hall".to_string(),
                payload: "on".to_string(),
            }],
            on_release: vec![
                PublishAction {
                    topic: "lights/hall".to_string(),
                    payload: "off".to_string(),
                },
                PublishAction {
                    topic: "door/bell".to_string(),
                    payload: "ring".to_string(),
                },
            ],
        },
    );
    config
}

#[tokio::test]
async fn test_key_actions_table_driven() {
    struct TestCase {
        payload: &'static [u8],
        expected: Vec<(&'static str, &'static str)>,
    }

    let test_cases = vec![
        TestCase { payload: b"+4", expected: vec![("lights/hall", "on")] },
        TestCase { payload: b"4", expected: vec![("lights/hall", "on")] },
        TestCase {
            payload: b"-4",
            expected: vec![("lights/hall", "off"), ("door/bell", "ring")],
        },
        TestCase { payload: b"+5", expected: vec![] },
        TestCase { payload: b"-5", expected: vec![] },
        TestCase { payload: b"+40", expected: vec![] },
        TestCase { payload: b"four", expected: vec![] },
    ];

    for case in test_cases {
        let (router, publisher) = router_with(config_with_hall_light());

        router.dispatch(KEYPAD, case.payload).await;

        let messages = publisher.messages();
        let actions: Vec<_> = messages
            .iter()
            .filter(|m| m.topic != RELEASED && m.topic != PRESSED)
            .map(|m| (m.topic.as_str(), String::from_utf8_lossy(&m.payload).into_owned()))
            .collect();
        let expected: Vec<_> = case
            .expected
            .iter()
            .map(|(topic, payload)| (*topic, payload.to_string()))
            .collect();
        assert_eq!(actions, expected, "payload {:?}", String::from_utf8_lossy(case.payload));

        // frames are refreshed after every keypad message
        assert_eq!(messages.len(), case.expected.len() + 2);
    }
}

#[tokio::test]
async fn test_key_actions_publish_before_frames() {
    let (router, publisher) = router_with(config_with_hall_light());

    let report = router.dispatch(KEYPAD, b"-4").await;

    assert_eq!(report.handlers, vec![Handler::Keystroke, Handler::Announce]);
    assert_eq!(report.published, 4);
    let topics: Vec<_> = publisher.messages().into_iter().map(|m| m.topic).collect();
    assert_eq!(topics, vec!["lights/hall", "door/bell", RELEASED, PRESSED]);
}

#[tokio::test]
async fn test_failed_key_action_does_not_stop_the_rest() {
    let publisher = Arc::new(RecordingPublisher::new().failing_on("lights/hall"));
    let router = Router::new(&config_with_hall_light(), publisher.clone());

    let report = router.dispatch(KEYPAD, b"-4").await;

    assert_eq!(report.failed, 1);
    assert_eq!(report.published, 3);
    assert_eq!(publisher.messages_on("door/bell").len(), 1);
}

#[tokio::test]
async fn test_refresh_sends_both_frames() {
    let (router, publisher) = router_with(Config::default());

    let report = router.refresh().await;

    assert_eq!(report.handlers, vec![Handler::Refresh]);
    assert_eq!(report.published, 2);
    let messages = publisher.messages();
    assert_full_frame(&messages[0].payload, [0x00, 0xff, 0x00]);
    assert_full_frame(&messages[1].payload, [0x00, 0x00, 0x00]);
}
