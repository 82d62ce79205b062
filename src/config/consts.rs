//! Built-in defaults. With no config file these reproduce the deployment on
//! the subraum broker.

use std::time::Duration;

/// Default broker host
pub const DEFAULT_BROKER_HOST: &str = "mqtt.subraum.c3pb.de";
/// Default broker port (plain MQTT)
pub const DEFAULT_BROKER_PORT: u16 = 1883;
/// Prefix of the generated client id, `<prefix>-<n>`
pub const DEFAULT_CLIENT_ID_PREFIX: &str = "klausdieter";
/// Upper bound (inclusive) of the random client id suffix
pub const CLIENT_ID_SUFFIX_MAX: u32 = 100;
/// MQTT keep-alive interval
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(60);
/// Pause after a connection error before polling the event loop again
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(1000);
/// Capacity of the client request channel between `AsyncClient` and its event loop
pub const CLIENT_REQUEST_CAPACITY: usize = 10;

pub const DEFAULT_KEYPAD_TOPIC: &str = "mx-blue/arr/out";
pub const DEFAULT_BUZZER_TOPIC: &str = "xuhaktu/buzzer";
pub const DEFAULT_ANNOUNCE_TOPIC: &str = "/unicorn";
pub const DEFAULT_RELEASED_TOPIC: &str = "mx-blue/arr/released";
pub const DEFAULT_PRESSED_TOPIC: &str = "mx-blue/arr/pressed";

/// Announce payloads starting with this trigger a frame refresh
pub const DEFAULT_ANNOUNCE_PREFIX: &str = "mx-blue.connect";

/// Color published on the released topic
pub const DEFAULT_RELEASED_COLOR: &str = "00ff00";
/// Color published on the pressed topic
pub const DEFAULT_PRESSED_COLOR: &str = "000000";

/// Buzzer payload that counts as a buzz
pub const BUZZ_TRIGGER: &[u8] = b"+0";
pub const DEFAULT_BUZZ_COMMAND_TOPIC: &str = "edi/cmd/sob";
pub const DEFAULT_BUZZ_ARGS: &str = "hackbuzzer";
pub const DEFAULT_BUZZ_USER: &str = "klausdieter";
