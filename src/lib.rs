// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;       // publisher backends
pub mod config;         // config + validation
pub mod errors;         // error handling
pub mod frame;          // LED color frames
pub mod keypad;         // keystroke events
pub mod observability;
pub mod router;         // topic dispatch
pub mod service;        // broker connection + message pump
pub mod traits;         // unified abstractions
