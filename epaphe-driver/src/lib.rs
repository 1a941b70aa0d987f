//! Blocking protocol engine for epaphe-class serial touch panels
//!
//! The panel is a self-contained display computer on the far end of a
//! half-duplex UART: the host sends ASCII instructions, the panel answers
//! with short binary messages and raises touch events on its own. This
//! crate owns the stateful part of that conversation:
//!
//! - the frame accumulator that turns raw bytes into terminated messages
//!   and sorts them into solicited and unsolicited queues
//! - the single blocking read primitive every set/get operation uses
//! - completion, number and string decoding of solicited replies
//! - the touch registry and multicast dispatch of unsolicited events
//! - the chunked, acknowledged firmware upload sub-protocol
//!
//! Everything is synchronous and single-threaded. Public operations
//! either return immediately or block the caller up to a bounded
//! deadline; servicing unsolicited traffic is the caller's job via
//! [`Panel::poll`] at whatever cadence suits the application.
//!
//! The serial port is abstracted behind [`transport::Transport`] and all
//! timing behind [`transport::Clock`], so the engine runs unchanged on
//! hardware and under host tests.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod panel;
pub mod touch;
pub mod transport;
pub mod upload;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use panel::{Panel, DEFAULT_TIMEOUT_MS};
pub use touch::{TouchEvent, TouchKind, TouchListener};
pub use transport::{Clock, Deadline, Transport};
pub use upload::{FirmwareDigest, UploadError};
