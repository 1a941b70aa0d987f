//! Wire protocol for epaphe-class serial touch panels
//!
//! The panel speaks a half-duplex ASCII/binary protocol over UART:
//!
//! - Host to panel: an ASCII instruction followed by the three-byte
//!   terminator `FF FF FF`, e.g. `dim=50<FF><FF><FF>`.
//! - Panel to host: one opcode byte, zero or more payload bytes, then the
//!   same terminator, e.g. `71 2A 00 00 00 FF FF FF` for the number 42.
//!
//! Replies fall into two classes: *solicited* messages produced in answer
//! to an instruction (completion codes, numeric and string values), and
//! *unsolicited* messages the panel emits on its own (touch events,
//! position reports). The split is decided purely by the opcode; see
//! [`frame::classify`].
//!
//! This crate is transport-free. It knows how to build outgoing command
//! text, find message boundaries in a received byte stream, and decode
//! the payloads - the blocking engine around it lives in `epaphe-driver`.

#![no_std]
#![deny(unsafe_code)]

pub mod codes;
pub mod command;
pub mod frame;
pub mod status;
pub mod types;
pub mod value;

pub use command::{Command, MAX_COMMAND_LEN};
pub use frame::MessageKind;
pub use status::CommandStatus;
pub use types::{Alignment, BackgroundFill, Colour, ScrollDirection};
