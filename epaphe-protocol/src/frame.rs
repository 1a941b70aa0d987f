//! Message framing
//!
//! Incoming bytes are framed by a three-byte `FF FF FF` terminator run.
//! The protocol assumes payload bytes never contain that run, so framing
//! is a plain scan - there is no length prefix and no checksum.

use crate::codes;

/// Which queue a completed message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageKind {
    /// Reply to an instruction this driver sent
    Solicited,
    /// Event the panel raised on its own (touch, position)
    Unsolicited,
}

/// Classify a message by its opcode.
///
/// The membership set is fixed: touch and position opcodes are
/// unsolicited, everything else answers an instruction.
pub fn classify(opcode: u8) -> MessageKind {
    match opcode {
        codes::RET_EVENT_TOUCH | codes::RET_EVENT_POSITION | codes::RET_EVENT_SLEEP_POSITION => {
            MessageKind::Unsolicited
        }
        _ => MessageKind::Solicited,
    }
}

/// Find the first complete message at or after `start`.
///
/// Returns the message length in bytes, excluding the terminator, or
/// `None` if no terminator run follows `start`. A length of zero is
/// possible when the buffer starts with a bare terminator.
pub fn find_message(buffer: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 2;
    while i < buffer.len() {
        if buffer[i - 2] == 0xFF && buffer[i - 1] == 0xFF && buffer[i] == 0xFF {
            return Some(i - start - 2);
        }
        i += 1;
    }
    None
}

/// Check whether the last three bytes of `buffer` form the terminator.
pub fn ends_with_terminator(buffer: &[u8]) -> bool {
    buffer.len() >= 3 && buffer[buffer.len() - 3..] == codes::TERMINATOR
}
