//! Instruction completion decoding
//!
//! When result reporting is enabled (`bkcmd=3`) the panel answers every
//! instruction with a one-byte completion code. The code-to-meaning table
//! is fixed by the panel firmware.

/// Outcome of an instruction, decoded from a solicited reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandStatus {
    /// Instruction executed successfully
    Completed,
    /// Generic failure
    Failed,
    InvalidComponentId,
    InvalidPageId,
    InvalidPictureId,
    InvalidFontId,
    InvalidFileOperation,
    InvalidCrc,
    InvalidBaudRate,
    InvalidWaveform,
    InvalidVariable,
    InvalidOperation,
    AssignFailed,
    EepromFailed,
    InvalidParameterCount,
    IoFailed,
    InvalidEscapeChar,
    NameTooLong,
    BufferOverflow,
    /// Reply byte outside the defined table
    Unexpected(u8),
    /// No reply arrived before the read deadline
    TimedOut,
}

impl CommandStatus {
    /// Decode a completion reply. An empty payload means the read timed
    /// out before any reply byte arrived.
    pub fn from_reply(payload: &[u8]) -> Self {
        use crate::codes::*;

        let Some(&code) = payload.first() else {
            return CommandStatus::TimedOut;
        };

        match code {
            RET_CMD_FINISHED => CommandStatus::Completed,
            RET_CMD_FAILED => CommandStatus::Failed,
            RET_INVALID_COMPONENT_ID => CommandStatus::InvalidComponentId,
            RET_INVALID_PAGE_ID => CommandStatus::InvalidPageId,
            RET_INVALID_PICTURE_ID => CommandStatus::InvalidPictureId,
            RET_INVALID_FONT_ID => CommandStatus::InvalidFontId,
            RET_INVALID_FILE_OP => CommandStatus::InvalidFileOperation,
            RET_INVALID_CRC => CommandStatus::InvalidCrc,
            RET_INVALID_BAUD => CommandStatus::InvalidBaudRate,
            RET_INVALID_WAVEFORM => CommandStatus::InvalidWaveform,
            RET_INVALID_VARIABLE => CommandStatus::InvalidVariable,
            RET_INVALID_OPERATION => CommandStatus::InvalidOperation,
            RET_FAILED_TO_ASSIGN => CommandStatus::AssignFailed,
            RET_EEPROM_OP_FAILED => CommandStatus::EepromFailed,
            RET_INVALID_NUM_PARAMS => CommandStatus::InvalidParameterCount,
            RET_IO_OP_FAILED => CommandStatus::IoFailed,
            RET_INVALID_ESCAPE_CHAR => CommandStatus::InvalidEscapeChar,
            RET_VAR_NAME_TOO_LONG => CommandStatus::NameTooLong,
            RET_SERIAL_BUFFER_OVERFLOW => CommandStatus::BufferOverflow,
            other => CommandStatus::Unexpected(other),
        }
    }

    /// True only for a successful completion.
    pub fn is_completed(&self) -> bool {
        matches!(self, CommandStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed() {
        assert!(CommandStatus::from_reply(&[0x01]).is_completed());
    }

    #[test]
    fn test_defined_failures() {
        let failures: &[u8] = &[
            0x00, 0x02, 0x03, 0x04, 0x05, 0x06, 0x09, 0x11, 0x12, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E,
            0x1F, 0x20, 0x23, 0x24,
        ];
        for &code in failures {
            let status = CommandStatus::from_reply(&[code]);
            assert!(!status.is_completed(), "code {code:#04x} decoded as success");
            assert!(!matches!(status, CommandStatus::Unexpected(_)));
        }
    }

    #[test]
    fn test_unexpected() {
        assert_eq!(
            CommandStatus::from_reply(&[0x42]),
            CommandStatus::Unexpected(0x42)
        );
        assert!(!CommandStatus::from_reply(&[0x42]).is_completed());
    }

    #[test]
    fn test_empty_is_timeout() {
        assert_eq!(CommandStatus::from_reply(&[]), CommandStatus::TimedOut);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        // Only the first byte carries the status
        assert!(CommandStatus::from_reply(&[0x01, 0xAA, 0xBB]).is_completed());
    }
}
