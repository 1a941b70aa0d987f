//! Byte values used on the wire
//!
//! Every panel reply starts with one of these opcodes. Completion codes
//! (`0x00`-`0x24`) answer an instruction, value replies (`0x70`/`0x71`)
//! answer a `get`, and the `0x6x`/`0x8x` range is panel-initiated.

/// End-of-message marker, both directions: three consecutive `0xFF` bytes.
pub const TERMINATOR: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Single-byte acknowledgement sent between firmware upload chunks.
pub const FIRMWARE_ACK: u8 = 0x05;

// Completion replies
pub const RET_CMD_FAILED: u8 = 0x00;
pub const RET_CMD_FINISHED: u8 = 0x01;
pub const RET_INVALID_COMPONENT_ID: u8 = 0x02;
pub const RET_INVALID_PAGE_ID: u8 = 0x03;
pub const RET_INVALID_PICTURE_ID: u8 = 0x04;
pub const RET_INVALID_FONT_ID: u8 = 0x05;
pub const RET_INVALID_FILE_OP: u8 = 0x06;
pub const RET_INVALID_CRC: u8 = 0x09;
pub const RET_INVALID_BAUD: u8 = 0x11;
pub const RET_INVALID_WAVEFORM: u8 = 0x12;
pub const RET_INVALID_VARIABLE: u8 = 0x1A;
pub const RET_INVALID_OPERATION: u8 = 0x1B;
pub const RET_FAILED_TO_ASSIGN: u8 = 0x1C;
pub const RET_EEPROM_OP_FAILED: u8 = 0x1D;
pub const RET_INVALID_NUM_PARAMS: u8 = 0x1E;
pub const RET_IO_OP_FAILED: u8 = 0x1F;
pub const RET_INVALID_ESCAPE_CHAR: u8 = 0x20;
pub const RET_VAR_NAME_TOO_LONG: u8 = 0x23;
pub const RET_SERIAL_BUFFER_OVERFLOW: u8 = 0x24;

// Panel-initiated events
pub const RET_EVENT_TOUCH: u8 = 0x65;
pub const RET_CURRENT_PAGE_ID: u8 = 0x66;
pub const RET_EVENT_POSITION: u8 = 0x67;
pub const RET_EVENT_SLEEP_POSITION: u8 = 0x68;

// Value replies
pub const RET_STRING_VALUE: u8 = 0x70;
pub const RET_NUMBER_VALUE: u8 = 0x71;

// Power state and upgrade notifications
pub const RET_EVENT_AUTO_SLEEP: u8 = 0x86;
pub const RET_EVENT_AUTO_WAKE: u8 = 0x87;
pub const RET_EVENT_LAUNCHED: u8 = 0x88;
pub const RET_EVENT_UPGRADED: u8 = 0x89;

// Transparent data mode (reserved, not decoded)
pub const RET_TRANSPARENT_DATA_FINISHED: u8 = 0xFD;
pub const RET_TRANSPARENT_DATA_READY: u8 = 0xFE;
