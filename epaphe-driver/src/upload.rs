//! Firmware upload sub-protocol
//!
//! Uploading bypasses normal message framing entirely. The host sends a
//! `whmi-wri <size>,<baud>,res0` instruction, then streams the raw image
//! in chunks of up to 4096 bytes. The panel gates the transfer with a
//! single acknowledgement byte (`0x05`) after the instruction, at every
//! chunk boundary with data still to come, and once more after the last
//! byte. When the image checks out the panel reboots into it and emits a
//! `88 FF FF FF` launch notification.
//!
//! Every failure is terminal for the call: there is no partial-transfer
//! resume, the caller restarts the whole upload or gives up.

use embedded_io::Read;
use md5::{Digest, Md5};

use epaphe_protocol::codes;
use epaphe_protocol::Command;

use crate::panel::Panel;
use crate::transport::{Clock, Deadline, Transport};

/// Bytes per acknowledged chunk, fixed by the panel firmware.
pub const CHUNK_SIZE: usize = 4096;

/// Working buffer for moving bytes from the source onto the link.
const COPY_BUFFER_SIZE: usize = 128;

/// Budget for each single-byte acknowledgement.
const ACK_TIMEOUT_MS: u64 = 500;

/// Budget for the panel to flash, reboot and report the new firmware.
const LAUNCH_TIMEOUT_MS: u64 = 20_000;

/// MD5 digest of the streamed image, returned to the caller on success
/// for out-of-band verification.
pub type FirmwareDigest = [u8; 16];

/// Reasons an upload aborted. All are terminal for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UploadError {
    /// The panel did not acknowledge the upload instruction
    Refused,
    /// Missing acknowledgement at a chunk boundary
    ChunkNotAcknowledged,
    /// Missing acknowledgement after the last byte
    EndNotAcknowledged,
    /// The link accepted fewer bytes than were read from the source
    ShortWrite,
    /// The source ended before the advertised image size
    TruncatedSource,
    /// Reading the source stream failed
    SourceRead,
    /// The panel never reported the new firmware as launched
    LaunchTimedOut,
}

impl<T: Transport, C: Clock> Panel<T, C> {
    /// Stream a firmware image of exactly `size` bytes to the panel.
    ///
    /// `baud_rate` is the rate the panel switches to for the transfer;
    /// the caller is responsible for reconfiguring its own end to match.
    /// Blocks until the panel confirms the new firmware launched (up to
    /// 20 s) or the transfer fails.
    pub fn upload_firmware<S: Read>(
        &mut self,
        source: &mut S,
        size: usize,
        baud_rate: u32,
    ) -> Result<FirmwareDigest, UploadError> {
        self.send(
            &Command::new("whmi-wri")
                .arg(size as u32)
                .arg(baud_rate)
                .arg_name("res0"),
        );

        // The upload owns the link from here: drop any stray traffic
        // still buffered ahead of the acknowledgement.
        while self.port.read().is_some() {}

        if !self.wait_for_upload_ack() {
            warn!("upload instruction not acknowledged, aborting");
            return Err(UploadError::Refused);
        }

        let mut digest = Md5::new();
        let mut buffer = [0u8; COPY_BUFFER_SIZE];
        let mut written_total = 0usize;
        let mut chunk_remaining = CHUNK_SIZE;

        loop {
            let want = chunk_remaining.min(buffer.len());
            let read = source
                .read(&mut buffer[..want])
                .map_err(|_| UploadError::SourceRead)?;
            if read == 0 {
                break;
            }

            let written = self.port.write(&buffer[..read]);
            written_total += written;
            if written != read {
                warn!("link accepted {} of {} bytes, aborting", written, read);
                return Err(UploadError::ShortWrite);
            }
            digest.update(&buffer[..read]);

            chunk_remaining -= read;
            if chunk_remaining == 0 && written_total != size {
                chunk_remaining = CHUNK_SIZE;
                if !self.wait_for_upload_ack() {
                    warn!("chunk boundary not acknowledged, aborting");
                    return Err(UploadError::ChunkNotAcknowledged);
                }
            }
        }

        if !self.wait_for_upload_ack() {
            warn!("final chunk not acknowledged, aborting");
            return Err(UploadError::EndNotAcknowledged);
        }

        if written_total != size {
            warn!("source ended at {} of {} bytes, aborting", written_total, size);
            return Err(UploadError::TruncatedSource);
        }

        debug!("image sent, {} bytes, waiting for launch", written_total);
        if self.wait_for_launch() {
            Ok(digest.finalize().into())
        } else {
            Err(UploadError::LaunchTimedOut)
        }
    }

    /// Wait for the single acknowledgement byte.
    ///
    /// The first byte that arrives decides: anything other than `0x05`
    /// counts as a refusal, the wait does not resynchronise.
    fn wait_for_upload_ack(&mut self) -> bool {
        let deadline = Deadline::after(&self.clock, ACK_TIMEOUT_MS);
        loop {
            if let Some(byte) = self.port.read() {
                return byte == codes::FIRMWARE_ACK;
            }
            if deadline.expired(&self.clock) {
                return false;
            }
        }
    }

    /// Scan the incoming byte stream for the launch notification.
    fn wait_for_launch(&mut self) -> bool {
        const LAUNCHED: [u8; 4] = [codes::RET_EVENT_LAUNCHED, 0xFF, 0xFF, 0xFF];

        let deadline = Deadline::after(&self.clock, LAUNCH_TIMEOUT_MS);
        let mut matched = 0;
        while !deadline.expired(&self.clock) {
            let Some(byte) = self.port.read() else {
                continue;
            };
            if byte == LAUNCHED[matched] {
                matched += 1;
                if matched == LAUNCHED.len() {
                    debug!("launch notification detected");
                    return true;
                }
            } else {
                matched = if byte == LAUNCHED[0] { 1 } else { 0 };
            }
        }
        warn!("launch notification not detected");
        false
    }
}
