//! Register frame storage

use crate::command::Register;

/// Largest data burst of any register
pub const MAX_FRAME_LEN: usize = 6;

/// One register's reassembled data
///
/// Bytes are stored at `remaining - 1` as they arrive, so after a full burst
/// `data[0]` holds the last byte sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageFrame {
    /// Command byte that loads this frame
    pub command: u8,
    /// Expected burst length
    pub length: u8,
    /// Reassembled data, only the first `length` bytes are used
    pub data: [u8; MAX_FRAME_LEN],
    /// Set once a full burst has been received
    pub valid: bool,
}

impl MessageFrame {
    /// Empty frame for a register
    pub const fn new(register: Register) -> Self {
        Self {
            command: register.command_byte(),
            length: register.data_len(),
            data: [0; MAX_FRAME_LEN],
            valid: false,
        }
    }

    /// Used part of the buffer
    pub fn bytes(&self) -> &[u8] {
        &self.data[..self.length as usize]
    }

    /// Zero the buffer and drop the valid flag
    pub fn clear(&mut self) {
        self.data = [0; MAX_FRAME_LEN];
        self.valid = false;
    }
}
