//! Byte-at-a-time register decoder
//!
//! State machine fed from the receive interrupt. A command byte selects the
//! register that the following data burst belongs to. Data bytes fill that
//! register's buffer from the top index down, so the burst lands in reverse
//! arrival order.

use crate::command::{Command, Register};
use crate::frame_set::FrameSet;

/// Which half of a transaction a byte belongs to (the SYNC line)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusPhase {
    /// SYNC high
    Command,
    /// SYNC low
    Data,
}

impl BusPhase {
    /// Phase from the SYNC line level
    pub fn from_sync(sync_high: bool) -> Self {
        if sync_high {
            BusPhase::Command
        } else {
            BusPhase::Data
        }
    }
}

/// Result of feeding one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeOutcome {
    /// Command selected a register, its burst follows
    Selected(Register),
    /// Command without payload or unknown byte
    Ignored,
    /// Data byte stored
    Stored {
        /// Register the byte went to
        register: Register,
        /// Last byte of the burst
        complete: bool,
    },
    /// Data byte with no burst in progress
    ///
    /// The receiver is out of step with the bus and should stop listening
    /// until the next command byte.
    Desync,
}

/// Register decoder state
#[derive(Debug, Clone, Default)]
pub struct FrameDecoder {
    active: Option<Register>,
    remaining: u8,
}

impl FrameDecoder {
    /// Create a decoder waiting for a command
    pub const fn new() -> Self {
        Self {
            active: None,
            remaining: 0,
        }
    }

    /// Forget any burst in progress
    pub fn reset(&mut self) {
        self.active = None;
        self.remaining = 0;
    }

    /// Bytes still expected for the current burst
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Feed a single byte received in `phase`
    pub fn on_byte(&mut self, frames: &mut FrameSet, byte: u8, phase: BusPhase) -> DecodeOutcome {
        match phase {
            BusPhase::Command => self.on_command(byte),
            BusPhase::Data => self.on_data(frames, byte),
        }
    }

    fn on_command(&mut self, byte: u8) -> DecodeOutcome {
        match Command::from_byte(byte).register() {
            Some(register) => {
                self.active = Some(register);
                self.remaining = register.data_len();
                DecodeOutcome::Selected(register)
            }
            None => {
                self.reset();
                DecodeOutcome::Ignored
            }
        }
    }

    fn on_data(&mut self, frames: &mut FrameSet, byte: u8) -> DecodeOutcome {
        let register = match self.active {
            Some(register) if self.remaining > 0 => register,
            _ => {
                self.reset();
                return DecodeOutcome::Desync;
            }
        };

        let frame = frames.frame_mut(register);
        if self.remaining == frame.length {
            frame.valid = false;
        }
        frame.data[(self.remaining - 1) as usize] = byte;
        self.remaining -= 1;

        let complete = self.remaining == 0;
        if complete {
            frame.valid = true;
            self.active = None;
        }

        DecodeOutcome::Stored { register, complete }
    }

    /// Feed a whole transaction: one command byte then its data burst
    ///
    /// Returns the outcome of the last byte.
    pub fn feed_transaction(
        &mut self,
        frames: &mut FrameSet,
        command: u8,
        data: &[u8],
    ) -> DecodeOutcome {
        let mut outcome = self.on_byte(frames, command, BusPhase::Command);
        for &byte in data {
            outcome = self.on_byte(frames, byte, BusPhase::Data);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use proptest::prelude::*;
    use std::vec::Vec;

    #[test]
    fn test_burst_is_stored_reversed() {
        let mut frames = FrameSet::new();
        let mut decoder = FrameDecoder::new();

        decoder.feed_transaction(&mut frames, 0x0A, &[1, 2, 3, 4, 5, 6]);

        assert_eq!(frames.data(Register::A), &[6, 5, 4, 3, 2, 1]);
        assert!(frames.frame(Register::A).valid);
    }

    #[test]
    fn test_valid_only_after_last_byte() {
        let mut frames = FrameSet::new();
        let mut decoder = FrameDecoder::new();

        decoder.on_byte(&mut frames, 0xBC, BusPhase::Command);
        let first = decoder.on_byte(&mut frames, 0x12, BusPhase::Data);
        assert_eq!(
            first,
            DecodeOutcome::Stored {
                register: Register::Annunciator,
                complete: false
            }
        );
        assert!(!frames.frame(Register::Annunciator).valid);

        let last = decoder.on_byte(&mut frames, 0x34, BusPhase::Data);
        assert_eq!(
            last,
            DecodeOutcome::Stored {
                register: Register::Annunciator,
                complete: true
            }
        );
        assert!(frames.frame(Register::Annunciator).valid);
        assert_eq!(frames.data(Register::Annunciator), &[0x34, 0x12]);
    }

    #[test]
    fn test_payloadless_commands_do_not_touch_buffers() {
        let mut frames = FrameSet::new();
        let mut decoder = FrameDecoder::new();
        decoder.feed_transaction(&mut frames, 0x1A, &[9, 9, 9, 9, 9, 9]);
        let before = frames;

        for command in [0xFC, 0xB8, 0xC8, 0x77] {
            assert_eq!(
                decoder.on_byte(&mut frames, command, BusPhase::Command),
                DecodeOutcome::Ignored
            );
            assert_eq!(decoder.remaining(), 0);
        }
        assert_eq!(frames, before);
    }

    #[test]
    fn test_data_without_command_is_desync() {
        let mut frames = FrameSet::new();
        let mut decoder = FrameDecoder::new();

        assert_eq!(
            decoder.on_byte(&mut frames, 0x42, BusPhase::Data),
            DecodeOutcome::Desync
        );
        assert_eq!(frames, FrameSet::new());
    }

    #[test]
    fn test_extra_data_byte_is_desync() {
        let mut frames = FrameSet::new();
        let mut decoder = FrameDecoder::new();
        decoder.feed_transaction(&mut frames, 0xBC, &[1, 2]);

        assert_eq!(
            decoder.on_byte(&mut frames, 3, BusPhase::Data),
            DecodeOutcome::Desync
        );
        // Completed burst survives
        assert_eq!(frames.data(Register::Annunciator), &[2, 1]);
        assert!(frames.frame(Register::Annunciator).valid);
    }

    #[test]
    fn test_reselect_clears_valid_until_burst_completes() {
        let mut frames = FrameSet::new();
        let mut decoder = FrameDecoder::new();
        decoder.feed_transaction(&mut frames, 0x2A, &[1, 2, 3, 4, 5, 6]);
        assert!(frames.frame(Register::C).valid);

        decoder.feed_transaction(&mut frames, 0x2A, &[7, 8, 9]);
        assert!(!frames.frame(Register::C).valid);

        // A command mid-burst abandons it
        decoder.on_byte(&mut frames, 0xFC, BusPhase::Command);
        assert_eq!(
            decoder.on_byte(&mut frames, 0, BusPhase::Data),
            DecodeOutcome::Desync
        );
        assert!(!frames.frame(Register::C).valid);
    }

    #[test]
    fn test_bare_select_keeps_set_ready() {
        let mut frames = FrameSet::new();
        let mut decoder = FrameDecoder::new();
        for command in [0x0A, 0x1A, 0x2A] {
            decoder.feed_transaction(&mut frames, command, &[0; 6]);
        }
        decoder.feed_transaction(&mut frames, 0xBC, &[0; 2]);
        assert!(frames.is_ready());

        assert_eq!(
            decoder.on_byte(&mut frames, 0x0A, BusPhase::Command),
            DecodeOutcome::Selected(Register::A)
        );
        assert!(frames.is_ready());

        decoder.on_byte(&mut frames, 0x55, BusPhase::Data);
        assert!(!frames.is_ready());
    }

    #[test]
    fn test_full_update_makes_set_ready() {
        let mut frames = FrameSet::new();
        let mut decoder = FrameDecoder::new();

        decoder.feed_transaction(&mut frames, 0xFC, &[]);
        decoder.feed_transaction(&mut frames, 0x0A, &[0; 6]);
        decoder.feed_transaction(&mut frames, 0x1A, &[0; 6]);
        assert!(!frames.is_ready());
        decoder.feed_transaction(&mut frames, 0x2A, &[0; 6]);
        decoder.feed_transaction(&mut frames, 0xBC, &[0; 2]);
        assert!(frames.is_ready());

        frames.reset();
        assert!(!frames.is_ready());
    }

    #[test]
    fn test_phase_from_sync_level() {
        assert_eq!(BusPhase::from_sync(true), BusPhase::Command);
        assert_eq!(BusPhase::from_sync(false), BusPhase::Data);
    }

    fn register_strategy() -> impl Strategy<Value = Register> {
        prop_oneof![
            Just(Register::A),
            Just(Register::B),
            Just(Register::C),
            Just(Register::Annunciator),
        ]
    }

    proptest! {
        #[test]
        fn test_any_burst_reassembles_reversed(
            register in register_strategy(),
            payload in proptest::collection::vec(any::<u8>(), 6),
        ) {
            let len = register.data_len() as usize;
            let payload = &payload[..len];
            let mut frames = FrameSet::new();
            let mut decoder = FrameDecoder::new();

            decoder.on_byte(&mut frames, register.command_byte(), BusPhase::Command);
            for (i, &byte) in payload.iter().enumerate() {
                prop_assert!(!frames.frame(register).valid);
                let outcome = decoder.on_byte(&mut frames, byte, BusPhase::Data);
                prop_assert_eq!(
                    outcome,
                    DecodeOutcome::Stored { register, complete: i + 1 == len }
                );
            }

            let reversed: Vec<u8> = payload.iter().rev().copied().collect();
            prop_assert_eq!(frames.data(register), reversed.as_slice());
            prop_assert!(frames.frame(register).valid);
        }

        #[test]
        fn test_reset_is_never_ready(
            stream in proptest::collection::vec((any::<u8>(), any::<bool>()), 0..64),
        ) {
            let mut frames = FrameSet::new();
            let mut decoder = FrameDecoder::new();
            for (byte, sync) in stream {
                decoder.on_byte(&mut frames, byte, BusPhase::from_sync(sync));
            }

            frames.reset();
            prop_assert!(!frames.is_ready());
        }
    }
}
