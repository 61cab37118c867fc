//! HP 6060B display bus protocol
//!
//! The instrument's front panel processor drives its vacuum fluorescent
//! display over a clocked serial link. Every transaction is one command byte
//! (SYNC high) followed by a burst of data bytes (SYNC low):
//!
//! ```text
//! ┌─────────┬──────┬──────┬─────┬──────┐
//! │ COMMAND │ D(n) │ ...  │ D2  │ D1   │
//! │ SYNC=1  │ SYNC=0                   │
//! └─────────┴──────────────────────────┘
//! ```
//!
//! Four commands carry data into display registers A, B, C and the
//! annunciator register. Data arrives last-byte-first, so the decoder fills
//! each buffer from the top down. A display update is complete once all four
//! registers have received a full burst.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod decoder;
pub mod frame;
pub mod frame_set;

pub use command::{Command, Register};
pub use decoder::{BusPhase, DecodeOutcome, FrameDecoder};
pub use frame::{MessageFrame, MAX_FRAME_LEN};
pub use frame_set::FrameSet;
