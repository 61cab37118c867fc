//! Frame store shared between the receive interrupt and the render task
//!
//! The interrupt feeds one byte at a time, the render task takes a copy of
//! the complete frame set while the instrument bus is idle. Every access
//! runs inside one short critical section, so a byte never lands half-way
//! through a snapshot.

use core::cell::RefCell;

use eidolon_hal::sniffer::BusPeripheral;
use eidolon_protocol::{BusPhase, DecodeOutcome, FrameDecoder, FrameSet};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

struct Decoding {
    decoder: FrameDecoder,
    frames: FrameSet,
}

/// Decoder state and frame set behind a critical-section mutex
pub struct SharedFrames {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Decoding>>,
}

impl Default for SharedFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedFrames {
    /// Create an empty store, usable in a `static`
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Decoding {
                decoder: FrameDecoder::new(),
                frames: FrameSet::new(),
            })),
        }
    }

    /// Feed one received byte
    pub fn on_byte(&self, byte: u8, phase: BusPhase) -> DecodeOutcome {
        self.inner.lock(|cell| {
            let mut state = cell.borrow_mut();
            let Decoding { decoder, frames } = &mut *state;
            decoder.on_byte(frames, byte, phase)
        })
    }

    /// Handle a completed transfer from the bus peripheral
    ///
    /// Samples SYNC for the phase and switches the receiver off on desync.
    pub fn on_transfer<B: BusPeripheral>(&self, bus: &mut B, byte: u8) -> DecodeOutcome {
        let phase = BusPhase::from_sync(bus.is_command_phase());
        let outcome = self.on_byte(byte, phase);
        if outcome == DecodeOutcome::Desync {
            bus.disable();
        }
        outcome
    }

    /// True when all four registers hold a complete burst
    pub fn is_ready(&self) -> bool {
        self.inner.lock(|cell| cell.borrow().frames.is_ready())
    }

    /// Zero every frame and drop any burst in progress
    pub fn reset(&self) {
        self.inner.lock(|cell| {
            let mut state = cell.borrow_mut();
            state.frames.reset();
            state.decoder.reset();
        });
    }

    /// Copy of the current frames
    pub fn snapshot(&self) -> FrameSet {
        self.inner.lock(|cell| cell.borrow().frames)
    }

    /// Take the frame set if it is ready, leaving an empty one behind
    ///
    /// Copy and reset happen in the same critical section.
    pub fn take_ready(&self) -> Option<FrameSet> {
        self.inner.lock(|cell| {
            let mut state = cell.borrow_mut();
            if !state.frames.is_ready() {
                return None;
            }
            let frames = state.frames;
            state.frames.reset();
            Some(frames)
        })
    }
}
