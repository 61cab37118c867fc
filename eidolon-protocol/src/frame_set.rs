//! The four register frames that make up one display update

use crate::command::Register;
use crate::frame::MessageFrame;

/// Frames for registers A, B, C and the annunciators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameSet {
    frames: [MessageFrame; 4],
}

impl Default for FrameSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSet {
    /// Create an empty frame set
    pub const fn new() -> Self {
        Self {
            frames: [
                MessageFrame::new(Register::A),
                MessageFrame::new(Register::B),
                MessageFrame::new(Register::C),
                MessageFrame::new(Register::Annunciator),
            ],
        }
    }

    /// True when every register holds a complete burst
    pub fn is_ready(&self) -> bool {
        self.frames.iter().all(|frame| frame.valid)
    }

    /// Zero all four frames
    pub fn reset(&mut self) {
        for frame in self.frames.iter_mut() {
            frame.clear();
        }
    }

    /// Frame of a register
    pub fn frame(&self, register: Register) -> &MessageFrame {
        &self.frames[register.index()]
    }

    /// Mutable frame of a register
    pub fn frame_mut(&mut self, register: Register) -> &mut MessageFrame {
        &mut self.frames[register.index()]
    }

    /// Used bytes of a register's frame
    pub fn data(&self, register: Register) -> &[u8] {
        self.frame(register).bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(set: &mut FrameSet) {
        for register in Register::ALL {
            let frame = set.frame_mut(register);
            frame.data = [0xFF; 6];
            frame.valid = true;
        }
    }

    #[test]
    fn test_ready_needs_all_four() {
        let mut set = FrameSet::new();
        assert!(!set.is_ready());

        fill(&mut set);
        assert!(set.is_ready());

        set.frame_mut(Register::Annunciator).valid = false;
        assert!(!set.is_ready());
    }

    #[test]
    fn test_reset_then_not_ready() {
        let mut set = FrameSet::new();
        fill(&mut set);

        set.reset();

        assert!(!set.is_ready());
        for register in Register::ALL {
            assert!(set.data(register).iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_frame_lookup_by_register() {
        let set = FrameSet::new();
        assert_eq!(set.frame(Register::C).command, 0x2A);
        assert_eq!(set.data(Register::Annunciator).len(), 2);
    }
}
