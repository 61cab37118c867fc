//! GPIO pin abstractions
//!
//! Provides traits for the control strobes and the 8-bit data port of the
//! LCD bus. Chip-specific HALs implement them on top of their own pin types.

/// Digital output pin
///
/// Used for the A0, R/W and chip-enable strobes of the LCD bus.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Bidirectional 8-bit data port
///
/// The LCD data lines are outputs for every transfer except a RAM read.
/// On some boards the eight lines are split across two GPIO ports, so the
/// byte is exchanged as a whole and the implementation does the nibble
/// shuffling.
pub trait DataPort {
    /// Drive `byte` onto the data lines (port must be in output mode)
    fn write(&mut self, byte: u8);

    /// Sample the data lines (port must be in input mode)
    fn read(&mut self) -> u8;

    /// Switch the data lines to inputs
    fn set_input(&mut self);

    /// Switch the data lines back to outputs
    fn set_output(&mut self);
}
