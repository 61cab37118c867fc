//! LCD controller bus
//!
//! The panel is a 202x32 STN module built from three SBN166G column
//! controllers sharing one 68-type parallel bus. A0 selects control or
//! display data, R/W selects the direction and each controller has its own
//! enable strobe (E). A write is latched on the falling edge of E.

use embedded_hal::delay::DelayNs;

use crate::gpio::{DataPort, OutputPin};

/// Address setup time, A0 and R/W to E high (ns)
const T_AS_NS: u32 = 20;
/// Minimum E high pulse width for writes (ns)
const T_EWW_NS: u32 = 160;
/// Minimum E high pulse width for reads (ns)
const T_EWR_NS: u32 = 200;
/// E high to valid read data (ns)
const T_ACC_NS: u32 = 90;

/// Set of controller enable strobes to raise for one bus cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipSelect(u8);

impl ChipSelect {
    /// First controller (left)
    pub const CHIP1: Self = Self(0b001);
    /// Second controller (middle)
    pub const CHIP2: Self = Self(0b010);
    /// Third controller (right)
    pub const CHIP3: Self = Self(0b100);
    /// Every controller at once (broadcast commands)
    pub const ALL: Self = Self(0b111);

    /// Select a single controller by index (0..3)
    pub const fn single(index: usize) -> Self {
        Self(1 << (index & 0x03))
    }

    /// Check whether the controller at `index` is selected
    pub const fn contains(&self, index: usize) -> bool {
        index < 3 && self.0 & (1 << index) != 0
    }

    /// Raw strobe mask
    pub const fn bits(&self) -> u8 {
        self.0
    }
}

/// Parallel bus to the column controllers
pub trait LcdBus {
    /// Error type for bus cycles
    type Error;

    /// Write a control byte (A0 low) to every selected controller
    fn write_command(&mut self, chips: ChipSelect, command: u8) -> Result<(), Self::Error>;

    /// Write a display data byte (A0 high) to the selected controllers
    fn write_data(&mut self, chips: ChipSelect, data: u8) -> Result<(), Self::Error>;

    /// Run one read cycle (A0 high, R/W high) on a single controller
    ///
    /// Controllers return their output latch, so the first read after an
    /// address change is a dummy. The caller is responsible for that.
    fn read_data(&mut self, chip: ChipSelect) -> Result<u8, Self::Error>;
}

/// Bit-banged 68-type bus built from plain GPIO
pub struct Parallel68Bus<D, O, T> {
    data: D,
    a0: O,
    rw: O,
    enable: [O; 3],
    delay: T,
}

impl<D, O, T> Parallel68Bus<D, O, T>
where
    D: DataPort,
    O: OutputPin,
    T: DelayNs,
{
    /// Create a new bus and park every strobe low
    pub fn new(data: D, a0: O, rw: O, enable: [O; 3], delay: T) -> Self {
        let mut bus = Self {
            data,
            a0,
            rw,
            enable,
            delay,
        };
        bus.data.set_output();
        bus.a0.set_low();
        bus.rw.set_low();
        bus.release();
        bus
    }

    fn strobe(&mut self, chips: ChipSelect) {
        for (index, pin) in self.enable.iter_mut().enumerate() {
            if chips.contains(index) {
                pin.set_high();
            }
        }
    }

    fn release(&mut self) {
        for pin in self.enable.iter_mut() {
            pin.set_low();
        }
    }

    fn write_cycle(&mut self, chips: ChipSelect, a0: bool, byte: u8) {
        self.a0.set_state(a0);
        self.rw.set_low();
        self.data.write(byte);
        self.delay.delay_ns(T_AS_NS);

        self.strobe(chips);
        self.delay.delay_ns(T_EWW_NS);
        self.release();
    }
}

impl<D, O, T> LcdBus for Parallel68Bus<D, O, T>
where
    D: DataPort,
    O: OutputPin,
    T: DelayNs,
{
    type Error = core::convert::Infallible;

    fn write_command(&mut self, chips: ChipSelect, command: u8) -> Result<(), Self::Error> {
        self.write_cycle(chips, false, command);
        Ok(())
    }

    fn write_data(&mut self, chips: ChipSelect, data: u8) -> Result<(), Self::Error> {
        self.write_cycle(chips, true, data);
        Ok(())
    }

    fn read_data(&mut self, chip: ChipSelect) -> Result<u8, Self::Error> {
        self.data.set_input();
        self.a0.set_high();
        self.rw.set_high();
        self.delay.delay_ns(T_AS_NS);

        self.strobe(chip);
        self.delay.delay_ns(T_ACC_NS.max(T_EWR_NS));
        let byte = self.data.read();
        self.release();

        self.rw.set_low();
        self.data.set_output();
        Ok(byte)
    }
}
