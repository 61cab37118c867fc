//! GPIO adapters for STM32F0
//!
//! Wraps embassy-stm32 pins so they can drive the LCD bus.

use eidolon_hal::gpio::{DataPort, OutputPin};
use embassy_stm32::gpio::{Flex, Output, Pull, Speed};

/// LCD control strobe (A0, R/W or a chip enable)
pub struct Strobe<'d>(Output<'d>);

impl<'d> Strobe<'d> {
    /// Wrap an output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for Strobe<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Eight flexible pins forming the LCD data bus, D0 first
pub struct FlexDataPort<'d> {
    pins: [Flex<'d>; 8],
}

impl<'d> FlexDataPort<'d> {
    /// Build the port from D0..D7 and switch it to outputs
    pub fn new(pins: [Flex<'d>; 8]) -> Self {
        let mut port = Self { pins };
        port.set_output();
        port
    }
}

impl DataPort for FlexDataPort<'_> {
    fn write(&mut self, byte: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if byte & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
    }

    fn read(&mut self) -> u8 {
        self.pins
            .iter()
            .enumerate()
            .fold(0u8, |acc, (bit, pin)| acc | ((pin.is_high() as u8) << bit))
    }

    fn set_input(&mut self) {
        for pin in self.pins.iter_mut() {
            pin.set_as_input(Pull::None);
        }
    }

    fn set_output(&mut self) {
        for pin in self.pins.iter_mut() {
            pin.set_as_output(Speed::High);
        }
    }
}
