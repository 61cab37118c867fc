//! STM32F0-specific HAL for the Eidolon firmware
//!
//! This crate implements the `eidolon-hal` traits on top of embassy-stm32:
//!
//! - [`gpio`] - LCD strobes and the 8-bit data port from flexible pins
//! - [`sniffer`] - SPI1 in receive-only slave mode plus the SYNC and PWO edge lines
//!
//! # Features
//!
//! - `stm32f042k6` - STM32F042K6 (the replacement display board)
//! - `stm32f072cb` - STM32F072CB (development board)
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod gpio;
pub mod sniffer;

pub use gpio::{FlexDataPort, Strobe};
pub use sniffer::SpiSniffer;
