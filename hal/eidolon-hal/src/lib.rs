//! Eidolon Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the sniffer and the renderer are
//! written against. Chip-specific crates implement them so the protocol and
//! rendering code can be tested on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (eidolon-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  eidolon-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ eidolon-hal-  │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::DataPort`] - Digital I/O for the LCD bus
//! - [`sniffer::BusPeripheral`] - The passive SPI slave listening to the instrument
//! - [`lcd::LcdBus`] - 68-type parallel bus to the LCD column controllers

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod lcd;
pub mod sniffer;

// Re-export key traits at crate root for convenience
pub use gpio::{DataPort, OutputPin};
pub use lcd::{ChipSelect, LcdBus, Parallel68Bus};
pub use sniffer::{BusPeripheral, LineEdge, SnifferConfig};
