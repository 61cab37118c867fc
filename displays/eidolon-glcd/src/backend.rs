//! Display controller trait
//!
//! Defines the page/column interface the plane writer drives. One
//! implementation talks to real SBN166G controllers, tests use an in-memory
//! model.

use crate::geometry::Chip;

/// Controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlcdError<E> {
    /// Bus cycle failed
    Bus(E),
    /// Page address outside the panel
    InvalidPage(u8),
    /// Column address outside the controller RAM
    InvalidColumn(u8),
}

/// Page-addressed display controller set
///
/// Addresses are per controller: `set_column` targets one chip, `set_page`
/// goes to every chip. Writes advance the addressed chip's column, reads
/// do not.
pub trait DisplayController {
    /// Error type for controller access
    type Error;

    /// Bring every controller out of reset and switch the panel on
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Fill the whole RAM of every controller with `byte`
    ///
    /// Leaves the column and page addresses undefined.
    fn fill(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Set the column address of one controller
    fn set_column(&mut self, chip: Chip, column: u8) -> Result<(), Self::Error>;

    /// Set the page address of every controller
    fn set_page(&mut self, page: u8) -> Result<(), Self::Error>;

    /// Read the byte at the current address without moving it
    fn read_data(&mut self, chip: Chip) -> Result<u8, Self::Error>;

    /// Write a byte at the current address and advance the column
    fn write_data(&mut self, chip: Chip, byte: u8) -> Result<(), Self::Error>;
}
