//! SBN166G column controller driver
//!
//! Three SBN166G controllers (32 rows x 80 columns each) share one 68-type
//! parallel bus. Control bytes can be broadcast to every chip at once, data
//! cycles always go to a single chip.

use eidolon_hal::lcd::{ChipSelect, LcdBus};

use crate::backend::{DisplayController, GlcdError};
use crate::geometry::{Chip, CHIP_COLUMNS, LCD_PAGES};

/// SBN166G commands
#[allow(dead_code)]
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const START_LINE: u8 = 0xC0;
    pub const SET_PAGE: u8 = 0xB8;
    pub const SET_COLUMN: u8 = 0x00;
    pub const ADC_NORMAL: u8 = 0xA0;
    pub const ADC_REVERSE: u8 = 0xA1;
    pub const STATIC_OFF: u8 = 0xA4;
    pub const STATIC_ON: u8 = 0xA5;
    pub const DUTY_16: u8 = 0xA8;
    pub const DUTY_32: u8 = 0xA9;
    pub const RMW_START: u8 = 0xE0;
    pub const RMW_END: u8 = 0xEE;
    pub const RESET: u8 = 0xE2;
}

/// Driver for the three controllers of the 202x32 module
pub struct Sbn166g<B> {
    bus: B,
}

impl<B: LcdBus> Sbn166g<B> {
    /// Create a new driver
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    fn command(&mut self, chips: ChipSelect, command: u8) -> Result<(), GlcdError<B::Error>> {
        self.bus.write_command(chips, command).map_err(GlcdError::Bus)
    }
}

impl<B: LcdBus> DisplayController for Sbn166g<B> {
    type Error = GlcdError<B::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        let init_cmds: &[u8] = &[
            cmd::STATIC_OFF,
            cmd::DUTY_32,
            cmd::ADC_NORMAL,
            cmd::RMW_END,
            cmd::START_LINE,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(ChipSelect::ALL, c)?;
        }

        Ok(())
    }

    fn fill(&mut self, byte: u8) -> Result<(), Self::Error> {
        for page in 0..LCD_PAGES {
            self.command(ChipSelect::ALL, cmd::SET_PAGE + page)?;
            self.command(ChipSelect::ALL, cmd::SET_COLUMN)?;
            for _ in 0..CHIP_COLUMNS {
                self.bus
                    .write_data(ChipSelect::ALL, byte)
                    .map_err(GlcdError::Bus)?;
            }
        }
        Ok(())
    }

    fn set_column(&mut self, chip: Chip, column: u8) -> Result<(), Self::Error> {
        if column >= CHIP_COLUMNS {
            return Err(GlcdError::InvalidColumn(column));
        }
        self.command(chip.select(), cmd::SET_COLUMN + column)
    }

    fn set_page(&mut self, page: u8) -> Result<(), Self::Error> {
        if page >= LCD_PAGES {
            return Err(GlcdError::InvalidPage(page));
        }
        self.command(ChipSelect::ALL, cmd::SET_PAGE + page)
    }

    fn read_data(&mut self, chip: Chip) -> Result<u8, Self::Error> {
        // Column stays put between RMW start and end
        self.command(ChipSelect::ALL, cmd::RMW_START)?;
        let _dummy = self.bus.read_data(chip.select()).map_err(GlcdError::Bus)?;
        let data = self.bus.read_data(chip.select()).map_err(GlcdError::Bus)?;
        self.command(ChipSelect::ALL, cmd::RMW_END)?;
        Ok(data)
    }

    fn write_data(&mut self, chip: Chip, byte: u8) -> Result<(), Self::Error> {
        self.bus
            .write_data(chip.select(), byte)
            .map_err(GlcdError::Bus)
    }
}
