//! Command byte table
//!
//! Command bytes as seen by an 8-bit LSB-first receiver. Anything not listed
//! here is ignored and carries no data.

/// Load display register A (6 data bytes)
pub const CMD_REGISTER_A: u8 = 0x0A;
/// Load display register B (6 data bytes)
pub const CMD_REGISTER_B: u8 = 0x1A;
/// Load display register C (6 data bytes)
pub const CMD_REGISTER_C: u8 = 0x2A;
/// Load annunciator register (2 data bytes)
pub const CMD_ANNUNCIATOR: u8 = 0xBC;
/// Select display
pub const CMD_SELECT_DISPLAY: u8 = 0xFC;
/// Undocumented, seen at power-up
pub const CMD_UNKNOWN_B8: u8 = 0xB8;
/// Display on/off
pub const CMD_DISPLAY_ON_OFF: u8 = 0xC8;

/// Display register addressed by a data-carrying command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Digit register A (low nibbles of the segment codes)
    A,
    /// Digit register B (high bits and punctuation)
    B,
    /// Digit register C (top bit of the segment codes)
    C,
    /// Annunciator bitmask
    Annunciator,
}

impl Register {
    /// All registers in frame set order
    pub const ALL: [Register; 4] = [Register::A, Register::B, Register::C, Register::Annunciator];

    /// Position of this register in a frame set
    pub const fn index(self) -> usize {
        match self {
            Register::A => 0,
            Register::B => 1,
            Register::C => 2,
            Register::Annunciator => 3,
        }
    }

    /// Number of data bytes that follow the command
    pub const fn data_len(self) -> u8 {
        match self {
            Register::Annunciator => 2,
            _ => 6,
        }
    }

    /// Command byte that loads this register
    pub const fn command_byte(self) -> u8 {
        match self {
            Register::A => CMD_REGISTER_A,
            Register::B => CMD_REGISTER_B,
            Register::C => CMD_REGISTER_C,
            Register::Annunciator => CMD_ANNUNCIATOR,
        }
    }
}

/// Decoded command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Load a register with the following data burst
    Load(Register),
    /// Known command without payload
    SelectDisplay,
    /// Known command without payload
    Undocumented,
    /// Known command without payload
    DisplayOnOff,
    /// Anything else
    Unknown(u8),
}

impl Command {
    /// Decode a command byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            CMD_REGISTER_A => Command::Load(Register::A),
            CMD_REGISTER_B => Command::Load(Register::B),
            CMD_REGISTER_C => Command::Load(Register::C),
            CMD_ANNUNCIATOR => Command::Load(Register::Annunciator),
            CMD_SELECT_DISPLAY => Command::SelectDisplay,
            CMD_UNKNOWN_B8 => Command::Undocumented,
            CMD_DISPLAY_ON_OFF => Command::DisplayOnOff,
            other => Command::Unknown(other),
        }
    }

    /// Register loaded by this command, if any
    pub fn register(self) -> Option<Register> {
        match self {
            Command::Load(register) => Some(register),
            _ => None,
        }
    }
}
