//! In-memory controller model for host tests

extern crate std;

use core::convert::Infallible;
use std::vec::Vec;

use crate::backend::DisplayController;
use crate::geometry::{resolve_chip, Chip, CHIP_COLUMNS, LCD_PAGES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Init,
    Fill(u8),
    SetColumn(Chip, u8),
    SetPage(u8),
    Read(Chip),
    Write(Chip, u8),
}

/// Three controllers with auto-incrementing columns and a log of calls
pub struct MockController {
    ram: [[[u8; CHIP_COLUMNS as usize]; LCD_PAGES as usize]; 3],
    columns: [u8; 3],
    page: u8,
    pub ops: Vec<Op>,
}

impl MockController {
    pub fn new() -> Self {
        Self {
            ram: [[[0; CHIP_COLUMNS as usize]; LCD_PAGES as usize]; 3],
            columns: [0; 3],
            page: 0,
            ops: Vec::new(),
        }
    }

    /// RAM byte under a panel column
    pub fn byte_at(&self, x: u8, page: u8) -> u8 {
        let (chip, column) = resolve_chip(x).unwrap();
        self.ram[chip.index()][page as usize][column as usize]
    }

    pub fn set_byte(&mut self, x: u8, page: u8, byte: u8) {
        let (chip, column) = resolve_chip(x).unwrap();
        self.ram[chip.index()][page as usize][column as usize] = byte;
    }

    pub fn count(&self, matches: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| matches(op)).count()
    }

    pub fn reads(&self) -> usize {
        self.count(|op| matches!(op, Op::Read(_)))
    }

    pub fn writes(&self) -> usize {
        self.count(|op| matches!(op, Op::Write(..)))
    }
}

impl DisplayController for MockController {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Infallible> {
        self.ops.push(Op::Init);
        Ok(())
    }

    fn fill(&mut self, byte: u8) -> Result<(), Infallible> {
        self.ops.push(Op::Fill(byte));
        for chip in self.ram.iter_mut() {
            for page in chip.iter_mut() {
                page.fill(byte);
            }
        }
        Ok(())
    }

    fn set_column(&mut self, chip: Chip, column: u8) -> Result<(), Infallible> {
        self.ops.push(Op::SetColumn(chip, column));
        self.columns[chip.index()] = column;
        Ok(())
    }

    fn set_page(&mut self, page: u8) -> Result<(), Infallible> {
        self.ops.push(Op::SetPage(page));
        self.page = page;
        Ok(())
    }

    fn read_data(&mut self, chip: Chip) -> Result<u8, Infallible> {
        self.ops.push(Op::Read(chip));
        let column = self.columns[chip.index()] as usize;
        Ok(self.ram[chip.index()][self.page as usize][column])
    }

    fn write_data(&mut self, chip: Chip, byte: u8) -> Result<(), Infallible> {
        self.ops.push(Op::Write(chip, byte));
        let column = &mut self.columns[chip.index()];
        self.ram[chip.index()][self.page as usize][*column as usize] = byte;
        *column = (*column + 1) % CHIP_COLUMNS;
        Ok(())
    }
}
