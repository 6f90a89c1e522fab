//! The flat byte addressable ram of the chipset.
//!
//! - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
//! - `0x000-0x04F` - Used for the built in `4x5` pixel font set (`0-F`)
//! - `0x200-0xFFF` - Program ROM and work RAM
//!
//! Every access is bounds checked, addresses outside of `0x000-0xFFF`
//! are reported and never wrapped.

use std::ops::Range;

use crate::{
    definitions::{cpu, display::fontset, memory},
    opcode::{self, Opcode},
    MemoryError, OpcodeError, RomError,
};

#[derive(Clone)]
pub struct Memory {
    ram: Box<[u8; memory::SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates zeroed memory with the fontset already loaded.
    pub fn new() -> Self {
        let mut ram = Box::new([0; memory::SIZE]);
        ram[fontset::LOCATION..(fontset::LOCATION + fontset::FONTSET.len())]
            .copy_from_slice(&fontset::FONTSET);
        Self { ram }
    }

    /// Will zero the whole memory and reload the fontset.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Copies the program image into memory starting at the program counter base.
    pub fn load_program(&mut self, data: &[u8]) -> Result<(), RomError> {
        if data.is_empty() {
            return Err(RomError::Empty);
        }
        if data.len() > cpu::PROGRAM_MAX_SIZE {
            return Err(RomError::TooLarge {
                size: data.len(),
                max: cpu::PROGRAM_MAX_SIZE,
            });
        }
        self.ram[cpu::PROGRAM_COUNTER..(cpu::PROGRAM_COUNTER + data.len())].copy_from_slice(data);
        Ok(())
    }

    /// Reads the big-endian opcode at the given pointer.
    pub fn opcode(&self, pointer: usize) -> Result<Opcode, OpcodeError> {
        opcode::build_opcode(&self.ram[..], pointer)
    }

    /// An empty access touches no address and is always valid.
    fn range(address: usize, len: usize) -> Result<Range<usize>, MemoryError> {
        match address.checked_add(len) {
            _ if len == 0 => Ok(0..0),
            Some(end) if end <= memory::SIZE => Ok(address..end),
            _ => Err(MemoryError::OutOfBounds { address, len }),
        }
    }

    pub fn read(&self, address: usize) -> Result<u8, MemoryError> {
        self.ram
            .get(address)
            .copied()
            .ok_or(MemoryError::OutOfBounds { address, len: 1 })
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<(), MemoryError> {
        let cell = self
            .ram
            .get_mut(address)
            .ok_or(MemoryError::OutOfBounds { address, len: 1 })?;
        *cell = value;
        Ok(())
    }

    /// Returns `len` bytes starting at `address`.
    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8], MemoryError> {
        let range = Self::range(address, len)?;
        Ok(&self.ram[range])
    }

    /// Copies the whole slice into memory starting at `address`, nothing is
    /// written if the slice doesn't fit.
    pub fn write_slice(&mut self, address: usize, data: &[u8]) -> Result<(), MemoryError> {
        let range = Self::range(address, data.len())?;
        self.ram[range].copy_from_slice(data);
        Ok(())
    }

    /// The raw content of the memory.
    pub fn as_slice(&self) -> &[u8] {
        &self.ram[..]
    }
}
