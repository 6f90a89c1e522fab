use thiserror::Error;

use crate::opcode::Opcode;

/// The reason a single step of the chipset failed.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ProcessError {
    #[error("Invalid opcode state '{0}'.")]
    Opcode(#[from] OpcodeError),
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
    #[error("Invalid memory access '{0}'.")]
    Memory(#[from] MemoryError),
    #[error("The key {0:#04X} does not exist on the keypad.")]
    InvalidKey(u8),
    #[error("There is no font sprite for the digit {0:#04X}.")]
    InvalidFontDigit(u8),
    #[error("The program counter can not jump to {0:#06X}.")]
    InvalidJump(usize),
    #[error("The chipset was halted by an earlier error.")]
    Halted,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
    #[error("Pointer location invalid there can not be an opcode at {pointer}, if data len is {len}")]
    MemoryInvalid { pointer: usize, len: usize },
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum MemoryError {
    #[error("Access of {len} byte(s) at {address:#06X} is out of bounds.")]
    OutOfBounds { address: usize, len: usize },
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum RomError {
    #[error("The rom does not contain any data.")]
    Empty,
    #[error("The rom is {size} bytes long, but only {max} bytes fit into memory.")]
    TooLarge { size: usize, max: usize },
}

/// The error surfaced to the host, it contains where the
/// failure happened and which opcode caused it.
#[derive(Error, Debug, PartialEq, Clone)]
#[error("Execution failed at {pc:#06X} with opcode {opcode:#06X}: {kind}")]
pub struct ExecutionError {
    pub pc: usize,
    pub opcode: Opcode,
    #[source]
    pub kind: ProcessError,
}
