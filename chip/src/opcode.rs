//! Opcode abstractions, functionality and constants.
use std::{
    convert::{TryFrom, TryInto},
    fmt,
};

use crate::{OpcodeError, ProcessError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the mask for the second nibble
pub(crate) const OPCODE_MASK_0F00: u16 = OPCODE_MASK_0FFF & OPCODE_MASK_FF00;

/// the mask for the third nibble
pub(crate) const OPCODE_MASK_00F0: u16 = OPCODE_MASK_00FF & OPCODE_MASK_FFF0;

/// the size of a single nibble
const NIBBLE_SIZE: u16 = 0x4;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use chip::OpcodeError;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let pointer = 3;
/// # let err = OpcodeError::MemoryInvalid {pointer, len: SPLIT_OPCODE.len() };
/// # assert_eq!(Err(err), build_opcode(&SPLIT_OPCODE, pointer));
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, OpcodeError> {
    // controlling that there is no illegal access here
    if pointer < data.len() && pointer + 1 < data.len() {
        Ok(Opcode::from_be_bytes([data[pointer], data[pointer + 1]]))
    } else {
        Err(OpcodeError::MemoryInvalid {
            pointer,
            len: data.len(),
        })
    }
}

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// the opcode type, the top nibble `T___`
    fn t(&self) -> u8;

    /// the 12-bit address `_NNN`
    fn nnn(&self) -> usize;

    /// the lowest nibble `___N`
    fn n(&self) -> usize;

    /// the register index `_X__`
    fn x(&self) -> usize;

    /// the register index `__Y_`
    fn y(&self) -> usize;

    /// the immediate byte `__NN`
    fn nn(&self) -> u8;

    /// this is an opcode extractor for the opcode type `TXNN`
    fn xnn(&self) -> (usize, u8) {
        (self.x(), self.nn())
    }

    /// this is an opcode extractor for the opcode type `TXYN`
    fn xyn(&self) -> (usize, usize, usize) {
        (self.x(), self.y(), self.n())
    }
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1);
    /// ```
    fn t(&self) -> u8 {
        ((self & OPCODE_MASK_F000) >> (3 * NIBBLE_SIZE)) as u8
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> usize {
        (self & OPCODE_MASK_0FFF) as usize
    }

    fn n(&self) -> usize {
        (self & OPCODE_MASK_000F) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0F00) >> (2 * NIBBLE_SIZE)) as usize
    }

    fn y(&self) -> usize {
        ((self & OPCODE_MASK_00F0) >> NIBBLE_SIZE) as usize
    }

    fn nn(&self) -> u8 {
        (self & OPCODE_MASK_00FF) as u8
    }
}

/// The decoded fields of a single opcode.
///
/// Only lives for a single fetch-execute cycle, every field is
/// extracted, even if the opcode doesn't use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub t: u8,
    pub nnn: usize,
    pub n: usize,
    pub x: usize,
    pub y: usize,
    pub nn: u8,
}

impl Instruction {
    /// Decodes the two bytes at `PC` and `PC + 1`.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// let instruction = Instruction::from_bytes(0xD1, 0x25);
    /// assert_eq!(instruction.t, 0xD);
    /// assert_eq!((instruction.x, instruction.y, instruction.n), (1, 2, 5));
    /// ```
    pub fn from_bytes(high: u8, low: u8) -> Self {
        Opcode::from_be_bytes([high, low]).into()
    }
}

impl From<Opcode> for Instruction {
    fn from(opcode: Opcode) -> Self {
        Self {
            opcode,
            t: opcode.t(),
            nnn: opcode.nnn(),
            n: opcode.n(),
            x: opcode.x(),
            y: opcode.y(),
            nn: opcode.nn(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zero {
    /// `00E0` clears the display
    Clear,
    /// `00EE` returns from the subroutine
    Return,
}

/// The register to register operations of the `8XYT` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    /// `8XY0`
    Load,
    /// `8XY1`
    Or,
    /// `8XY2`
    And,
    /// `8XY3`
    Xor,
    /// `8XY4`
    Add,
    /// `8XY5`
    Sub,
    /// `8XY6`
    ShiftRight,
    /// `8XY7`
    SubReversed,
    /// `8XYE`
    ShiftLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOp {
    /// `EX9E`
    Pressed,
    /// `EXA1`
    NotPressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscOp {
    /// `FX07`
    GetDelayTimer,
    /// `FX0A`
    AwaitKeyPress,
    /// `FX15`
    SetDelayTimer,
    /// `FX18`
    SetSoundTimer,
    /// `FX1E`
    AddVxToI,
    /// `FX29`
    SetIToSprite,
    /// `FX33`
    StoreBCD,
    /// `FX55`
    StoreV0ToVx,
    /// `FX65`
    FillV0ToVx,
}

/// A fully decoded instruction, ready to be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcodes {
    Zero(Zero),
    Jump { nnn: usize },
    Call { nnn: usize },
    SkipEqual { x: usize, nn: u8 },
    SkipNotEqual { x: usize, nn: u8 },
    SkipRegistersEqual { x: usize, y: usize },
    Load { x: usize, nn: u8 },
    Add { x: usize, nn: u8 },
    Arithmetic { op: ArithmeticOp, x: usize, y: usize },
    SkipRegistersNotEqual { x: usize, y: usize },
    SetIndex { nnn: usize },
    JumpOffset { nnn: usize },
    Random { x: usize, nn: u8 },
    Draw { x: usize, y: usize, n: usize },
    Key { op: KeyOp, x: usize },
    Misc { op: MiscOp, x: usize },
}

#[inline]
fn err<T>(value: Opcode) -> Result<T, OpcodeError> {
    Err(OpcodeError::InvalidOpcode(value))
}

impl TryFrom<Instruction> for Opcodes {
    type Error = OpcodeError;

    fn try_from(value: Instruction) -> Result<Self, Self::Error> {
        let Instruction {
            opcode,
            t,
            nnn,
            n,
            x,
            y,
            nn,
        } = value;

        let res = match t {
            0x0 => match opcode {
                0x00E0 => Opcodes::Zero(Zero::Clear),
                0x00EE => Opcodes::Zero(Zero::Return),
                // 0NNN machine code routines are not supported
                _ => return err(opcode),
            },
            0x1 => Opcodes::Jump { nnn },
            0x2 => Opcodes::Call { nnn },
            0x3 => Opcodes::SkipEqual { x, nn },
            0x4 => Opcodes::SkipNotEqual { x, nn },
            0x5 if n == 0 => Opcodes::SkipRegistersEqual { x, y },
            0x6 => Opcodes::Load { x, nn },
            0x7 => Opcodes::Add { x, nn },
            0x8 => {
                let op = match n {
                    0x0 => ArithmeticOp::Load,
                    0x1 => ArithmeticOp::Or,
                    0x2 => ArithmeticOp::And,
                    0x3 => ArithmeticOp::Xor,
                    0x4 => ArithmeticOp::Add,
                    0x5 => ArithmeticOp::Sub,
                    0x6 => ArithmeticOp::ShiftRight,
                    0x7 => ArithmeticOp::SubReversed,
                    0xE => ArithmeticOp::ShiftLeft,
                    _ => return err(opcode),
                };
                Opcodes::Arithmetic { op, x, y }
            }
            0x9 if n == 0 => Opcodes::SkipRegistersNotEqual { x, y },
            0xA => Opcodes::SetIndex { nnn },
            0xB => Opcodes::JumpOffset { nnn },
            0xC => Opcodes::Random { x, nn },
            0xD => Opcodes::Draw { x, y, n },
            0xE => {
                let op = match nn {
                    0x9E => KeyOp::Pressed,
                    0xA1 => KeyOp::NotPressed,
                    _ => return err(opcode),
                };
                Opcodes::Key { op, x }
            }
            0xF => {
                let op = match nn {
                    0x07 => MiscOp::GetDelayTimer,
                    0x0A => MiscOp::AwaitKeyPress,
                    0x15 => MiscOp::SetDelayTimer,
                    0x18 => MiscOp::SetSoundTimer,
                    0x1E => MiscOp::AddVxToI,
                    0x29 => MiscOp::SetIToSprite,
                    0x33 => MiscOp::StoreBCD,
                    0x55 => MiscOp::StoreV0ToVx,
                    0x65 => MiscOp::FillV0ToVx,
                    _ => return err(opcode),
                };
                Opcodes::Misc { op, x }
            }
            _ => return err(opcode),
        };
        Ok(res)
    }
}

impl TryFrom<Opcode> for Opcodes {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        Instruction::from(value).try_into()
    }
}

impl fmt::Display for Opcodes {
    /// Writes the instruction in the common assembly notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Opcodes::Zero(Zero::Clear) => write!(f, "CLS"),
            Opcodes::Zero(Zero::Return) => write!(f, "RET"),
            Opcodes::Jump { nnn } => write!(f, "JP {:#05X}", nnn),
            Opcodes::Call { nnn } => write!(f, "CALL {:#05X}", nnn),
            Opcodes::SkipEqual { x, nn } => write!(f, "SE V{:X}, {:#04X}", x, nn),
            Opcodes::SkipNotEqual { x, nn } => write!(f, "SNE V{:X}, {:#04X}", x, nn),
            Opcodes::SkipRegistersEqual { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Opcodes::Load { x, nn } => write!(f, "LD V{:X}, {:#04X}", x, nn),
            Opcodes::Add { x, nn } => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Opcodes::Arithmetic { op, x, y } => {
                let name = match op {
                    ArithmeticOp::Load => "LD",
                    ArithmeticOp::Or => "OR",
                    ArithmeticOp::And => "AND",
                    ArithmeticOp::Xor => "XOR",
                    ArithmeticOp::Add => "ADD",
                    ArithmeticOp::Sub => "SUB",
                    ArithmeticOp::ShiftRight => return write!(f, "SHR V{:X}", x),
                    ArithmeticOp::SubReversed => "SUBN",
                    ArithmeticOp::ShiftLeft => return write!(f, "SHL V{:X}", x),
                };
                write!(f, "{} V{:X}, V{:X}", name, x, y)
            }
            Opcodes::SkipRegistersNotEqual { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            Opcodes::SetIndex { nnn } => write!(f, "LD I, {:#05X}", nnn),
            Opcodes::JumpOffset { nnn } => write!(f, "JP V0, {:#05X}", nnn),
            Opcodes::Random { x, nn } => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Opcodes::Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Opcodes::Key { op: KeyOp::Pressed, x } => write!(f, "SKP V{:X}", x),
            Opcodes::Key { op: KeyOp::NotPressed, x } => write!(f, "SKNP V{:X}", x),
            Opcodes::Misc { op, x } => match op {
                MiscOp::GetDelayTimer => write!(f, "LD V{:X}, DT", x),
                MiscOp::AwaitKeyPress => write!(f, "LD V{:X}, K", x),
                MiscOp::SetDelayTimer => write!(f, "LD DT, V{:X}", x),
                MiscOp::SetSoundTimer => write!(f, "LD ST, V{:X}", x),
                MiscOp::AddVxToI => write!(f, "ADD I, V{:X}", x),
                MiscOp::SetIToSprite => write!(f, "LD F, V{:X}", x),
                MiscOp::StoreBCD => write!(f, "LD B, V{:X}", x),
                MiscOp::StoreV0ToVx => write!(f, "LD [I], V{:X}", x),
                MiscOp::FillV0ToVx => write!(f, "LD V{:X}, [I]", x),
            },
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take after an opcode was executed.
pub enum ProgramCounterStep {
    /// Will not change the program counter, the same
    /// opcode is executed again on the next step
    None,
    /// Will advance the program counter to the next opcode
    Next,
    /// Will skip the next opcode
    Skip,
    /// The program counter was redirected to the given location.
    Jump(usize),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter by a step, fails if the
    /// program counter would leave memory.
    fn step(&mut self, step: ProgramCounterStep) -> Result<(), ProcessError>;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents a command from the interpreter up to the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The chipset is blocked until the next key press
    Wait,
    /// The display was changed and should be redrawn
    Draw,
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// `calc` is the dispatch, every other function is the handler of a single
/// opcode or of an opcode group sharing the top nibble.
pub trait ChipOpcodes: ProgramCounter {
    /// will execute the given opcode and move the program counter
    fn calc(&mut self, opcode: &Opcodes) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let mut step_op = |(step, op): (ProgramCounterStep, Operation)| {
            operation = op;
            step
        };

        let step = match *opcode {
            Opcodes::Zero(op) => self.zero(op).map(&mut step_op),
            Opcodes::Jump { nnn } => self.jump(nnn),
            Opcodes::Call { nnn } => self.call(nnn),
            Opcodes::SkipEqual { x, nn } => self.skip_equal(x, nn),
            Opcodes::SkipNotEqual { x, nn } => self.skip_not_equal(x, nn),
            Opcodes::SkipRegistersEqual { x, y } => self.skip_registers_equal(x, y),
            Opcodes::Load { x, nn } => self.load(x, nn),
            Opcodes::Add { x, nn } => self.add(x, nn),
            Opcodes::Arithmetic { op, x, y } => self.arithmetic(op, x, y),
            Opcodes::SkipRegistersNotEqual { x, y } => self.skip_registers_not_equal(x, y),
            Opcodes::SetIndex { nnn } => self.set_index(nnn),
            Opcodes::JumpOffset { nnn } => self.jump_offset(nnn),
            Opcodes::Random { x, nn } => self.random(x, nn),
            Opcodes::Draw { x, y, n } => self.draw(x, y, n).map(&mut step_op),
            Opcodes::Key { op, x } => self.key(op, x),
            Opcodes::Misc { op, x } => self.misc(op, x).map(&mut step_op),
        }?;

        self.step(step)?;
        Ok(operation)
    }

    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    fn zero(&mut self, opcode: Zero) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, nnn: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    fn call(&mut self, nnn: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond     - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    fn skip_equal(&self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError>;

    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn skip_not_equal(&self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError>;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    fn skip_registers_equal(&self, x: usize, y: usize)
        -> Result<ProgramCounterStep, ProcessError>;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn load(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError>;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn add(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError>;

    /// The register to register group `8XYT`
    ///
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `1` when `VX >= VY`, and to `0` otherwise.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `1` when `VY >= VX`, and to `0` otherwise.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    fn arithmetic(
        &mut self,
        op: ArithmeticOp,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn skip_registers_not_equal(
        &self,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    fn set_index(&mut self, nnn: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_offset(&self, nnn: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to a random byte and `NN`.
    fn random(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError>;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite of `N` rows read from `I` at `(VX, VY)`, wrapping around the screen edges. `VF` is set to `1` if any pixel was flipped from set to unset, and to `0` otherwise.
    fn draw(
        &mut self,
        x: usize,
        y: usize,
        n: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn key(&self, op: KeyOp, x: usize) -> Result<ProgramCounterStep, ProcessError>;

    /// The group `FXTT`
    ///
    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the font sprite for the digit in `VX`.
    /// - `FX33` - BCD      - `set_BCD(Vx)`         - Stores the decimal digits of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at address `I`.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`.
    fn misc(
        &mut self,
        op: MiscOp,
        x: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}
