use crate::{
    definitions::{cpu, display::fontset, memory},
    opcode::{
        ArithmeticOp, ChipOpcodes, KeyOp, MiscOp, Operation, ProgramCounterStep, Zero,
    },
    ProcessError,
};

use super::{ChipSet, State};

impl ChipSet {
    /// Reads the keypad state of the key stored in `VX`.
    fn key_of(&self, x: usize) -> Result<bool, ProcessError> {
        let key = self.registers[x];
        self.keyboard
            .is_pressed(key as usize)
            .ok_or(ProcessError::InvalidKey(key))
    }
}

impl ChipOpcodes for ChipSet {
    fn zero(&mut self, opcode: Zero) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match opcode {
            Zero::Clear => {
                // 00E0
                // clear display
                self.display.clear();
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            Zero::Return => {
                // 00EE
                // Return from sub routine => pop from stack, the stack holds the
                // address of the call, so continue after it
                let pc = self.pop_stack()?;
                Ok((
                    ProgramCounterStep::Jump(pc + memory::opcodes::SIZE),
                    Operation::None,
                ))
            }
        }
    }

    fn jump(&self, nnn: usize) -> Result<ProgramCounterStep, ProcessError> {
        // 1NNN
        Ok(ProgramCounterStep::Jump(nnn))
    }

    fn call(&mut self, nnn: usize) -> Result<ProgramCounterStep, ProcessError> {
        // 2NNN
        self.push_stack(self.program_counter)?;
        Ok(ProgramCounterStep::Jump(nnn))
    }

    fn skip_equal(&self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError> {
        // 3XNN
        Ok(ProgramCounterStep::cond(self.registers[x] == nn))
    }

    fn skip_not_equal(&self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError> {
        // 4XNN
        Ok(ProgramCounterStep::cond(self.registers[x] != nn))
    }

    fn skip_registers_equal(
        &self,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError> {
        // 5XY0
        Ok(ProgramCounterStep::cond(
            self.registers[x] == self.registers[y],
        ))
    }

    fn load(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError> {
        // 6XNN
        self.registers[x] = nn;
        Ok(ProgramCounterStep::Next)
    }

    fn add(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError> {
        // 7XNN
        // let VX overflow, but ignore carry
        self.registers[x] = self.registers[x].wrapping_add(nn);
        Ok(ProgramCounterStep::Next)
    }

    fn arithmetic(
        &mut self,
        op: ArithmeticOp,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError> {
        let vx = self.registers[x];
        let vy = self.registers[y];

        // the flag is written after the result, so a flag producing
        // opcode targeting VF leaves the flag in VF
        let (res, flag) = match op {
            ArithmeticOp::Load => (vy, None),
            ArithmeticOp::Or => (vx | vy, None),
            ArithmeticOp::And => (vx & vy, None),
            ArithmeticOp::Xor => (vx ^ vy, None),
            ArithmeticOp::Add => {
                // 8XY4
                // the carry is taken from the full sum
                let sum = vx as u16 + vy as u16;
                (sum as u8, Some(sum > u8::MAX as u16))
            }
            ArithmeticOp::Sub => {
                // 8XY5
                // VF is NOT borrow
                (vx.wrapping_sub(vy), Some(vx >= vy))
            }
            ArithmeticOp::ShiftRight => {
                // 8XY6
                (vx >> 1, Some(vx & 0x01 == 0x01))
            }
            ArithmeticOp::SubReversed => {
                // 8XY7
                (vy.wrapping_sub(vx), Some(vy >= vx))
            }
            ArithmeticOp::ShiftLeft => {
                // 8XYE
                const MOST_SIGNIFICANT: u8 = 1 << 7;
                (vx << 1, Some(vx & MOST_SIGNIFICANT != 0))
            }
        };

        self.registers[x] = res;
        if let Some(flag) = flag {
            self.registers[cpu::register::LAST] = flag as u8;
        }
        Ok(ProgramCounterStep::Next)
    }

    fn skip_registers_not_equal(
        &self,
        x: usize,
        y: usize,
    ) -> Result<ProgramCounterStep, ProcessError> {
        // 9XY0
        Ok(ProgramCounterStep::cond(
            self.registers[x] != self.registers[y],
        ))
    }

    fn set_index(&mut self, nnn: usize) -> Result<ProgramCounterStep, ProcessError> {
        // ANNN
        self.index_register = nnn as u16;
        Ok(ProgramCounterStep::Next)
    }

    fn jump_offset(&self, nnn: usize) -> Result<ProgramCounterStep, ProcessError> {
        // BNNN
        let v0 = self.registers[0] as usize;
        Ok(ProgramCounterStep::Jump(nnn + v0))
    }

    fn random(&mut self, x: usize, nn: u8) -> Result<ProgramCounterStep, ProcessError> {
        // CXNN
        // using a fill bytes call here, as the trait RngCore does not
        // support random u8.
        let mut rand: [u8; 1] = [0];
        self.rng.fill_bytes(&mut rand);
        self.registers[x] = rand[0] & nn;
        Ok(ProgramCounterStep::Next)
    }

    fn draw(
        &mut self,
        x: usize,
        y: usize,
        n: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        // DXYN
        // see https://tobiasvl.github.io/blog/write-a-chip-8-emulator/
        let coorx = self.registers[x] as usize;
        let coory = self.registers[y] as usize;

        let sprite = self.memory.slice(self.index_register as usize, n)?;

        // Set VF to 0
        self.registers[cpu::register::LAST] = 0;

        for (i, row) in sprite.iter().enumerate() {
            if self.display.draw_row(coorx, coory + i, *row) {
                self.registers[cpu::register::LAST] = 1;
            }
        }

        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn key(&self, op: KeyOp, x: usize) -> Result<ProgramCounterStep, ProcessError> {
        let pressed = self.key_of(x)?;
        let step = match op {
            // EX9E
            KeyOp::Pressed => ProgramCounterStep::cond(pressed),
            // EXA1
            KeyOp::NotPressed => ProgramCounterStep::cond(!pressed),
        };
        Ok(step)
    }

    fn misc(
        &mut self,
        op: MiscOp,
        x: usize,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let index = self.index_register as usize;
        match op {
            MiscOp::GetDelayTimer => {
                // FX07
                self.registers[x] = self.delay_timer.get_value();
            }
            MiscOp::AwaitKeyPress => {
                // FX0A
                // Blocking, the opcode is executed again until a key is down.
                match self.keyboard.pressed() {
                    Some(key) => {
                        self.registers[x] = key as u8;
                        self.state = State::Running;
                    }
                    None => {
                        self.state = State::WaitingForKey;
                        return Ok((ProgramCounterStep::None, Operation::Wait));
                    }
                }
            }
            MiscOp::SetDelayTimer => {
                // FX15
                self.delay_timer.set_value(self.registers[x]);
            }
            MiscOp::SetSoundTimer => {
                // FX18
                self.sound_timer.set_value(self.registers[x]);
            }
            MiscOp::AddVxToI => {
                // FX1E
                let vx = self.registers[x] as u16;
                let sum = self.index_register as usize + vx as usize;
                self.index_register = self.index_register.wrapping_add(vx);
                if self.config.index_overflow_flag {
                    self.registers[cpu::register::LAST] = (sum > memory::LAST) as u8;
                }
            }
            MiscOp::SetIToSprite => {
                // FX29
                let digit = self.registers[x];
                if digit > 0xF {
                    return Err(ProcessError::InvalidFontDigit(digit));
                }
                let location = fontset::LOCATION + fontset::CHAR_SIZE * digit as usize;
                self.index_register = location as u16;
            }
            MiscOp::StoreBCD => {
                // FX33
                let r = self.registers[x];
                // 246u8 / 100 => 2, 246u8 / 10 => 24 % 10 => 4, 246u8 % 10 => 6
                self.memory.write_slice(index, &[r / 100, r / 10 % 10, r % 10])?;
            }
            MiscOp::StoreV0ToVx => {
                // FX55
                // I itself is left unmodified.
                self.memory.write_slice(index, &self.registers[..=x])?;
            }
            MiscOp::FillV0ToVx => {
                // FX65
                let data = self.memory.slice(index, x + 1)?;
                self.registers[..=x].copy_from_slice(data);
            }
        }
        Ok((ProgramCounterStep::Next, Operation::None))
    }
}
