use std::convert::TryFrom;

use rand::RngCore;

use crate::{
    config::Config,
    definitions::{cpu, keyboard, memory},
    devices::Keyboard,
    display::{Row, Screen},
    memory::Memory,
    opcode::{ChipOpcodes, Opcode, Opcodes, Operation, ProgramCounter, ProgramCounterStep},
    resources::Rom,
    timer::Timer,
    ExecutionError, ProcessError, RomError, StackError,
};

/// The execution state of the chipset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Every step executes the next opcode.
    Running,
    /// `FX0A` is blocking until a key is pressed, the program counter
    /// doesn't move.
    WaitingForKey,
    /// An earlier step failed, the chipset has to be reset or reloaded.
    Halted,
}

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
pub struct ChipSet {
    /// the loaded program, reloaded on reset
    pub(super) rom: Option<Rom>,
    pub(super) config: Config,
    /// all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    pub(super) memory: Memory,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: u16,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: usize,
    /// The stack is only used to store return addresses when subroutines are called.
    /// The length of the vec is the stack pointer, it always points at the next free slot.
    pub(super) stack: Vec<usize>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    pub(super) sound_timer: Timer,
    pub(super) display: Screen,
    pub(super) keyboard: Keyboard,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
    pub(super) state: State,
}

impl Default for ChipSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipSet {
    /// will create a new chipset object without a program
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            rom: None,
            config,
            opcode: 0,
            memory: Memory::new(),
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: Vec::with_capacity(cpu::stack::SIZE),
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            display: Screen::new(),
            keyboard: Keyboard::new(),
            rng: Box::new(rand::rngs::OsRng),
            state: State::Running,
        }
    }

    /// will create a new chipset with the given rom loaded
    pub fn from_rom(rom: Rom) -> Self {
        let mut chip = Self::new();
        chip.load_rom(rom);
        chip
    }

    /// Resets the chipset and copies the rom into memory.
    pub fn load_rom(&mut self, rom: Rom) {
        log::info!("loading rom '{}' ({} bytes)", rom.get_name(), rom.len());
        self.rom = Some(rom);
        self.reset();
    }

    /// Resets the chipset and copies the raw program image into memory.
    pub fn load_program(&mut self, data: &[u8]) -> Result<(), RomError> {
        let rom = Rom::new("program", data.to_vec())?;
        self.load_rom(rom);
        Ok(())
    }

    /// Brings the chipset back into its power on state, the loaded
    /// rom (if any) is written into memory again.
    pub fn reset(&mut self) {
        self.memory.clear();
        if let Some(rom) = self.rom.as_ref() {
            // a rom is always validated on creation
            if let Err(err) = self.memory.load_program(rom.get_data()) {
                log::error!("unable to reload rom '{}': {}", rom.get_name(), err);
            }
        }
        self.opcode = 0;
        self.registers = [0; cpu::register::SIZE];
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER;
        self.stack.clear();
        self.delay_timer = Timer::default();
        self.sound_timer = Timer::default();
        self.display.clear();
        self.keyboard.reset();
        self.state = State::Running;
        log::info!("chipset reset");
    }

    /// will get the next opcode from memory
    pub(super) fn set_opcode(&mut self) -> Result<(), ProcessError> {
        self.opcode = 0;
        self.opcode = self.memory.opcode(self.program_counter)?;
        Ok(())
    }

    fn execute(&mut self) -> Result<Operation, ProcessError> {
        if self.state == State::Halted {
            return Err(ProcessError::Halted);
        }
        self.set_opcode()?;
        let opcode = Opcodes::try_from(self.opcode)?;
        log::debug!(
            "{:#06X}: {:#06X} {}",
            self.program_counter,
            self.opcode,
            opcode
        );
        self.calc(&opcode)
    }

    /// will advance the program by a single step
    ///
    /// Any error halts the chipset, every following step fails with
    /// [`ProcessError::Halted`](ProcessError::Halted).
    pub fn next(&mut self) -> Result<Operation, ExecutionError> {
        let pc = self.program_counter;
        self.execute().map_err(|kind| {
            if kind != ProcessError::Halted {
                log::warn!("halting at {:#06X}: {}", pc, kind);
            }
            self.state = State::Halted;
            ExecutionError {
                pc,
                opcode: self.opcode,
                kind,
            }
        })
    }

    /// Counts both timers down by one, expected to be called at 60Hz.
    pub fn tick_timers(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
    }

    /// Will write keyboard data into interncal keyboard representation.
    pub fn set_keyboard(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.keyboard.set_mult(keys);
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keyboard.set_key(key, to)
    }

    /// Will toggle the given key
    pub fn toggle_key(&mut self, key: usize) {
        self.keyboard.toggle_key(key)
    }

    /// Will get the current state of the keyboard
    pub fn get_keyboard(&self) -> &[bool] {
        self.keyboard.get_keys()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer.set_value(value)
    }

    /// Is the buzzer supposed to be on
    pub fn is_sound_active(&self) -> bool {
        self.sound_timer.is_active()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer.set_value(value)
    }

    /// Will return a immutable slice of the current display configuration
    pub fn get_display(&self) -> &[Row] {
        self.display.rows()
    }

    pub fn get_screen(&self) -> &Screen {
        &self.display
    }

    pub fn get_registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn get_index_register(&self) -> u16 {
        self.index_register
    }

    pub fn get_program_counter(&self) -> usize {
        self.program_counter
    }

    /// The return addresses, oldest first
    pub fn get_stack(&self) -> &[usize] {
        &self.stack
    }

    pub fn get_memory(&self) -> &[u8] {
        self.memory.as_slice()
    }

    /// The last opcode fetched
    pub fn get_opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn get_name(&self) -> Option<&str> {
        self.rom.as_ref().map(Rom::get_name)
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_state(&self) -> State {
        self.state
    }

    pub fn is_waiting(&self) -> bool {
        self.state == State::WaitingForKey
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    /// Replaces the random number generator used by `CXNN`.
    pub fn set_rng<R: RngCore + Send + 'static>(&mut self, rng: R) {
        self.rng = Box::new(rng);
    }

    /// Will push the current pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: usize) -> Result<(), StackError> {
        if self.stack.len() >= cpu::stack::SIZE {
            Err(StackError::Full)
        } else {
            log::trace!("push {:#06X} at depth {}", pointer, self.stack.len());
            self.stack.push(pointer);
            Ok(())
        }
    }

    /// Will pop from the stack
    pub(super) fn pop_stack(&mut self) -> Result<usize, StackError> {
        let pointer = self.stack.pop().ok_or(StackError::Empty)?;
        log::trace!("pop {:#06X} at depth {}", pointer, self.stack.len());
        Ok(pointer)
    }
}

impl ProgramCounter for ChipSet {
    fn step(&mut self, step: ProgramCounterStep) -> Result<(), ProcessError> {
        use crate::definitions::memory::opcodes::SIZE;

        self.program_counter = match step {
            ProgramCounterStep::None => self.program_counter,
            ProgramCounterStep::Next => self.program_counter + SIZE,
            ProgramCounterStep::Skip => self.program_counter + 2 * SIZE,
            ProgramCounterStep::Jump(pointer) => {
                // opcodes are aligned to even addresses
                if pointer > memory::LAST || pointer % SIZE != 0 {
                    return Err(ProcessError::InvalidJump(pointer));
                }
                pointer
            }
        };
        Ok(())
    }
}
