//! A chip8 interpreter core. The host owns the window, the keypad and the
//! clock, the chipset only executes single steps and reports back.
pub mod chip8;
pub mod config;
pub mod definitions;
pub mod devices;
pub mod display;
pub mod memory;
pub mod opcode;
pub mod resources;
pub mod timer;
mod error;

// reexporting for convinience
mod runner;
pub use error::*;
pub use runner::*;
