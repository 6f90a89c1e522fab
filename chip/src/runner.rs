use crate::{
    chip8::ChipSet,
    devices::{DisplayCommands, KeyboardCommands},
    opcode::Operation,
    ExecutionError,
};

/// Will run the chipset for the given amount of steps.
///
/// Before each step the keyboard state is copied into the chipset, after
/// every step that changed the screen the frame is handed to the display.
/// Stops at the first error, the chipset is halted afterwards. Returns the
/// operation of the last step.
pub fn run_cycles<D, K>(
    chip: &mut ChipSet,
    display: &mut D,
    keyboard: &K,
    cycles: usize,
) -> Result<Operation, ExecutionError>
where
    D: DisplayCommands,
    K: KeyboardCommands,
{
    let mut last_op = Operation::None;
    for _ in 0..cycles {
        chip.set_keyboard(&keyboard.get_keyboard());

        last_op = chip.next()?;

        if matches!(last_op, Operation::Draw) {
            /* draw the screen */
            display.display(chip.get_display());
        }
    }
    Ok(last_op)
}

/// Runs the amount of steps that fit into a single timer period and
/// ticks the timers once afterwards. A host calling this at the timer
/// rate runs the chipset at the configured speed.
pub fn run_frame<D, K>(
    chip: &mut ChipSet,
    display: &mut D,
    keyboard: &K,
) -> Result<Operation, ExecutionError>
where
    D: DisplayCommands,
    K: KeyboardCommands,
{
    let cycles = chip.get_config().cycles_per_tick() as usize;
    let op = run_cycles(chip, display, keyboard, cycles)?;
    chip.tick_timers();
    Ok(op)
}
