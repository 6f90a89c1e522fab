use std::fmt;

use crate::{definitions::keyboard, display::Row};

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will present the given frame
    fn display(&mut self, pixels: &[Row]);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard data
pub trait KeyboardCommands {
    /// Will return the current state of all keys
    fn get_keyboard(&self) -> [bool; keyboard::SIZE];
}

/// A single change of a key, as set by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    key: usize,
    was_down: bool,
    is_down: bool,
}

impl KeyEvent {
    pub fn key(&self) -> usize {
        self.key
    }

    /// The state before the change
    pub fn was_down(&self) -> bool {
        self.was_down
    }

    pub fn is_down(&self) -> bool {
        self.is_down
    }
}

/// The state of the hex keypad, keys `0x0` to `0xF`.
///
/// Besides the held keys the most recent single key change is kept, a
/// program waiting on `FX0A` prefers that key over the other held ones.
#[derive(Default, Debug, Clone)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
    last_event: Option<KeyEvent>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    /// Releases every key.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn toggle_key(&mut self, key: usize) {
        if let Some(&down) = self.keys.get(key) {
            self.set_key(key, !down);
        } else {
            log::warn!("ignoring toggle of unknown key {:#X}", key);
        }
    }

    /// Sets a single key, the other keys keep their state. Unknown keys
    /// are ignored.
    pub fn set_key(&mut self, key: usize, to: bool) {
        match self.keys.get_mut(key) {
            Some(slot) => {
                self.last_event = Some(KeyEvent {
                    key,
                    was_down: *slot,
                    is_down: to,
                });
                *slot = to;
            }
            None => log::warn!("ignoring unknown key {:#X}", key),
        }
    }

    /// Replaces the whole keyboard state with a new snapshot.
    pub fn set_mult(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.keys = *keys;
        self.last_event = None;
    }

    pub fn get_keys(&self) -> &[bool] {
        &self.keys
    }

    pub fn get_last(&self) -> Option<KeyEvent> {
        self.last_event
    }

    /// Is the key with the given index held down, `None` if there is no such key.
    pub fn is_pressed(&self, key: usize) -> Option<bool> {
        self.keys.get(key).copied()
    }

    /// The key a waiting program should receive. The last key set is
    /// preferred if it is still held, otherwise the lowest held key.
    pub fn pressed(&self) -> Option<usize> {
        match self.last_event {
            Some(event) if event.is_down && self.keys[event.key] => Some(event.key),
            _ => self.keys.iter().position(|&down| down),
        }
    }
}

impl fmt::Display for Keyboard {
    /// Prints the keys in the layout of the original hex keypad.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in keyboard::LAYOUT.iter() {
            for &key in row.iter() {
                if self.keys[key] {
                    write!(f, "[{:X}]", key)?;
                } else {
                    write!(f, " {:X} ", key)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
