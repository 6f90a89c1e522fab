//! The monochrome framebuffer of the chipset.

use std::fmt;

use crate::definitions::display::{HEIGHT, WIDTH};

/// A single row of pixels.
pub type Row = [bool; WIDTH];

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`. Stored row major with the origin in the top left corner.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    pixels: Box<[Row; HEIGHT]>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            pixels: Box::new([[false; WIDTH]; HEIGHT]),
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        for row in self.pixels.iter_mut() {
            *row = [false; WIDTH];
        }
    }

    /// Flips the pixel at the given position, the coordinates wrap around
    /// the screen edges. Returns `true` if the pixel was turned off.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.pixels[y % HEIGHT][x % WIDTH];
        let erased = *pixel;
        *pixel = !*pixel;
        erased
    }

    /// Draws a single sprite row (msb first) at the given position and
    /// reports if any pixel was erased.
    pub fn draw_row(&mut self, x: usize, y: usize, row: u8) -> bool {
        const BYTE: usize = 8;
        let mut collision = false;
        for column in 0..BYTE {
            let mask = 0x80 >> column;
            if row & mask == 0 {
                continue;
            }
            collision |= self.toggle(x + column, y);
        }
        collision
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Read only access to all the rows.
    pub fn rows(&self) -> &[Row] {
        &self.pixels[..]
    }

    /// The amount of pixels currently turned on.
    pub fn lit(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen").field("lit", &self.lit()).finish()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.iter() {
            for &pixel in row.iter() {
                write!(f, "{}", if pixel { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
