use std::fmt;

pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;

/// A pixel is either all ones or all zeroes, so toggling is a plain XOR.
pub const PIXEL_ON: u32 = 0xFFFF_FFFF;
pub const PIXEL_OFF: u32 = 0;

type Pixels = [[u32; SCREEN_WIDTH]; SCREEN_HEIGHT];
const EMPTY_SCREEN: Pixels = [[PIXEL_OFF; SCREEN_WIDTH]; SCREEN_HEIGHT];

/// The 64x32 monochrome framebuffer.
/// Only the emulator writes to it; renderers read it between cycles.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    pixels: Pixels,
}

impl Screen {
    pub fn new() -> Screen {
        Screen {
            pixels: EMPTY_SCREEN,
        }
    }

    pub fn clear(&mut self) {
        self.pixels = EMPTY_SCREEN;
    }

    /// Panics if `(x, y)` is off screen.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y][x]
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == PIXEL_ON
    }

    /// Flip a pixel and report whether it was set before, which is a collision.
    pub(crate) fn toggle(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.pixels[y][x];
        let was_set = *pixel == PIXEL_ON;
        *pixel ^= PIXEL_ON;
        was_set
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32; SCREEN_WIDTH]> {
        self.pixels.iter()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for pixel in row.iter() {
                write!(f, "{}", if *pixel == PIXEL_ON { "#" } else { " " })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screen {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "}}")
    }
}
