//! The 4KB address space. Every address wraps modulo 4096.

pub const MEM_SIZE: usize = 4096;
pub const FONT_BASE: u16 = 0x050;
pub const PROGRAM_START: u16 = 0x200;
pub const MAX_PROGRAM_SIZE: usize = MEM_SIZE - PROGRAM_START as usize;

/// Bytes per font glyph.
pub const GLYPH_SIZE: u16 = 5;

pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Reduce any 16-bit address into the address space.
pub fn wrap(addr: u16) -> u16 {
    addr % MEM_SIZE as u16
}

pub struct Memory {
    bytes: [u8; MEM_SIZE],
}

impl Memory {
    /// Zeroed memory with the font copied to `FONT_BASE`.
    pub fn new() -> Memory {
        let mut bytes = [0; MEM_SIZE];
        let font_base = FONT_BASE as usize;
        bytes[font_base..font_base + FONT.len()].copy_from_slice(&FONT);
        Memory { bytes }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[wrap(addr) as usize]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[wrap(addr) as usize] = value;
    }

    /// Read the big-endian word at `addr` and `addr + 1`.
    pub fn read_u16(&self, addr: u16) -> u16 {
        let left = self.read(addr);
        let right = self.read(addr.wrapping_add(1));
        ((left as u16) << 8) | right as u16
    }

    /// Copy a program to `PROGRAM_START`. The caller checks the size.
    pub(crate) fn load_program(&mut self, program: &[u8]) {
        let start = PROGRAM_START as usize;
        self.bytes[start..start + program.len()].copy_from_slice(program);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_is_loaded_at_font_base() {
        let memory = Memory::new();
        assert_eq!(&memory.as_slice()[0x50..0xA0], &FONT[..]);
        assert!(memory.as_slice()[..0x50].iter().all(|b| *b == 0));
        assert!(memory.as_slice()[0xA0..].iter().all(|b| *b == 0));
    }

    #[test]
    fn addresses_wrap() {
        let mut memory = Memory::new();
        memory.write(0x1000, 0xAB);
        assert_eq!(memory.read(0x000), 0xAB);
        assert_eq!(memory.read(0xF000), 0xAB);
    }

    #[test]
    fn word_read_wraps_across_the_end() {
        let mut memory = Memory::new();
        memory.write(0xFFF, 0x12);
        memory.write(0x000, 0x34);
        assert_eq!(memory.read_u16(0xFFF), 0x1234);
    }

    #[test]
    fn program_fills_to_the_end_of_memory() {
        let mut memory = Memory::new();
        let program = vec![0xEE; MAX_PROGRAM_SIZE];
        memory.load_program(&program);
        assert_eq!(memory.read(0x200), 0xEE);
        assert_eq!(memory.read(0xFFF), 0xEE);
    }
}
