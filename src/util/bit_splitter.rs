/// A structure for easily splitting an opcode
/// into the fields the instruction set reads from it,
/// such as a single `u16`, four nibbles, or the `x`, `y`, `kk` and `nnn` operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSplitter(u16);

impl BitSplitter {
    pub fn from_u16(value: u16) -> BitSplitter {
        BitSplitter(value)
    }

    /// Big-endian: `left` is the byte at the lower address.
    pub fn from_two_u8(left: u8, right: u8) -> BitSplitter {
        BitSplitter(((left as u16) << 8) | right as u16)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn as_four_u8(&self) -> (u8, u8, u8, u8) {
        (
            self.high_nibble(),
            self.x(),
            self.y(),
            self.n(),
        )
    }

    /// The instruction family, `opcode >> 12`.
    pub fn high_nibble(&self) -> u8 {
        (self.0 >> 12) as u8
    }

    /// `(opcode & 0x0F00) >> 8`
    pub fn x(&self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// `(opcode & 0x00F0) >> 4`
    pub fn y(&self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// `opcode & 0x000F`
    pub fn n(&self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// `opcode & 0x00FF`
    pub fn kk(&self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// `opcode & 0x0FFF`
    pub fn nnn(&self) -> u16 {
        self.0 & 0x0FFF
    }
}
