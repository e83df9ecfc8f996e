use crate::util::bit_splitter::BitSplitter;

/// A wrapper for addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addr(pub u16);

/// A wrapper for registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg(pub u8);

/// A wrapper for constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Const(pub u8);

/// A single instruction from the CHIP-8 instruction set.
/// Two bytes written in hexadecimal, with the following special characters:
/// - NNN: address
/// - NN: 8-bit constant
/// - N: 4-bit constant
/// - X and Y: 4-bit register identifier
/// - PC: Program counter
/// - I: 16 bit register for memory address
/// - VN: One of the 16 available variables (register identifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    ClearScreen, // 00E0
    Return, // 00EE
    Goto(Addr), // 1NNN
    Call(Addr), // 2NNN
    IfRegEqConst(Reg, Const), // 3XNN
    IfRegNeqConst(Reg, Const), // 4XNN
    IfRegEqReg(Reg, Reg), // 5XY0
    SetRegToConst(Reg, Const), // 6XNN
    IncRegByConst(Reg, Const), // 7XNN
    SetRegToReg(Reg, Reg), // 8XY0
    BitwiseOr(Reg, Reg), // 8XY1
    BitwiseAnd(Reg, Reg), // 8XY2
    BitwiseXor(Reg, Reg), // 8XY3
    IncRegByReg(Reg, Reg), // 8XY4
    DecRegByReg(Reg, Reg), // 8XY5
    BitshiftRight(Reg, Reg), // 8XY6
    SetVxVyMinusVx(Reg, Reg), // 8XY7
    BitshiftLeft(Reg, Reg), // 8XYE
    IfRegNeqReg(Reg, Reg), // 9XY0
    SetI(Addr), // ANNN
    SetPcToV0PlusAddr(Addr), // BNNN
    SetVxRand(Reg, Const), // CXNN
    Draw(Reg, Reg, Const), // DXYN
    IfKeyEqVx(Reg), // EX9E
    IfKeyNeqVx(Reg), // EXA1
    SetRegToDelayTimer(Reg), // FX07
    SetRegToGetKey(Reg), // FX0A
    SetDelayTimerToReg(Reg), // FX15
    SetSoundTimerToReg(Reg), // FX18
    AddRegToI(Reg), // FX1E
    SetIToSpriteAddrVx(Reg), // FX29
    SetIToBcdOfReg(Reg), // FX33
    RegDump(Reg), // FX55
    RegLoad(Reg), // FX65
    /// Anything else. Executes as a no-op.
    Unknown(u16),
}

impl Instruction {
    pub fn from_two_u8(left: u8, right: u8) -> Instruction {
        Instruction::decode(BitSplitter::from_two_u8(left, right).as_u16())
    }

    /// The high nibble picks the family. Families 0, 8 and E are split
    /// further on the low nibble, family F on the low byte.
    pub fn decode(value: u16) -> Instruction {
        let opcode = BitSplitter::from_u16(value);
        let (x, y) = (Reg(opcode.x()), Reg(opcode.y()));
        match opcode.high_nibble() {
            0x0 => Self::decode_system(opcode),
            0x1 => Instruction::Goto(Addr(opcode.nnn())),
            0x2 => Instruction::Call(Addr(opcode.nnn())),
            0x3 => Instruction::IfRegEqConst(x, Const(opcode.kk())),
            0x4 => Instruction::IfRegNeqConst(x, Const(opcode.kk())),
            0x5 => Instruction::IfRegEqReg(x, y),
            0x6 => Instruction::SetRegToConst(x, Const(opcode.kk())),
            0x7 => Instruction::IncRegByConst(x, Const(opcode.kk())),
            0x8 => Self::decode_arithmetic(opcode),
            0x9 => Instruction::IfRegNeqReg(x, y),
            0xA => Instruction::SetI(Addr(opcode.nnn())),
            0xB => Instruction::SetPcToV0PlusAddr(Addr(opcode.nnn())),
            0xC => Instruction::SetVxRand(x, Const(opcode.kk())),
            0xD => Instruction::Draw(x, y, Const(opcode.n())),
            0xE => Self::decode_key(opcode),
            _ => Self::decode_misc(opcode),
        }
    }

    fn decode_system(opcode: BitSplitter) -> Instruction {
        match opcode.n() {
            0x0 => Instruction::ClearScreen,
            0xE => Instruction::Return,
            _ => Instruction::Unknown(opcode.as_u16()),
        }
    }

    fn decode_arithmetic(opcode: BitSplitter) -> Instruction {
        let (x, y) = (Reg(opcode.x()), Reg(opcode.y()));
        match opcode.n() {
            0x0 => Instruction::SetRegToReg(x, y),
            0x1 => Instruction::BitwiseOr(x, y),
            0x2 => Instruction::BitwiseAnd(x, y),
            0x3 => Instruction::BitwiseXor(x, y),
            0x4 => Instruction::IncRegByReg(x, y),
            0x5 => Instruction::DecRegByReg(x, y),
            0x6 => Instruction::BitshiftRight(x, y),
            0x7 => Instruction::SetVxVyMinusVx(x, y),
            0xE => Instruction::BitshiftLeft(x, y),
            _ => Instruction::Unknown(opcode.as_u16()),
        }
    }

    fn decode_key(opcode: BitSplitter) -> Instruction {
        let x = Reg(opcode.x());
        match opcode.n() {
            0xE => Instruction::IfKeyEqVx(x),
            0x1 => Instruction::IfKeyNeqVx(x),
            _ => Instruction::Unknown(opcode.as_u16()),
        }
    }

    fn decode_misc(opcode: BitSplitter) -> Instruction {
        let x = Reg(opcode.x());
        match opcode.kk() {
            0x07 => Instruction::SetRegToDelayTimer(x),
            0x0A => Instruction::SetRegToGetKey(x),
            0x15 => Instruction::SetDelayTimerToReg(x),
            0x18 => Instruction::SetSoundTimerToReg(x),
            0x1E => Instruction::AddRegToI(x),
            0x29 => Instruction::SetIToSpriteAddrVx(x),
            0x33 => Instruction::SetIToBcdOfReg(x),
            0x55 => Instruction::RegDump(x),
            0x65 => Instruction::RegLoad(x),
            _ => Instruction::Unknown(opcode.as_u16()),
        }
    }
}
