//! The CHIP-8 machine state and the fetch-decode-execute cycle.

use std::fs;
use std::path::Path;

use crate::emulator::error::{LoadError, StackFault};
use crate::emulator::input::Keypad;
use crate::emulator::instruction::*;
use crate::emulator::memory::{self, Memory, FONT_BASE, GLYPH_SIZE, MAX_PROGRAM_SIZE, PROGRAM_START};
use crate::emulator::output::{Screen, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::emulator::rng::ByteSource;
use crate::emulator::stack::Stack;

pub const NUM_REGISTERS: usize = 16;
const FLAG: usize = 0xF;

pub struct Emulator {
    memory: Memory,
    registers: [u8; NUM_REGISTERS],
    delay_timer: u8,
    sound_timer: u8,
    i: u16,
    program_counter: u16,
    stack: Stack,
    opcode: u16,

    keypad: Keypad,
    screen: Screen,
    rng: ByteSource,
}

impl Emulator {
    /// Create a new emulator with a randomly seeded byte source
    pub fn new() -> Emulator {
        Emulator::with_byte_source(ByteSource::from_entropy())
    }

    /// Create a new emulator whose `Cxkk` results are reproducible
    pub fn with_seed(seed: u64) -> Emulator {
        Emulator::with_byte_source(ByteSource::from_seed(seed))
    }

    fn with_byte_source(rng: ByteSource) -> Emulator {
        Emulator {
            memory: Memory::new(),
            registers: [0; NUM_REGISTERS],
            delay_timer: 0,
            sound_timer: 0,
            i: 0,
            program_counter: PROGRAM_START,
            stack: Stack::new(),
            opcode: 0,

            keypad: Keypad::new(),
            screen: Screen::new(),
            rng,
        }
    }

    /// Forget the program and all state, keeping the byte source.
    pub fn reset(&mut self) {
        self.memory = Memory::new();
        self.registers = [0; NUM_REGISTERS];
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.i = 0;
        self.program_counter = PROGRAM_START;
        self.stack = Stack::new();
        self.opcode = 0;
        self.keypad.release_all();
        self.screen.clear();
    }

    /// Copy a program into memory at 0x200.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(LoadError::TooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        self.memory.load_program(program);
        log::info!("Loaded {} bytes at {:#05x}", program.len(), PROGRAM_START);
        Ok(())
    }

    /// Read a ROM file and copy it into memory at 0x200.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let program = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load(&program)
    }

    /// One full cycle: fetch, execute, then tick both timers.
    /// Timers tick even if the instruction faulted.
    pub fn cycle(&mut self) -> Result<(), StackFault> {
        let result = self.step();
        self.tick_timers();
        result
    }

    /// Load an instruction, advance the program counter past it and execute it.
    /// Does not touch the timers.
    pub fn step(&mut self) -> Result<(), StackFault> {
        // Each opcode is two bytes
        let addr = self.program_counter;
        self.opcode = self.memory.read_u16(addr);
        let instruction = Instruction::decode(self.opcode);

        log::trace!("{:#05x}: {:#06x} {:?}", addr, self.opcode, instruction);

        self.program_counter = memory::wrap(addr.wrapping_add(2));
        self.execute(instruction, addr)
    }

    /// Decrement both timers towards zero.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    /// Execute a single instruction without fetching it.
    /// Nothing was fetched, so a `StackFault` carries the current program counter.
    pub fn execute_single(&mut self, instruction: Instruction) -> Result<(), StackFault> {
        self.execute(instruction, self.program_counter)
    }

    /// Execute instructions in order, stopping at the first fault.
    pub fn execute_many(&mut self, instructions: &[Instruction]) -> Result<(), StackFault> {
        for instruction in instructions {
            self.execute_single(*instruction)?;
        }
        Ok(())
    }

    pub fn registers(&self) -> &[u8; NUM_REGISTERS] {
        &self.registers
    }

    pub fn register(&self, reg: Reg) -> u8 {
        self.registers[reg_index(reg)]
    }

    pub fn index(&self) -> u16 {
        self.i
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn stack_pointer(&self) -> u8 {
        self.stack.pointer()
    }

    /// Return addresses currently on the stack, oldest first.
    pub fn stack(&self) -> &[u16] {
        self.stack.entries()
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    /// True while a tone should be playing.
    pub fn sound_active(&self) -> bool {
        self.sound_timer > 0
    }

    /// The most recently fetched opcode.
    pub fn opcode(&self) -> u16 {
        self.opcode
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The only state outside collaborators may write to, between cycles.
    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    fn reg(&self, reg: Reg) -> u8 {
        self.registers[reg_index(reg)]
    }

    fn set_reg(&mut self, reg: Reg, value: u8) {
        self.registers[reg_index(reg)] = value;
    }

    /// Result goes to `x` first, so the flag survives when `x` is VF.
    fn set_reg_and_flag(&mut self, reg: Reg, value: u8, flag: bool) {
        self.set_reg(reg, value);
        self.registers[FLAG] = flag as u8;
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.program_counter = memory::wrap(self.program_counter.wrapping_add(2));
        }
    }

    /// `addr` is where the instruction was fetched from, for fault reports.
    fn execute(&mut self, instruction: Instruction, addr: u16) -> Result<(), StackFault> {
        match instruction {
            // Clear the screen
            Instruction::ClearScreen => self.screen.clear(),

            // Return to the previous call site via the stack.
            Instruction::Return => {
                self.program_counter = self.stack.pop(addr)?;
            }

            // Go to a specific memory address
            Instruction::Goto(Addr(nnn)) => {
                self.program_counter = memory::wrap(nnn);
            }

            // Store the return address on the stack, then jump to the specified address
            Instruction::Call(Addr(nnn)) => {
                self.stack.push(self.program_counter, addr)?;
                self.program_counter = memory::wrap(nnn);
            }

            Instruction::IfRegEqConst(x, Const(kk)) => self.skip_if(self.reg(x) == kk),

            Instruction::IfRegNeqConst(x, Const(kk)) => self.skip_if(self.reg(x) != kk),

            Instruction::IfRegEqReg(x, y) => self.skip_if(self.reg(x) == self.reg(y)),

            Instruction::IfRegNeqReg(x, y) => self.skip_if(self.reg(x) != self.reg(y)),

            Instruction::SetRegToConst(x, Const(kk)) => self.set_reg(x, kk),

            // No carry flag for the constant form
            Instruction::IncRegByConst(x, Const(kk)) => {
                self.set_reg(x, self.reg(x).wrapping_add(kk));
            }

            Instruction::SetRegToReg(x, y) => self.set_reg(x, self.reg(y)),

            Instruction::BitwiseOr(x, y) => self.set_reg(x, self.reg(x) | self.reg(y)),

            Instruction::BitwiseAnd(x, y) => self.set_reg(x, self.reg(x) & self.reg(y)),

            Instruction::BitwiseXor(x, y) => self.set_reg(x, self.reg(x) ^ self.reg(y)),

            // VF is the carry out of the 9-bit sum
            Instruction::IncRegByReg(x, y) => {
                let (sum, carry) = self.reg(x).overflowing_add(self.reg(y));
                self.set_reg_and_flag(x, sum, carry);
            }

            // VF is 1 only when Vx > Vy, so equal operands clear it
            Instruction::DecRegByReg(x, y) => {
                let (vx, vy) = (self.reg(x), self.reg(y));
                self.set_reg_and_flag(x, vx.wrapping_sub(vy), vx > vy);
            }

            Instruction::SetVxVyMinusVx(x, y) => {
                let (vx, vy) = (self.reg(x), self.reg(y));
                self.set_reg_and_flag(x, vy.wrapping_sub(vx), vy > vx);
            }

            // Both shifts read Vy, not Vx
            Instruction::BitshiftRight(x, y) => {
                let vy = self.reg(y);
                self.set_reg_and_flag(x, vy >> 1, vy & 0x01 == 1);
            }

            Instruction::BitshiftLeft(x, y) => {
                let vy = self.reg(y);
                self.set_reg_and_flag(x, vy << 1, vy & 0x80 != 0);
            }

            Instruction::SetI(Addr(nnn)) => {
                self.i = nnn;
            }

            Instruction::SetPcToV0PlusAddr(Addr(nnn)) => {
                self.program_counter = memory::wrap(nnn.wrapping_add(self.registers[0] as u16));
            }

            Instruction::SetVxRand(x, Const(kk)) => {
                let byte = self.rng.next_byte();
                self.set_reg(x, byte & kk);
            }

            Instruction::Draw(x, y, Const(height)) => self.draw(x, y, height),

            Instruction::IfKeyEqVx(x) => self.skip_if(self.keypad.is_pressed(self.reg(x))),

            Instruction::IfKeyNeqVx(x) => self.skip_if(!self.keypad.is_pressed(self.reg(x))),

            Instruction::SetRegToDelayTimer(x) => self.set_reg(x, self.delay_timer),

            // Wait for a key by running this instruction again next cycle
            Instruction::SetRegToGetKey(x) => match self.keypad.first_pressed() {
                Some(key) => self.set_reg(x, key),
                None => self.program_counter = memory::wrap(self.program_counter.wrapping_sub(2)),
            },

            Instruction::SetDelayTimerToReg(x) => {
                self.delay_timer = self.reg(x);
            }

            Instruction::SetSoundTimerToReg(x) => {
                self.sound_timer = self.reg(x);
            }

            Instruction::AddRegToI(x) => {
                self.i = self.i.wrapping_add(self.reg(x) as u16);
            }

            // Set i to the glyph of the low hex digit. Each glyph is 5 bytes.
            Instruction::SetIToSpriteAddrVx(x) => {
                self.i = FONT_BASE + GLYPH_SIZE * (self.reg(x) & 0x0F) as u16;
            }

            Instruction::SetIToBcdOfReg(x) => {
                let value = self.reg(x);
                self.memory.write(self.i, value / 100);
                self.memory.write(self.i.wrapping_add(1), value / 10 % 10);
                self.memory.write(self.i.wrapping_add(2), value % 10);
            }

            // Dump register values up to Vx
            Instruction::RegDump(Reg(x)) => {
                for reg_no in 0..=(x & 0x0F) {
                    self.memory.write(self.i.wrapping_add(reg_no as u16), self.registers[reg_no as usize]);
                }
            }

            // Load register values up to Vx
            Instruction::RegLoad(Reg(x)) => {
                for reg_no in 0..=(x & 0x0F) {
                    self.registers[reg_no as usize] = self.memory.read(self.i.wrapping_add(reg_no as u16));
                }
            }

            Instruction::Unknown(opcode) => {
                log::debug!("Ignoring unknown opcode {:#06x} at {:#05x}", opcode, addr);
            }
        };

        Ok(())
    }

    /// XOR an 8-pixel-wide sprite of `height` rows from memory at I onto the screen.
    /// The origin wraps around the screen, the rest of the sprite is clipped.
    fn draw(&mut self, x: Reg, y: Reg, height: u8) {
        let x_coord = self.reg(x) as usize % SCREEN_WIDTH;
        let y_coord = self.reg(y) as usize % SCREEN_HEIGHT;

        let mut any_collisions = false;
        for row in 0..height as usize {
            let screen_y = y_coord + row;
            if screen_y >= SCREEN_HEIGHT {
                break;
            }
            let sprite_row = self.memory.read(self.i.wrapping_add(row as u16));
            for col in 0..8 {
                let screen_x = x_coord + col;
                if screen_x >= SCREEN_WIDTH {
                    break;
                }
                if (sprite_row >> (7 - col)) & 1 == 1 {
                    any_collisions |= self.screen.toggle(screen_x, screen_y);
                }
            }
        }

        // Set VF collision flag
        self.registers[FLAG] = any_collisions as u8;
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

fn reg_index(Reg(x): Reg) -> usize {
    (x & 0x0F) as usize
}
