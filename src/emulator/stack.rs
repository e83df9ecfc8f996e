use crate::emulator::error::StackFault;

pub const STACK_SIZE: usize = 16;

/// The call stack. `pointer` indexes the next free slot.
pub struct Stack {
    entries: [u16; STACK_SIZE],
    pointer: u8,
}

impl Stack {
    pub fn new() -> Stack {
        Stack {
            entries: [0; STACK_SIZE],
            pointer: 0,
        }
    }

    /// Store `addr` and move the pointer up. `pc` only labels the fault.
    pub fn push(&mut self, addr: u16, pc: u16) -> Result<(), StackFault> {
        let slot = self
            .entries
            .get_mut(self.pointer as usize)
            .ok_or(StackFault::Overflow { pc })?;
        *slot = addr;
        self.pointer += 1;
        Ok(())
    }

    /// Move the pointer down and return the address stored there.
    pub fn pop(&mut self, pc: u16) -> Result<u16, StackFault> {
        if self.pointer == 0 {
            return Err(StackFault::Underflow { pc });
        }
        self.pointer -= 1;
        Ok(self.entries[self.pointer as usize])
    }

    pub fn pointer(&self) -> u8 {
        self.pointer
    }

    pub fn entries(&self) -> &[u16] {
        &self.entries[..self.pointer as usize]
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
