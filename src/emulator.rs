//! The CHIP-8 interpreter core as described at https://en.wikipedia.org/wiki/CHIP-8#Virtual_machine_description.

pub mod emulator;
pub mod error;
pub mod input;
pub mod instruction;
pub mod memory;
pub mod output;
pub mod rng;
pub mod stack;

pub use self::emulator::Emulator;
pub use self::error::{LoadError, StackFault};
