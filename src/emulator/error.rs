use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a program could not be copied into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read program {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("program is {size} bytes, but at most {max} bytes fit in memory")]
    TooLarge { size: usize, max: usize },
}

/// A call or return that the 16-entry call stack cannot honour.
/// `pc` is the address the offending instruction was fetched from,
/// or the current program counter when it was executed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackFault {
    #[error("stack overflow at {pc:#05x}: more than 16 nested calls")]
    Overflow { pc: u16 },

    #[error("stack underflow at {pc:#05x}: return with an empty stack")]
    Underflow { pc: u16 },
}
