/*!

A CHIP-8 interpreter core as specified at https://en.wikipedia.org/wiki/CHIP-8.

The crate owns the machine state (registers, memory, stack, timers, keypad and framebuffer)
and the fetch-decode-execute cycle. Drawing the framebuffer, playing a tone while the sound
timer runs and reading a real keyboard are left to whoever drives the emulator.

# Headless runner

To try a program without a frontend, use
`cargo run --release --bin headless -- <program> --frames 300 --dump`.
Set `RUST_LOG=trace` to see every executed instruction.

# Library

The main way of running a program is to load instructions as bytes and call `cycle`.

```rust
use chip8_interp::emulator::Emulator;

let mut emulator = Emulator::new();

// Load a program at address 0x200.
let clear_display = [0x00, 0xE0];
emulator.load(&clear_display).unwrap();
emulator.cycle().unwrap(); // Will now clear the display
assert_eq!(emulator.program_counter(), 0x202);
```

Alternatively, you can experiment by executing instructions manually.

```rust
use chip8_interp::emulator::Emulator;
use chip8_interp::emulator::instruction::{Instruction, Reg, Const, Addr};

let mut emulator = Emulator::with_seed(1);

// Execute instructions manually
emulator.execute_single(Instruction::ClearScreen).unwrap();

// Or many sequentially
emulator.execute_many(&[
    Instruction::Goto(Addr(0x250)),
    Instruction::SetRegToConst(Reg(0xA), Const(35)),
    Instruction::SetRegToReg(Reg(0xB), Reg(0xA))
]).unwrap();
assert_eq!(emulator.register(Reg(0xB)), 35);
```

## Timing

`cycle` ticks the delay and sound timers once per instruction. To run instructions faster
than the 60 Hz timers, call `step` at the instruction rate and `tick_timers` sixty times
a second instead.

## Input and output

Between cycles, press and release keys through `keypad_mut`, and read pixels from `screen`.

```rust
use chip8_interp::emulator::Emulator;

let mut emulator = Emulator::new();
// Wait for a key, store it in V0, then point I at its glyph and draw it.
emulator.load(&[0xF0, 0x0A, 0xF0, 0x29, 0xD1, 0x15]).unwrap();

emulator.cycle().unwrap();
assert_eq!(emulator.program_counter(), 0x200); // Still waiting

emulator.keypad_mut().press(0x7);
for _ in 0..3 {
    emulator.cycle().unwrap();
}
assert!(emulator.screen().is_set(0, 0));
```
*/

pub mod emulator;
pub mod util;
