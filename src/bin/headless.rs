use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use structopt::StructOpt;

use chip8_interp::emulator::Emulator;

const TIMER_HZ: u32 = 60;

/// Run a CHIP-8 program without a screen or keyboard.
#[derive(StructOpt, Debug)]
#[structopt(name = "headless")]
struct Opt {
    /// Instructions executed per second
    #[structopt(long, default_value = "600")]
    hz: u32,

    /// Number of 60 Hz frames to run before stopping (runs forever if left out)
    #[structopt(long)]
    frames: Option<u64>,

    /// Seed for the random number instruction
    #[structopt(long)]
    seed: Option<u64>,

    /// Tick the timers once per instruction instead of at 60 Hz
    #[structopt(long)]
    coupled_timers: bool,

    /// Print the screen when done
    #[structopt(long)]
    dump: bool,

    /// Stop at the first stack fault instead of logging it and carrying on
    #[structopt(long)]
    stop_on_fault: bool,

    /// The program to execute
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    log::info!("Executing {:?}", &opt.input);

    let mut emulator = match opt.seed {
        Some(seed) => Emulator::with_seed(seed),
        None => Emulator::new(),
    };
    emulator.load_file(&opt.input)?;

    let frame_time = Duration::from_secs(1) / TIMER_HZ;

    // Start execution
    let mut frame = 0;
    while opt.frames.map_or(true, |frames| frame < frames) {
        let started = Instant::now();

        for _ in 0..steps_in_frame(opt.hz, frame) {
            let result = if opt.coupled_timers {
                emulator.cycle()
            } else {
                emulator.step()
            };
            if let Err(fault) = result {
                log::warn!("{}", fault);
                if opt.stop_on_fault {
                    return finish(&emulator, opt.dump, Err(fault.into()));
                }
            }
        }
        if !opt.coupled_timers {
            emulator.tick_timers();
        }
        if emulator.sound_active() {
            log::debug!("Beep ({} ticks left)", emulator.sound_timer());
        }

        frame += 1;
        if let Some(remaining) = frame_time.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
    }

    finish(&emulator, opt.dump, Ok(()))
}

/// Instructions to run in the given 60 Hz frame.
/// The remainder of `hz / 60` is carried over, so any second of frames runs exactly `hz`.
fn steps_in_frame(hz: u32, frame: u64) -> u64 {
    let hz = hz as u64;
    let timer_hz = TIMER_HZ as u64;
    hz * (frame + 1) / timer_hz - hz * frame / timer_hz
}

fn finish(
    emulator: &Emulator,
    dump: bool,
    result: Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    if dump {
        print!("{}", emulator.screen());
    }
    result
}
