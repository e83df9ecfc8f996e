use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random bytes for the `Cxkk` instruction.
/// Seeded once when the emulator is created.
pub struct ByteSource {
    rng: StdRng,
}

impl ByteSource {
    pub fn from_entropy() -> ByteSource {
        ByteSource {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> ByteSource {
        ByteSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}
