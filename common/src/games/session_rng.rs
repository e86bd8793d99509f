use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::puzzle2048::SpawnSource;

/// Seedable random source shared by a single game session.
///
/// Two sessions built from the same seed see the same spawn sequence, which is
/// what makes a logged seed enough to reproduce a game.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl SpawnSource for SessionRng {
    fn pick(&mut self, candidates: usize) -> usize {
        self.random_range(0..candidates)
    }
}
