// rng.rs - Deterministic uniform stream
//
// One seeded PCG stream per run. Every draw is a single f64 in [0, 1);
// the placement loop decides what each draw means.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Source of uniform [0, 1) draws, consumed strictly in call order
pub trait UnitStream {
    fn next_unit(&mut self) -> f64;
}

#[derive(Clone)]
pub struct FieldRng {
    rng: Pcg64Mcg,
}

impl FieldRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: Pcg64Mcg::seed_from_u64(seed) }
    }
}

impl UnitStream for FieldRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, for pinning the placement loop in tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedStream {
    draws: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedStream {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self { draws: draws.into(), pos: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl UnitStream for ScriptedStream {
    fn next_unit(&mut self) -> f64 {
        let v = self.draws[self.pos];
        self.pos += 1;
        v
    }
}
