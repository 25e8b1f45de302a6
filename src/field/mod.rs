// field/ - Random feature field
//
// Seeded draw stream plus the level-by-level placement loop.
// The grid is owned by the loop for the whole run.

mod rng;
mod generate;

pub use rng::*;
pub use generate::*;
