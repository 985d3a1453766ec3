//! Random scramble generation.

use fastrand::Rng;

use crate::engine::{Magnitude, Turn};
use crate::topology::FACES;

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// A sequence of independent random turns: face uniform over the six faces,
/// direction a fair coin. Half turns are never generated; they only enter the
/// system through solver output or explicit notation. Any such sequence is
/// reachable from the solved state by construction, so no legality check is
/// needed.
pub fn scramble(length: usize) -> Vec<Turn> {
    scramble_with(&mut Rng::new(), length)
}

/// [`scramble`] with a caller-supplied generator, for reproducible sequences.
pub fn scramble_with(rng: &mut Rng, length: usize) -> Vec<Turn> {
    (0..length)
        .map(|_| {
            let face = FACES[rng.usize(..FACES.len())];
            let magnitude = if rng.bool() {
                Magnitude::Quarter
            } else {
                Magnitude::QuarterInverse
            };

            Turn::new(face, magnitude)
        })
        .collect()
}
