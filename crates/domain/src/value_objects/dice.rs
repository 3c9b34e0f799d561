//! Dice primitives
//!
//! Character generation only ever needs three shapes of roll: a d10 for
//! the wounds and fate tables, 2d10 for each characteristic, and a d100
//! for percentile checks. Randomness is always injected so callers can
//! seed it for reproducible rolls.

use rand::Rng;

/// Roll a single d10, uniform over [1, 10].
pub fn d10<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=10)
}

/// Roll a single d100, uniform over [1, 100].
pub fn d100<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=100)
}

/// Sum of two independent d10 draws, range [2, 20].
pub fn two_d10<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    d10(rng) + d10(rng)
}
