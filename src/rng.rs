use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG factory for a given (seed, turn) pair.
///
/// Implementation detail:
/// - Derives a per-turn 64-bit seed as `seed ^ turn`.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - Returned RNG is deterministic and reproducible across runs when inputs
///   are equal, so a game is replayable from its seed.
#[inline]
pub fn rng_for_turn(seed: u64, turn: u8) -> impl Rng {
    let derived: u64 = seed ^ u64::from(turn);
    Pcg64::seed_from_u64(derived)
}
