//! Primitive sampling helpers shared by case generation and dialogue.
//!
//! Every helper takes the caller's RNG so encounters can be replayed
//! deterministically from a seed. None of them mutate their input slice.

use hmac::{Hmac, Mac};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sha2::Sha256;

use crate::constants::{STAT_MAX, STAT_MIN};

/// Inclusive uniform integer in `min..=max`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform float in `[min, max)`. Degenerate ranges collapse to `min`.
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// Uniform pick from a slice. `None` on an empty slice.
pub fn random_from<'a, R, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}

/// Up to `min(count, items.len())` distinct elements in randomized order,
/// via repeated removal from a working copy.
pub fn sample_without_replacement<R, T>(rng: &mut R, items: &[T], count: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    let mut pool: Vec<T> = items.to_vec();
    let mut picked = Vec::with_capacity(count.min(pool.len()));
    while !pool.is_empty() && picked.len() < count {
        let idx = rng.gen_range(0..pool.len());
        picked.push(pool.remove(idx));
    }
    picked
}

/// Fisher-Yates shuffle into a new vector.
pub fn shuffle<R, T>(rng: &mut R, items: &[T]) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    let mut shuffled: Vec<T> = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Saturate a meter value to the 0..=100 stat range.
#[must_use]
pub const fn clamp_stat(value: i32) -> i32 {
    if value < STAT_MIN {
        STAT_MIN
    } else if value > STAT_MAX {
        STAT_MAX
    } else {
        value
    }
}

/// Deterministic pair of RNG streams segregated by simulation domain,
/// so dialogue draws never perturb case generation under a fixed seed.
#[derive(Debug, Clone)]
pub struct RngStreams {
    pub casegen: SmallRng,
    pub dialogue: SmallRng,
}

impl RngStreams {
    /// Construct both streams from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            casegen: SmallRng::seed_from_u64(derive_stream_seed(seed, b"casegen")),
            dialogue: SmallRng::seed_from_u64(derive_stream_seed(seed, b"dialogue")),
        }
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}
