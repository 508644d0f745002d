use std::cell::Cell;

use crate::source::UniformSource;

/// The increment used to update the state of the RNG. This value is coprime to 2^64 and
/// `INCREMENT / 2^64` is approximately `phi - 1`, where `phi` is the golden ratio. This produces
/// a low discrepancy sequence with a period of 2^64.
pub(crate) const INCREMENT: u64 = 0x9E3779B97F4A7FFF;

// Like `INCREMENT`, both are coprime to 2^64.
const ALPHA: u128 = 0x11F9ADBB8F8DA6FFF;
const BETA: u128 = 0x1E3DF208C6781EFFF;

#[derive(Debug)]
/// The default uniform source. It needs no mutable reference, so it can be shared by reference
/// in single-threaded code.
///
/// The implementation is based on hashing the Weyl sequence with `wyhash`, adapted from
/// https://github.com/lemire/testingRNG/blob/master/source/wyhash.h.
pub struct Rng {
    /// The current state of the RNG.
    pub(crate) state: Cell<u64>,
}

impl Rng {
    /// Fills the slice `data` with random bytes
    pub fn bytes(&self, data: &mut [u8]) {
        const CHUNK_SIZE: usize = std::mem::size_of::<u64>();
        let mut chunks = data.chunks_exact_mut(CHUNK_SIZE);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.u64().to_ne_bytes());
        }
        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let bytes = self.u64().to_ne_bytes();
            rest.copy_from_slice(&bytes[..rest.len()]);
        }
    }

    /// Returns a value in the range `[0, 1)` built from the top 53 bits of the next `u64`.
    ///
    /// # Example
    /// ```
    /// # use randkit::Rng;
    /// let rng = Rng::new();
    /// let x = rng.f64();
    /// assert!((0.0..1.0).contains(&x));
    /// ```
    pub fn f64(&self) -> f64 {
        ((self.u64() >> 11) as f64) * (-53_f64).exp2()
    }

    /// Initializes a new RNG. In release builds, the state is seeded with `std::hash::RandomState`.
    /// In debug builds, the state is set to a constant to make tests reproducible.
    pub fn new() -> Self {
        let seed = {
            #[cfg(not(debug_assertions))]
            {
                use std::hash::{BuildHasher, RandomState};
                RandomState::new().hash_one("randkit")
            }
            #[cfg(debug_assertions)]
            1234
        };
        Self::with_seed(seed)
    }

    /// Initializes a new RNG with the given `seed`.
    ///
    /// # Example
    /// ```
    /// # use randkit::Rng;
    /// let (a, b) = (Rng::with_seed(42), Rng::with_seed(42));
    /// assert_eq!(a.u64(), b.u64());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Cell::new(seed),
        }
    }

    /// Restarts the sequence from `seed`.
    ///
    /// # Example
    /// ```
    /// # use randkit::Rng;
    /// let rng = Rng::with_seed(7);
    /// let first = rng.f64();
    /// rng.reseed(7);
    /// assert_eq!(rng.f64(), first);
    /// ```
    pub fn reseed(&self, seed: u64) {
        self.state.set(seed);
    }

    /// Returns the next `u64` value from the pseudorandom sequence.
    pub fn u64(&self) -> u64 {
        // Read the current state and increment it
        let old_state = self.state.get();
        self.state.set(old_state.wrapping_add(INCREMENT));

        // Hash the old state to produce the next value
        wyhash(old_state)
    }
}

#[inline]
pub(crate) fn wyhash(value: u64) -> u64 {
    let mut tmp = (value as u128).wrapping_mul(ALPHA);
    tmp ^= tmp >> 64;
    tmp = tmp.wrapping_mul(BETA);
    ((tmp >> 64) ^ tmp) as _
}

impl Default for Rng {
    /// Returns a new instance of `Rng`.
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for Rng {
    fn sample(&self) -> f64 {
        self.f64()
    }
}
