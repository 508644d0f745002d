use std::cell::RefCell;

use rand::{Rng as _, RngCore, SeedableRng};

use crate::{source::UniformSource, Rng};

// Owned, so an `Rng` can be handed to `RandSource` or any `rand` API by value.
impl RngCore for Rng {
    fn next_u32(&mut self) -> u32 {
        (self.u64() >> 32) as _
    }

    fn next_u64(&mut self) -> u64 {
        self.u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.bytes(dest);
        Ok(())
    }
}

/// `seed_from_u64(n)` starts the same sequence as [`Rng::with_seed`]`(n)`, so a seed behaves the
/// same whether the generator is used directly or through `rand`.
impl SeedableRng for Rng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Rng::with_seed(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Rng::with_seed(state)
    }
}

#[derive(Debug)]
/// Adapts any `rand` generator into a [`UniformSource`], e.g. to inject a seeded `StdRng`.
///
/// # Example
/// ```
/// # use randkit::{RandSource, Randomizer};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let rng = Randomizer::with_source(RandSource::new(StdRng::seed_from_u64(5)));
/// let [x, y] = rng.rand_vec2();
/// assert!(x > 0.0 && y < 1.0);
/// ```
pub struct RandSource<R> {
    rng: RefCell<R>,
}

impl<R> RandSource<R>
where
    R: RngCore,
{
    /// Wraps `rng`; every sample takes one `f64` from it.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng.into_inner()
    }
}

impl<R> UniformSource for RandSource<R>
where
    R: RngCore,
{
    fn sample(&self) -> f64 {
        self.rng.borrow_mut().gen::<f64>()
    }
}
