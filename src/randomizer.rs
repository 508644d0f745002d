use std::{f64::consts::PI, fmt};

use tracing::{debug, trace, warn};

use crate::{
    config::Config,
    error::{Error, Result},
    rng::Rng,
    source::UniformSource,
};

/// Smallest positive `f64` (subnormal). Lower clamp for [`Randomizer::uniform`].
const LOWER: f64 = 5e-324;
/// Largest `f64` below 1. Upper clamp for [`Randomizer::uniform`].
const UPPER: f64 = 1.0 - f64::EPSILON / 2.0;

/// Derived random generators on top of a replaceable [`UniformSource`].
///
/// Every generator draws through [`uniform`](Self::uniform), so replacing the source changes all
/// of them at once. A `Randomizer` owns its source; two randomizers never share state.
///
/// # Example
/// ```
/// # use randkit::Randomizer;
/// let mut rng = Randomizer::seeded(99);
/// let hp = rng.ranged_int(10.0, 20.0);
/// assert!((10..20).contains(&hp));
///
/// rng.set_source(|| 0.0);
/// assert!(!rng.random_bool_weighted(0.0));
/// ```
pub struct Randomizer {
    source: Box<dyn UniformSource>,
    config: Config,
}

impl Randomizer {
    /// Returns a randomizer backed by the default [`Rng`].
    pub fn new() -> Self {
        Self::with_source(Rng::new())
    }

    /// Returns a randomizer backed by an [`Rng`] started from `seed`.
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "seeding default uniform source");
        Self::with_source(Rng::with_seed(seed))
    }

    /// Returns a randomizer drawing from `source` with the default [`Config`].
    pub fn with_source<S>(source: S) -> Self
    where
        S: UniformSource + 'static,
    {
        Self {
            source: Box::new(source),
            config: Config::default(),
        }
    }

    /// Replaces the configuration, keeping the current source.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Returns the defaults used by [`gaussian`](Self::gaussian) and
    /// [`random_bool`](Self::random_bool).
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes `source` the active uniform source. It is used by every draw from now on.
    pub fn set_source<S>(&mut self, source: S)
    where
        S: UniformSource + 'static,
    {
        debug!("uniform source replaced");
        self.source = Box::new(source);
    }

    /// Installs `candidate` as the active source if there is one. Otherwise the current source
    /// stays active and [`Error::InvalidSource`] is returned.
    ///
    /// # Example
    /// ```
    /// # use randkit::{Error, Randomizer, UniformSource};
    /// let mut rng = Randomizer::with_source(|| 0.25);
    /// assert_eq!(rng.replace_source(None), Err(Error::InvalidSource));
    /// assert_eq!(rng.uniform(), 0.25);
    ///
    /// let candidate: Box<dyn UniformSource> = Box::new(|| 0.75);
    /// rng.replace_source(Some(candidate)).unwrap();
    /// assert_eq!(rng.uniform(), 0.75);
    /// ```
    pub fn replace_source(&mut self, candidate: Option<Box<dyn UniformSource>>) -> Result<()> {
        match candidate {
            Some(source) => {
                debug!("uniform source replaced");
                self.source = source;
                Ok(())
            }
            None => {
                warn!("ignoring replacement without a uniform source");
                Err(Error::InvalidSource)
            }
        }
    }

    /// Draws once from the active source and clamps the result into the open interval `(0, 1)`.
    /// NaN is treated as the lower end. The result is always finite.
    pub fn uniform(&self) -> f64 {
        self.source.sample().max(LOWER).min(UPPER)
    }

    /// Returns a normally distributed value using the configured mean and standard deviation.
    pub fn gaussian(&self) -> f64 {
        self.gaussian_with(self.config.gaussian_mean, self.config.gaussian_std)
    }

    /// Returns a normally distributed value centered on `mean`, using the Box-Muller transform.
    /// A negative `std` mirrors the deviate around `mean`.
    ///
    /// # Example
    /// ```
    /// # use randkit::{Randomizer, SequenceSource};
    /// let source = SequenceSource::new([0.25, 0.5]).unwrap();
    /// let rng = Randomizer::with_source(source);
    /// let x = rng.gaussian_with(10.0, 1.0);
    /// assert!((x - (10.0 - (-2.0 * 0.25_f64.ln()).sqrt())).abs() < 1e-12);
    /// ```
    pub fn gaussian_with(&self, mean: f64, std: f64) -> f64 {
        let (u, v) = (self.uniform(), self.uniform());
        let deviate = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
        deviate * std + mean
    }

    /// Returns `min + (max - min) * uniform()`. If `min > max` the value lies between `max` and
    /// `min` instead.
    pub fn ranged_float(&self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.uniform()
    }

    /// Returns [`ranged_float`](Self::ranged_float) truncated toward zero. `max` is exclusive;
    /// pass something like `10.999` to make 10 reachable. Results outside the `i64` range
    /// saturate.
    pub fn ranged_int(&self, min: f64, max: f64) -> i64 {
        self.ranged_float(min, max) as i64
    }

    /// Chooses an element of `options` with uniform probability and returns a reference to it.
    ///
    /// # Example
    /// ```
    /// # use randkit::{Error, Randomizer};
    /// let rng = Randomizer::new();
    /// let word = rng.pick_option(&["I", "are", "weasel"]).unwrap();
    /// println!("{word}");
    ///
    /// let none: [u8; 0] = [];
    /// assert_eq!(rng.pick_option(&none), Err(Error::EmptyInput));
    /// ```
    pub fn pick_option<'a, T>(&self, options: &'a [T]) -> Result<&'a T> {
        if options.is_empty() {
            warn!("pick_option called with no options");
            return Err(Error::EmptyInput);
        }
        let len = options.len();
        let index = ((self.uniform() * len as f64) as usize).min(len - 1);
        Ok(&options[index])
    }

    /// Returns `true` with the configured default probability.
    pub fn random_bool(&self) -> bool {
        self.random_bool_weighted(self.config.bool_weight)
    }

    /// Returns `uniform() < weight`. A weight of 0 or less never yields `true`; 1 or more always
    /// does.
    pub fn random_bool_weighted(&self, weight: f64) -> bool {
        self.uniform() < weight
    }

    /// Returns two independent draws from [`uniform`](Self::uniform), in draw order.
    pub fn rand_vec2(&self) -> [f64; 2] {
        [self.uniform(), self.uniform()]
    }

    /// Returns three independent draws from [`uniform`](Self::uniform), in draw order.
    pub fn rand_vec3(&self) -> [f64; 3] {
        [self.uniform(), self.uniform(), self.uniform()]
    }

    /// Returns four independent draws from [`uniform`](Self::uniform), in draw order.
    pub fn rand_vec4(&self) -> [f64; 4] {
        [self.uniform(), self.uniform(), self.uniform(), self.uniform()]
    }

    /// Chooses a value with probability proportional to its weight.
    ///
    /// The draw selects the same value as repeating each value `weight` times and picking from
    /// that list with [`pick_option`](Self::pick_option). Values with weight 0 are never chosen.
    /// Fails with [`Error::EmptyInput`] when the weights sum to 0.
    ///
    /// # Example
    /// ```
    /// # use randkit::Randomizer;
    /// let rng = Randomizer::new();
    /// let color = rng
    ///     .weighted_option(&[("red", 10), ("green", 30), ("blue", 50)])
    ///     .unwrap();
    /// assert!(["red", "green", "blue"].contains(color));
    /// ```
    pub fn weighted_option<'a, T>(&self, options: &'a [(T, u32)]) -> Result<&'a T> {
        let total: u64 = options.iter().map(|(_, weight)| u64::from(*weight)).sum();
        if total == 0 {
            warn!(options = options.len(), "weighted_option called with zero total weight");
            return Err(Error::EmptyInput);
        }

        let mut target = ((self.uniform() * total as f64) as u64).min(total - 1);
        trace!(total, target, "weighted draw");
        options
            .iter()
            .find(|(_, weight)| {
                let weight = u64::from(*weight);
                if target < weight {
                    true
                } else {
                    target -= weight;
                    false
                }
            })
            .map(|(value, _)| value)
            .ok_or(Error::EmptyInput)
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Randomizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Randomizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
