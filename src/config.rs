/// Default parameters used by the argument-less generators of a [`Randomizer`].
///
/// [`Randomizer`]: crate::Randomizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Mean used by [`Randomizer::gaussian`](crate::Randomizer::gaussian).
    pub gaussian_mean: f64,
    /// Standard deviation used by [`Randomizer::gaussian`](crate::Randomizer::gaussian).
    pub gaussian_std: f64,
    /// Probability of `true` used by [`Randomizer::random_bool`](crate::Randomizer::random_bool).
    pub bool_weight: f64,
}

impl Config {
    /// Mean of the standard deviate before scaling.
    pub const DEFAULT_GAUSSIAN_MEAN: f64 = 0.0;
    /// Keeps about 95% of draws within one unit of the mean.
    pub const DEFAULT_GAUSSIAN_STD: f64 = 0.5;
    /// A fair coin.
    pub const DEFAULT_BOOL_WEIGHT: f64 = 0.5;

    /// Sets the default gaussian mean.
    pub fn with_gaussian_mean(mut self, mean: f64) -> Self {
        self.gaussian_mean = mean;
        self
    }

    /// Sets the default standard deviation. A negative value mirrors draws around the mean.
    pub fn with_gaussian_std(mut self, std: f64) -> Self {
        self.gaussian_std = std;
        self
    }

    /// Sets the default weight. Values outside `[0, 1]` are kept as-is.
    pub fn with_bool_weight(mut self, weight: f64) -> Self {
        self.bool_weight = weight;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gaussian_mean: Self::DEFAULT_GAUSSIAN_MEAN,
            gaussian_std: Self::DEFAULT_GAUSSIAN_STD,
            bool_weight: Self::DEFAULT_BOOL_WEIGHT,
        }
    }
}
