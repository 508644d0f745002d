//! Small random helpers for games and simulations: a replaceable uniform source and a handful of
//! generators derived from it.
//!
//! ```
//! use randkit::{Randomizer, SequenceSource};
//!
//! let mut rng = Randomizer::seeded(2024);
//! let loot = rng.weighted_option(&[("sword", 1), ("potion", 5)]).unwrap();
//! println!("found a {loot}");
//!
//! // Swap in a scripted source to replay a scenario.
//! rng.set_source(SequenceSource::new([0.9, 0.1]).unwrap());
//! assert_eq!(rng.ranged_int(0.0, 10.0), 9);
//! assert_eq!(rng.ranged_int(0.0, 10.0), 1);
//! ```

mod config;
mod error;
mod randomizer;
mod rng;
mod source;

#[cfg(feature = "rand")]
mod rand_support;


pub use config::Config;
pub use error::{Error, Result};
pub use randomizer::Randomizer;
pub use rng::Rng;
pub use source::{SequenceSource, UniformSource};

#[cfg(feature = "rand")]
pub use rand_support::RandSource;
