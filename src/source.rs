use std::cell::Cell;

use crate::error::{Error, Result};

/// A producer of raw floating-point values, nominally uniform over `[0, 1)`.
///
/// Sources take `&self`; stateful sources keep their state in a `Cell` or `RefCell`. Any
/// `Fn() -> f64` closure is a source:
///
/// ```
/// # use randkit::UniformSource;
/// let half = || 0.5;
/// assert_eq!(half.sample(), 0.5);
/// ```
pub trait UniformSource {
    /// Returns the next raw value. It is not required to lie inside `(0, 1)`.
    fn sample(&self) -> f64;
}

impl<F> UniformSource for F
where
    F: Fn() -> f64,
{
    fn sample(&self) -> f64 {
        self()
    }
}

#[derive(Debug, Clone)]
/// A source that cycles through a fixed list of values, wrapping around at the end.
///
/// # Example
/// ```
/// # use randkit::{SequenceSource, UniformSource};
/// let source = SequenceSource::new([0.25, 0.75]).unwrap();
/// let drawn: Vec<f64> = (0..3).map(|_| source.sample()).collect();
/// assert_eq!(drawn, [0.25, 0.75, 0.25]);
/// ```
pub struct SequenceSource {
    values: Vec<f64>,
    next: Cell<usize>,
}

impl SequenceSource {
    /// Returns a source yielding `values` in order. Fails with [`Error::EmptyInput`] if there
    /// are no values.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self {
            values,
            next: Cell::new(0),
        })
    }

    /// Moves back to the first value.
    pub fn rewind(&self) {
        self.next.set(0);
    }
}

impl UniformSource for SequenceSource {
    fn sample(&self) -> f64 {
        let index = self.next.get();
        self.next.set((index + 1) % self.values.len());
        self.values[index]
    }
}
