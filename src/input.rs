use rand::Rng;

use crate::error::{Error, Result};
use crate::linked_list::LinkedList;

/// Upper bound (inclusive) on the number of groups a random sequence spans
pub const MAX_RANDOM_GROUPS: usize = 5;

/// Random element magnitudes are drawn from `0..MAX_RANDOM_MAGNITUDE`
pub const MAX_RANDOM_MAGNITUDE: i32 = 100;

/// Supplies the initial sequence for a run.
pub trait InputSource {
    /// Produce the values, or fail before anything is built.
    fn values(&mut self) -> Result<Vec<i32>>;

    fn build(&mut self) -> Result<LinkedList> {
        Ok(self.values()?.into_iter().collect())
    }
}

/// Explicit values, typically taken from the command line.
#[derive(Debug, Clone)]
pub struct ArgsSource<const G: usize> {
    values: Vec<i32>,
}

impl<const G: usize> ArgsSource<G> {
    pub fn new(values: Vec<i32>) -> Self {
        ArgsSource { values }
    }
}

impl<const G: usize> InputSource for ArgsSource<G> {
    fn values(&mut self) -> Result<Vec<i32>> {
        if self.values.len() % G != 0 {
            return Err(Error::Configuration {
                count: self.values.len(),
                group_size: G,
            });
        }
        Ok(self.values.clone())
    }
}

/// Random sequence of `G * k` values, `k` in `1..=MAX_RANDOM_GROUPS`.
///
/// Magnitudes are uniform in `0..MAX_RANDOM_MAGNITUDE`; signs alternate
/// starting from a randomly chosen one. The generator is passed in so runs
/// can be reproduced from a seed.
#[derive(Debug)]
pub struct RandomSource<R, const G: usize> {
    rng: R,
}

impl<R: Rng, const G: usize> RandomSource<R, G> {
    pub fn new(rng: R) -> Self {
        RandomSource { rng }
    }
}

impl<R: Rng, const G: usize> InputSource for RandomSource<R, G> {
    fn values(&mut self) -> Result<Vec<i32>> {
        let len = G * self.rng.random_range(1..=MAX_RANDOM_GROUPS);
        let mut sign = if self.rng.random_bool(0.5) { 1 } else { -1 };

        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(sign * self.rng.random_range(0..MAX_RANDOM_MAGNITUDE));
            sign = -sign;
        }

        Ok(values)
    }
}
