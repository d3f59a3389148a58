use crate::domain::ports::{DigitSource, DIGIT_UPPER_BOUND};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Production source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngDigitSource;

impl DigitSource for ThreadRngDigitSource {
    fn next_digit(&mut self) -> i32 {
        rand::thread_rng().gen_range(0..DIGIT_UPPER_BOUND)
    }
}

/// Reproducible source: the same seed always yields the same digits.
#[derive(Debug, Clone)]
pub struct SeededDigitSource {
    rng: StdRng,
}

impl SeededDigitSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DigitSource for SeededDigitSource {
    fn next_digit(&mut self) -> i32 {
        self.rng.gen_range(0..DIGIT_UPPER_BOUND)
    }
}

/// Returns the given digits in order, cycling once exhausted.
///
/// An empty sequence yields `0` forever.
#[derive(Debug, Clone)]
pub struct FixedDigitSource {
    values: Vec<i32>,
    index: usize,
}

impl FixedDigitSource {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }

    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }

    /// Number of digits handed out so far.
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl DigitSource for FixedDigitSource {
    fn next_digit(&mut self) -> i32 {
        let value = match self.values.len() {
            0 => 0,
            len => self.values.get(self.index % len).copied().unwrap_or(0),
        };
        self.index += 1;
        value
    }
}

/// Pick the seeded source when a seed is given, the thread RNG otherwise.
pub fn source_for_seed(seed: Option<u64>) -> Box<dyn DigitSource> {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded digit source");
            Box::new(SeededDigitSource::new(seed))
        }
        None => Box::new(ThreadRngDigitSource),
    }
}
