//! Sources of uniform random numbers in `[0, 1)` consumed by the samplers.
//!
//! Samplers never reach for a global generator. The caller passes a
//! [`RandomSource`](trait.RandomSource.html), which makes sampling
//! reproducible with a seeded or recorded source.

use error::SamplingError;

use rand::Rng;

use std::collections::VecDeque;
use std::sync::Mutex;

/// Produces independent uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next(&mut self) -> Result<f32, SamplingError>;

    /// Draws the two values that make up a single sample, `u` first.
    fn next_pair(&mut self) -> Result<(f32, f32), SamplingError> {
        let u = self.next()?;
        let v = self.next()?;
        Ok((u, v))
    }
}

/// Adapts any `rand` generator, e.g. a seeded `StdRng` or `thread_rng()`.
#[derive(Debug, Clone)]
pub struct FromRng<R>(pub R);

impl<R: Rng> RandomSource for FromRng<R> {
    fn next(&mut self) -> Result<f32, SamplingError> {
        Ok(self.0.gen::<f32>())
    }
}

/// Replays a recorded sequence of values and fails once it runs dry.
#[derive(Debug, Clone)]
pub struct Replay {
    values: VecDeque<f32>,
    consumed: usize,
}

impl Replay {
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        Replay {
            values: values.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Amount of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for Replay {
    fn next(&mut self) -> Result<f32, SamplingError> {
        match self.values.pop_front() {
            Some(value) => {
                self.consumed += 1;
                Ok(value)
            }
            None => Err(SamplingError::RandomSourceExhausted {
                consumed: self.consumed,
            }),
        }
    }
}

impl<'a, S: RandomSource + ?Sized> RandomSource for &'a mut S {
    fn next(&mut self) -> Result<f32, SamplingError> {
        (**self).next()
    }

    fn next_pair(&mut self) -> Result<(f32, f32), SamplingError> {
        (**self).next_pair()
    }
}

/// One generator shared between threads.
///
/// The lock is held for both values of a pair, so draws of concurrent
/// samples never interleave.
impl<'a, S: RandomSource + ?Sized> RandomSource for &'a Mutex<S> {
    fn next(&mut self) -> Result<f32, SamplingError> {
        let mut source = self
            .lock()
            .map_err(|_| SamplingError::RandomSourcePoisoned)?;
        source.next()
    }

    fn next_pair(&mut self) -> Result<(f32, f32), SamplingError> {
        let mut source = self
            .lock()
            .map_err(|_| SamplingError::RandomSourcePoisoned)?;
        source.next_pair()
    }
}
