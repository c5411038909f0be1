//! Binomial sample: successes out of trials

use crate::error::{EstimateError, Result};
use std::fmt;

/// A validated binomial observation
///
/// Invariant: `trials >= 1` and `successes <= trials`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sample {
    successes: u64,
    trials: u64,
}

impl Sample {
    /// Create a new sample
    ///
    /// # Errors
    /// Returns [`EstimateError::ZeroTrials`] if `trials` is zero and
    /// [`EstimateError::SuccessesExceedTrials`] if `successes > trials`
    pub fn new(successes: u64, trials: u64) -> Result<Self> {
        if trials == 0 {
            return Err(EstimateError::ZeroTrials);
        }
        if successes > trials {
            return Err(EstimateError::SuccessesExceedTrials { successes, trials });
        }

        Ok(Self { successes, trials })
    }

    /// Number of positive observations
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Sample size
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Number of negative observations
    pub fn failures(&self) -> u64 {
        self.trials - self.successes
    }

    /// Maximum-likelihood proportion `x/n`
    pub fn proportion(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }

    /// The sample with successes and failures swapped
    pub fn mirrored(&self) -> Self {
        Self {
            successes: self.failures(),
            trials: self.trials,
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.successes, self.trials)
    }
}
