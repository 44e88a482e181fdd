use crate::sieve;
use anyhow::anyhow;
use euler_solver::{SolveError, Solver};

/// Largest prime factor of a composite number.
///
/// Sieves the primes up to the square root of the number and scans them in
/// descending order for the first divisor. A number with no prime factor
/// below its square root (a prime, 0, or 1) fails deterministically rather
/// than inventing an answer.
pub struct LargestPrimeFactor {
    number: u64,
}

impl LargestPrimeFactor {
    pub fn new(number: u64) -> Self {
        Self { number }
    }
}

impl Solver for LargestPrimeFactor {
    fn solve(&self) -> Result<i64, SolveError> {
        let limit = (self.number as f64).sqrt() as u64 + 1;
        let primes = sieve::primes_below(limit);

        for prime in primes.iter().rev() {
            if self.number % prime == 0 {
                return Ok(*prime as i64);
            }
        }

        Err(SolveError::Failed(
            anyhow!(
                "{} has no prime factor at or below its square root",
                self.number
            )
            .into(),
        ))
    }
}
