use euler_solver::{SolveError, Solver};

const DENOMINATIONS: [u32; 8] = [1, 2, 5, 10, 20, 50, 100, 200];
const TARGET_AMOUNT: u32 = 200;

/// Number of ways to assemble 200 pence from the standard UK coin set.
///
/// Walks every non-decreasing denomination sequence with an explicit stack,
/// counting each amount it reaches.
#[derive(Default)]
pub struct CoinPartitions;

/// State for one pending extension of a partial coin sequence
struct Frame {
    amount: u32,
    // Denominations are only taken at or after this index, so a multiset of
    // coins is reached through exactly one ordering.
    first_denomination: usize,
}

impl CoinPartitions {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for CoinPartitions {
    fn solve(&self) -> Result<i64, SolveError> {
        let mut counts = [0u32; TARGET_AMOUNT as usize + 1];
        let mut stack = vec![Frame {
            amount: 0,
            first_denomination: 0,
        }];

        while let Some(frame) = stack.pop() {
            for index in frame.first_denomination..DENOMINATIONS.len() {
                let next = frame.amount + DENOMINATIONS[index];
                if next > TARGET_AMOUNT {
                    break;
                }
                counts[next as usize] += 1;
                stack.push(Frame {
                    amount: next,
                    first_denomination: index,
                });
            }
        }

        Ok(counts[TARGET_AMOUNT as usize] as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_amount() {
        assert_eq!(CoinPartitions::new().solve().unwrap(), 73682);
    }
}
