use anyhow::anyhow;
use euler_solver::{SolveError, Solver};

/// Largest palindromic product of two factors below `10^digits`, found by
/// brute force over every factor pair.
pub struct PalindromeProduct {
    digits: u64,
}

impl PalindromeProduct {
    pub fn new(digits: u64) -> Self {
        Self { digits }
    }
}

impl Solver for PalindromeProduct {
    fn solve(&self) -> Result<i64, SolveError> {
        let limit = u32::try_from(self.digits)
            .ok()
            .and_then(|digits| 10i64.checked_pow(digits))
            .ok_or_else(|| {
                SolveError::Failed(
                    anyhow!("factor limit 10^{} does not fit 64 bits", self.digits).into(),
                )
            })?;

        let mut best = 0;
        for first in 0..limit {
            for second in first..limit {
                let product = first * second;
                if product > best && is_palindrome(product) {
                    best = product;
                }
            }
        }

        Ok(best)
    }
}

fn is_palindrome(number: i64) -> bool {
    if number < 0 {
        return false;
    }
    if number < 10 {
        return true;
    }

    let mut digits = Vec::new();
    let mut rest = number;
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }

    let len = digits.len();
    (0..len / 2).all(|i| digits[i] == digits[len - 1 - i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindrome_check() {
        assert!(is_palindrome(0));
        assert!(is_palindrome(7));
        assert!(is_palindrome(9009));
        assert!(is_palindrome(90609));
        assert!(!is_palindrome(90610));
        assert!(!is_palindrome(10));
    }

    #[test]
    fn two_digit_factors() {
        // 91 * 99
        assert_eq!(PalindromeProduct::new(2).solve().unwrap(), 9009);
    }

    #[test]
    fn euler_digits() {
        // 913 * 993
        assert_eq!(PalindromeProduct::new(3).solve().unwrap(), 906609);
    }

    #[test]
    fn oversized_digit_counts_fail() {
        assert!(PalindromeProduct::new(19).solve().is_err());
        assert!(PalindromeProduct::new(u64::MAX).solve().is_err());
    }
}
