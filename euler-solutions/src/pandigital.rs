use euler_solver::{SolveError, Solver};
use itertools::Itertools;
use std::collections::HashSet;

/// Sum of the distinct products whose multiplicand, multiplier, and product
/// are together 1-through-9 pandigital.
///
/// Every such identity has a four digit product: the nine digits split as
/// 1+4+4 or 2+3+4 between multiplicand, multiplier, and product, since four
/// factor digits cannot produce five product digits and vice versa. So it
/// suffices to enumerate the 9!/4! partial permutations of five digits for
/// the factor side, split each at positions 1 and 2, and accept a product
/// whose digits are exactly the four left over.
#[derive(Default)]
pub struct PandigitalProducts;

impl PandigitalProducts {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for PandigitalProducts {
    fn solve(&self) -> Result<i64, SolveError> {
        let mut products = HashSet::new();

        for factor_digits in (1u8..=9).permutations(5) {
            // Ascending by construction, so it compares as a sorted multiset.
            let leftover: Vec<u8> = (1..=9)
                .filter(|digit| !factor_digits.contains(digit))
                .collect();

            for split in 1..=2 {
                let a = digits_to_number(&factor_digits[..split]);
                let b = digits_to_number(&factor_digits[split..]);
                let product = a * b;

                let mut product_digits = number_to_digits(product);
                product_digits.sort_unstable();
                if product_digits == leftover {
                    products.insert(product);
                }
            }
        }

        Ok(products.iter().sum())
    }
}

fn digits_to_number(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0i64, |number, digit| number * 10 + i64::from(*digit))
}

fn number_to_digits(number: i64) -> Vec<u8> {
    if number == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();
    let mut rest = number;
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_round_trips() {
        assert_eq!(digits_to_number(&[3, 9, 1, 8, 6]), 39186);
        assert_eq!(number_to_digits(0), [0]);
        let mut digits = number_to_digits(7254);
        digits.sort_unstable();
        assert_eq!(digits, [2, 4, 5, 7]);
    }

    #[test]
    fn euler_sum() {
        assert_eq!(PandigitalProducts::new().solve().unwrap(), 45228);
    }
}
