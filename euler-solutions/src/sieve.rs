//! Prime generation shared by the solvers

/// The primes in `[0, limit)`, by sieve of Eratosthenes.
pub fn primes_below(limit: u64) -> Vec<u64> {
    if limit <= 2 {
        return Vec::new();
    }

    let limit = limit as usize;
    let mut composite = vec![false; limit];
    let mut primes = Vec::new();

    for n in 2..limit {
        if composite[n] {
            continue;
        }
        primes.push(n as u64);

        // Multiples below n * n were already marked through a smaller factor.
        if let Some(first) = n.checked_mul(n) {
            let mut multiple = first;
            while multiple < limit {
                composite[multiple] = true;
                multiple += n;
            }
        }
    }

    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_ranges() {
        assert!(primes_below(0).is_empty());
        assert!(primes_below(2).is_empty());
        assert_eq!(primes_below(3), [2]);
        assert_eq!(primes_below(20), [2, 3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn prime_count_below_ten_thousand() {
        assert_eq!(primes_below(10_000).len(), 1229);
    }
}
