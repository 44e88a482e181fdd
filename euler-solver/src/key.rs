//! Composite keys and the prefix comparator used for lookup

use std::cmp::Ordering;
use std::fmt;

/// Full composite key a solver variant is registered under.
///
/// A key is an ordered pair of a numeric problem identifier and a
/// human-readable variant name, compared lexicographically (problem first,
/// then variant). Keys are immutable once registered. A full key always has
/// both fields, so a zero-length key can never reach the registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolverKey {
    /// The problem identifier
    pub problem: u32,
    /// The variant name distinguishing entries under one problem
    pub variant: String,
}

impl SolverKey {
    /// Number of fields in a full key
    pub const ARITY: usize = 2;

    /// Create a new key
    pub fn new(problem: u32, variant: impl Into<String>) -> Self {
        Self {
            problem,
            variant: variant.into(),
        }
    }

    /// The key decomposed into its ordered fields
    pub fn fields(&self) -> [KeyField<'_>; Self::ARITY] {
        [
            KeyField::Problem(self.problem),
            KeyField::Variant(&self.variant),
        ]
    }
}

impl fmt::Display for SolverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, \"{}\")", self.problem, self.variant)
    }
}

/// One field of a composite key.
///
/// Lookup keys are slices of fields, which allows a query of any arity:
/// shorter than a full key (a prefix), exactly a full key, or longer (which
/// can never match a registered key). Well-formed queries lead with the
/// problem field, mirroring the field order of [`SolverKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyField<'a> {
    /// The problem identifier field
    Problem(u32),
    /// The variant name field
    Variant(&'a str),
}

/// Build a full-arity lookup query for a problem/variant pair.
pub fn full_key(problem: u32, variant: &str) -> [KeyField<'_>; SolverKey::ARITY] {
    [KeyField::Problem(problem), KeyField::Variant(variant)]
}

/// Compare a lookup query against a full key, lexicographically up to the
/// shorter arity.
///
/// Fields are compared pairwise; the first unequal pair decides the order.
/// If either side runs out of fields before a difference is found the two
/// are `Equal`, so a query that is an initial prefix of a key matches it.
/// The empty query is therefore equal to every key, and call sites guard
/// arity where that matters: registration only ever sees full keys, exact
/// lookup requires exactly [`SolverKey::ARITY`] fields, and partial lookup
/// rejects queries longer than the key arity.
pub fn prefix_cmp(query: &[KeyField<'_>], key: &SolverKey) -> Ordering {
    for (q, k) in query.iter().zip(key.fields()) {
        match q.cmp(&k) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_equal_to_any_key() {
        assert_eq!(prefix_cmp(&[], &SolverKey::new(7, "Main")), Ordering::Equal);
    }

    #[test]
    fn prefix_query_matches_any_extension() {
        let key = SolverKey::new(1, "Naive");
        assert_eq!(prefix_cmp(&[KeyField::Problem(1)], &key), Ordering::Equal);
        assert_eq!(prefix_cmp(&[KeyField::Problem(0)], &key), Ordering::Less);
        assert_eq!(prefix_cmp(&[KeyField::Problem(2)], &key), Ordering::Greater);
    }

    #[test]
    fn full_query_orders_by_variant_within_a_problem() {
        let key = SolverKey::new(1, "Naive");
        assert_eq!(prefix_cmp(&full_key(1, "Naive"), &key), Ordering::Equal);
        assert_eq!(prefix_cmp(&full_key(1, "Brute"), &key), Ordering::Less);
        assert_eq!(prefix_cmp(&full_key(1, "Sieve"), &key), Ordering::Greater);
    }

    #[test]
    fn prefix_order_agrees_with_key_order() {
        let a = SolverKey::new(2, "Even Stride");
        let b = SolverKey::new(2, "Naive");
        let c = SolverKey::new(10, "Main");

        for (lhs, rhs) in [(&a, &b), (&a, &c), (&b, &c)] {
            assert_eq!(prefix_cmp(&lhs.fields(), rhs), lhs.cmp(rhs));
            assert_eq!(prefix_cmp(&rhs.fields(), lhs), rhs.cmp(lhs));
        }
    }
}
