//! The keyed schema router: registration, lookup, and partial matching

use crate::error::{RegistrationError, RouteError};
use crate::exec::{Deferred, Target, build_deferred, check_schema};
use crate::key::{KeyField, SolverKey, prefix_cmp};
use crate::resolve::ParamResolver;
use crate::schema::Schema;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Builder for constructing a [`SchemaRouter`].
///
/// The builder is the router's "open" state: entries can be added, and
/// duplicate keys are detected as they arrive. [`build`](Self::build)
/// freezes it into a router that only supports lookup. The resolver used by
/// every registered entry is supplied here, once.
///
/// # Example
///
/// ```
/// use euler_solver::{MapResolver, RouterBuilder, Schema, SolverKey, Target, ValueType, param};
///
/// let resolver = MapResolver::new().with("Limit", "10");
/// let mut builder = RouterBuilder::new(resolver);
/// builder
///     .add(
///         SolverKey::new(1, "Squared"),
///         Target::new(vec![ValueType::UInt], |args| {
///             Ok((args.uint(0)? * args.uint(0)?) as i64)
///         }),
///         Schema::new(vec![param("Limit", ValueType::UInt)]),
///     )
///     .unwrap();
/// let router = builder.build();
/// ```
pub struct RouterBuilder<R> {
    resolver: Rc<dyn ParamResolver>,
    entries: BTreeMap<SolverKey, Deferred<R>>,
}

impl<R: 'static> RouterBuilder<R> {
    /// Create an empty builder owning the resolver for unbound parameters
    pub fn new(resolver: impl ParamResolver + 'static) -> Self {
        Self {
            resolver: Rc::new(resolver),
            entries: BTreeMap::new(),
        }
    }

    /// Register a target under a key, with a schema describing how each of
    /// its arguments is supplied.
    ///
    /// The schema is validated against the target's signature here, so a
    /// mismatch can never surface during invocation. Returns a reference to
    /// the builder to allow chained `add` calls.
    ///
    /// # Returns
    /// * `Ok(&mut Self)` - entry registered, ready for chaining
    /// * `Err(RegistrationError)` - duplicate key or schema/signature
    ///   mismatch; the builder keeps all previously added entries
    pub fn add(
        &mut self,
        key: SolverKey,
        target: Target<R>,
        schema: Schema,
    ) -> Result<&mut Self, RegistrationError> {
        check_schema(&target, &schema)?;
        if self.entries.contains_key(&key) {
            return Err(RegistrationError::DuplicateKey(key));
        }

        let exec = build_deferred(target, schema, Rc::clone(&self.resolver));
        self.entries.insert(key, exec);
        Ok(self)
    }

    /// Finalize the builder into an immutable router
    pub fn build(self) -> SchemaRouter<R> {
        SchemaRouter {
            entries: self.entries,
        }
    }
}

impl<R> fmt::Debug for RouterBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Immutable registry mapping composite keys to deferred computations.
///
/// Keys are ordered lexicographically (problem identifier, then variant
/// name), which makes prefix lookup a contiguous range scan: looking up all
/// variants of one problem costs O(log n + k) for k matches.
pub struct SchemaRouter<R> {
    entries: BTreeMap<SolverKey, Deferred<R>>,
}

impl<R> SchemaRouter<R> {
    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visit the trailing fields of every registered key that the query is
    /// a prefix of, in key order.
    ///
    /// The query may have any arity: an empty query visits every key in
    /// full, a one-field query visits the variant names under one problem,
    /// a full-arity query visits an empty trailing slice for an exact hit,
    /// and a query longer than the key arity visits nothing. Re-invoking
    /// re-scans; nothing is cached.
    pub fn partial_match<F>(&self, query: &[KeyField<'_>], mut visit: F)
    where
        F: FnMut(&[KeyField<'_>]),
    {
        if query.len() > SolverKey::ARITY {
            return;
        }

        // The map is ordered consistently with the prefix comparator, so
        // all matches form one contiguous run starting at the query's
        // lower bound.
        let start = match query {
            [] => SolverKey::new(0, String::new()),
            [KeyField::Problem(problem), rest @ ..] => {
                let variant = match rest.first() {
                    Some(KeyField::Variant(variant)) => (*variant).to_string(),
                    Some(KeyField::Problem(_)) => return,
                    None => String::new(),
                };
                SolverKey::new(*problem, variant)
            }
            [KeyField::Variant(_), ..] => return,
        };

        for (key, _) in self.entries.range(start..) {
            if prefix_cmp(query, key) != Ordering::Equal {
                break;
            }
            let fields = key.fields();
            visit(&fields[query.len()..]);
        }
    }

    /// The variant names registered under one problem, in lexicographic
    /// order.
    pub fn variant_names(&self, problem: u32) -> Vec<String> {
        let mut names = Vec::new();
        self.partial_match(&[KeyField::Problem(problem)], |trailing| {
            if let [KeyField::Variant(name)] = trailing {
                names.push((*name).to_string());
            }
        });
        names
    }

    /// Route to the deferred computation registered under a full key.
    ///
    /// Fails with [`RouteError::NotFound`] when nothing is registered under
    /// the key, and also when the query does not have the full key arity:
    /// a shorter query would compare equal to any key sharing its prefix,
    /// so exact arity is required before consulting the map.
    pub fn route(&self, query: &[KeyField<'_>]) -> Result<Deferred<R>, RouteError> {
        self.lookup(query).ok_or(RouteError::NotFound)
    }

    /// Factory-flavored lookup: like [`route`](Self::route) but reports a
    /// miss as an absent result instead of an error.
    pub fn create(&self, query: &[KeyField<'_>]) -> Option<Deferred<R>> {
        self.lookup(query)
    }

    fn lookup(&self, query: &[KeyField<'_>]) -> Option<Deferred<R>> {
        let [KeyField::Problem(problem), KeyField::Variant(variant)] = query else {
            return None;
        };
        self.entries
            .get(&SolverKey::new(*problem, *variant))
            .cloned()
    }
}

impl<R> fmt::Debug for SchemaRouter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRouter")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
