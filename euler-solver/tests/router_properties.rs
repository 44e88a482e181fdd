//! Property and scenario tests for the keyed schema router

use euler_solver::{
    InvokeError, KeyField, MapResolver, ParamResolver, RegistrationError, ResolveError,
    RouterBuilder, Schema, SolverKey, Target, Value, ValueType, bind, full_key, param,
};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn const_target(result: i64) -> Target<i64> {
    Target::nullary(move || Ok(result))
}

fn sum_target() -> Target<i64> {
    Target::new(vec![ValueType::Int, ValueType::Int], |args| {
        Ok(args.int(0)? + args.int(1)?)
    })
}

/// Resolver that records every request and answers with a fixed value
#[derive(Clone, Default)]
struct RecordingResolver {
    calls: Rc<RefCell<Vec<String>>>,
    answer: i64,
}

impl RecordingResolver {
    fn new(answer: i64) -> Self {
        Self {
            calls: Rc::default(),
            answer,
        }
    }
}

impl ParamResolver for RecordingResolver {
    fn resolve(&self, name: &str, _ty: ValueType) -> Result<Value, ResolveError> {
        self.calls.borrow_mut().push(name.to_string());
        Ok(Value::Int(self.answer))
    }
}

#[test]
fn duplicate_registration_fails_and_keeps_the_earlier_entry() {
    let mut builder = RouterBuilder::new(MapResolver::new());
    builder
        .add(SolverKey::new(1, "Main"), const_target(1), Schema::empty())
        .unwrap();

    let err = builder
        .add(SolverKey::new(1, "Main"), const_target(2), Schema::empty())
        .unwrap_err();
    assert_eq!(
        err,
        RegistrationError::DuplicateKey(SolverKey::new(1, "Main"))
    );

    let router = builder.build();
    assert_eq!(router.len(), 1);
    let exec = router.route(&full_key(1, "Main")).unwrap();
    assert_eq!(exec.invoke().unwrap(), 1);
}

#[test]
fn schema_arity_must_match_the_target_signature() {
    let mut builder = RouterBuilder::new(MapResolver::new());
    let err = builder
        .add(
            SolverKey::new(1, "Sum"),
            sum_target(),
            Schema::new(vec![bind(1i64)]),
        )
        .unwrap_err();
    assert_eq!(
        err,
        RegistrationError::ArityMismatch {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn schema_types_must_match_the_target_signature() {
    let mut builder = RouterBuilder::new(MapResolver::new());
    let err = builder
        .add(
            SolverKey::new(1, "Sum"),
            sum_target(),
            Schema::new(vec![bind(1i64), bind(2u64)]),
        )
        .unwrap_err();
    assert_eq!(
        err,
        RegistrationError::TypeMismatch {
            position: 1,
            expected: ValueType::Int,
            found: ValueType::UInt,
        }
    );
}

#[test]
fn fully_bound_schemas_never_touch_the_resolver() {
    let resolver = RecordingResolver::new(0);
    let mut builder = RouterBuilder::new(resolver.clone());
    builder
        .add(
            SolverKey::new(1, "Sum"),
            sum_target(),
            Schema::new(vec![bind(20i64), bind(3i64)]),
        )
        .unwrap();
    let router = builder.build();

    let exec = router.route(&full_key(1, "Sum")).unwrap();
    assert_eq!(exec.invoke().unwrap(), 23);
    assert_eq!(exec.invoke().unwrap(), 23);
    assert!(resolver.calls.borrow().is_empty());
}

#[test]
fn params_resolve_in_schema_order_once_per_invocation() {
    let resolver = RecordingResolver::new(5);
    let mut builder = RouterBuilder::new(resolver.clone());
    builder
        .add(
            SolverKey::new(1, "Mixed"),
            Target::new(vec![ValueType::Int; 3], |args| {
                Ok(args.int(0)? + args.int(1)? + args.int(2)?)
            }),
            Schema::new(vec![
                param("A", ValueType::Int),
                bind(100i64),
                param("B", ValueType::Int),
            ]),
        )
        .unwrap();
    let router = builder.build();
    let exec = router.route(&full_key(1, "Mixed")).unwrap();

    assert_eq!(exec.invoke().unwrap(), 110);
    assert_eq!(*resolver.calls.borrow(), ["A", "B"]);
    assert_eq!(exec.invoke().unwrap(), 110);
    assert_eq!(*resolver.calls.borrow(), ["A", "B", "A", "B"]);
}

#[test]
fn resolver_failures_propagate_from_invocation() {
    struct NoValues;
    impl ParamResolver for NoValues {
        fn resolve(&self, name: &str, _ty: ValueType) -> Result<Value, ResolveError> {
            Err(ResolveError::Unsupported {
                name: name.to_string(),
            })
        }
    }

    let mut builder = RouterBuilder::new(NoValues);
    builder
        .add(
            SolverKey::new(1, "Open"),
            Target::new(vec![ValueType::Int], |args| args.int(0)),
            Schema::new(vec![param("X", ValueType::Int)]),
        )
        .unwrap();
    let router = builder.build();

    let err = router
        .route(&full_key(1, "Open"))
        .unwrap()
        .invoke()
        .unwrap_err();
    assert!(matches!(
        err,
        InvokeError::Resolve(ResolveError::Unsupported { .. })
    ));
}

#[test]
fn a_lying_resolver_is_reported_as_a_type_mismatch() {
    struct WrongType;
    impl ParamResolver for WrongType {
        fn resolve(&self, _name: &str, _ty: ValueType) -> Result<Value, ResolveError> {
            Ok(Value::Text("10".to_string()))
        }
    }

    let mut builder = RouterBuilder::new(WrongType);
    builder
        .add(
            SolverKey::new(1, "Open"),
            Target::new(vec![ValueType::Int], |args| args.int(0)),
            Schema::new(vec![param("X", ValueType::Int)]),
        )
        .unwrap();
    let router = builder.build();

    let err = router
        .route(&full_key(1, "Open"))
        .unwrap()
        .invoke()
        .unwrap_err();
    assert!(matches!(
        err,
        InvokeError::Resolve(ResolveError::TypeMismatch { .. })
    ));
}

#[test]
fn create_reports_a_miss_as_absent() {
    let mut builder = RouterBuilder::new(MapResolver::new());
    builder
        .add(SolverKey::new(1, "Main"), const_target(7), Schema::empty())
        .unwrap();
    let router = builder.build();

    assert!(router.create(&full_key(1, "Main")).is_some());
    assert!(router.create(&full_key(1, "Other")).is_none());
    assert!(router.create(&[KeyField::Problem(1)]).is_none());
}

#[test]
fn partial_match_lists_variants_in_order_and_excludes_other_problems() {
    let mut builder = RouterBuilder::new(MapResolver::new());
    builder
        .add(SolverKey::new(1, "B"), const_target(0), Schema::empty())
        .unwrap()
        .add(SolverKey::new(2, "C"), const_target(0), Schema::empty())
        .unwrap()
        .add(SolverKey::new(1, "A"), const_target(0), Schema::empty())
        .unwrap();
    let router = builder.build();

    assert_eq!(router.variant_names(1), ["A", "B"]);
    assert_eq!(router.variant_names(2), ["C"]);
    assert!(router.variant_names(3).is_empty());
}

#[test]
fn partial_match_visits_full_keys_for_the_empty_query() {
    let mut builder = RouterBuilder::new(MapResolver::new());
    builder
        .add(SolverKey::new(2, "B"), const_target(0), Schema::empty())
        .unwrap()
        .add(SolverKey::new(1, "A"), const_target(0), Schema::empty())
        .unwrap()
        .add(SolverKey::new(2, "A"), const_target(0), Schema::empty())
        .unwrap();
    let router = builder.build();

    let mut seen = Vec::new();
    router.partial_match(&[], |fields| {
        if let [KeyField::Problem(problem), KeyField::Variant(variant)] = fields {
            seen.push((*problem, (*variant).to_string()));
        }
    });
    assert_eq!(
        seen,
        [
            (1, "A".to_string()),
            (2, "A".to_string()),
            (2, "B".to_string())
        ]
    );
}

proptest! {
    /// Every registered key is exactly recoverable and yields its own
    /// computation, for any set of pairwise-distinct full keys.
    #[test]
    fn registered_keys_route_to_their_own_computation(
        keys in prop::collection::btree_set((0u32..50, "[a-z]{1,6}"), 1..12)
    ) {
        let keys: Vec<_> = keys.into_iter().collect();
        let mut builder = RouterBuilder::new(MapResolver::new());
        for (index, (problem, variant)) in keys.iter().enumerate() {
            builder
                .add(
                    SolverKey::new(*problem, variant.clone()),
                    const_target(index as i64),
                    Schema::empty(),
                )
                .unwrap();
        }
        let router = builder.build();

        prop_assert_eq!(router.len(), keys.len());
        for (index, (problem, variant)) in keys.iter().enumerate() {
            let exec = router.route(&full_key(*problem, variant)).unwrap();
            prop_assert_eq!(exec.invoke().unwrap(), index as i64);
        }
    }

    /// A one-field query yields exactly the trailing variant names of the
    /// keys sharing that problem, in lexicographic order.
    #[test]
    fn partial_match_returns_exactly_the_matching_variants(
        keys in prop::collection::btree_set((0u32..6, "[a-z]{1,4}"), 1..16),
        probe in 0u32..6,
    ) {
        let mut builder = RouterBuilder::new(MapResolver::new());
        for (problem, variant) in &keys {
            builder
                .add(SolverKey::new(*problem, variant.clone()), const_target(0), Schema::empty())
                .unwrap();
        }
        let router = builder.build();

        // Set iteration is already (problem, variant)-sorted.
        let expected: Vec<String> = keys
            .iter()
            .filter(|(problem, _)| *problem == probe)
            .map(|(_, variant)| variant.clone())
            .collect();
        prop_assert_eq!(router.variant_names(probe), expected);
    }

    /// Lookup keys that are shorter or longer than the full arity never
    /// route, even when they share a prefix with a registered key.
    #[test]
    fn short_and_long_queries_never_route(
        keys in prop::collection::btree_set((0u32..6, "[a-z]{1,4}"), 1..8)
    ) {
        let mut builder = RouterBuilder::new(MapResolver::new());
        for (problem, variant) in &keys {
            builder
                .add(SolverKey::new(*problem, variant.clone()), const_target(0), Schema::empty())
                .unwrap();
        }
        let router = builder.build();

        for (problem, variant) in &keys {
            prop_assert!(router.route(&[KeyField::Problem(*problem)]).is_err());

            let long = [
                KeyField::Problem(*problem),
                KeyField::Variant(variant),
                KeyField::Variant(variant),
            ];
            prop_assert!(router.route(&long).is_err());
            prop_assert!(router.create(&long).is_none());

            let mut visited = 0;
            router.partial_match(&long, |_| visited += 1);
            prop_assert_eq!(visited, 0);
        }
    }
}
