//! Keyed schema routing for Project Euler solvers
//!
//! This library associates composite keys (a problem identifier plus a
//! variant name) with deferred computations whose arguments are a mix of
//! literals fixed at registration time and named parameters resolved
//! dynamically at each invocation.
//!
//! # Overview
//!
//! The library provides:
//! - A composite key type with prefix-lexicographic comparison, so a
//!   partial key matches every registered key it is a prefix of
//! - Schema atoms (`bind`/`param`) describing how each target argument is
//!   supplied
//! - A pluggable resolver capability for the unbound parameters
//! - A builder-then-frozen router with exact routing, factory-style
//!   creation, and ordered partial matching
//! - The [`Solver`] trait the puzzle implementations plug into
//!
//! # Quick Example
//!
//! ```
//! use euler_solver::{
//!     MapResolver, RouterBuilder, Schema, SolverKey, Target, ValueType, bind, full_key, param,
//! };
//!
//! let resolver = MapResolver::new().with("MultipleMax", "10");
//! let mut builder = RouterBuilder::new(resolver);
//! builder
//!     .add(
//!         SolverKey::new(1, "Bound"),
//!         Target::new(vec![ValueType::UInt], |args| Ok(args.uint(0)? as i64)),
//!         Schema::new(vec![bind(1000u64)]),
//!     )
//!     .unwrap()
//!     .add(
//!         SolverKey::new(1, "Prompted"),
//!         Target::new(vec![ValueType::UInt], |args| Ok(args.uint(0)? as i64)),
//!         Schema::new(vec![param("MultipleMax", ValueType::UInt)]),
//!     )
//!     .unwrap();
//! let router = builder.build();
//!
//! // Bound arguments replay identically; parameters go through the resolver.
//! let bound = router.route(&full_key(1, "Bound")).unwrap();
//! assert_eq!(bound.invoke().unwrap(), 1000);
//! let prompted = router.route(&full_key(1, "Prompted")).unwrap();
//! assert_eq!(prompted.invoke().unwrap(), 10);
//!
//! // Partial lookup enumerates the variants registered under a problem.
//! assert_eq!(router.variant_names(1), ["Bound", "Prompted"]);
//! ```
//!
//! # Key Concepts
//!
//! ## Prefix equality
//!
//! Two keys are compared lexicographically up to the arity of the shorter;
//! if no field differs, they are considered equal. This single rule drives
//! duplicate detection at registration, exact routing (which therefore
//! insists on full-arity lookup keys), and partial matching.
//!
//! ## Deferred computations
//!
//! Registering an entry builds a zero-argument computation that captures
//! the target, the schema, and the resolver. Invoking it resolves every
//! `param` atom in schema order and applies the target. Entries whose
//! schema is fully bound never consult the resolver and return the same
//! result on every invocation.
//!
//! ## Usage discipline
//!
//! Build the router completely, then only look up: the builder/router split
//! makes the registration phase explicit. Everything is single-threaded and
//! synchronous; handed-out computations share the resolver by reference
//! counting and stay valid after the router is dropped.

mod error;
mod exec;
mod key;
mod resolve;
mod router;
mod schema;
mod solver;
mod value;

// Re-export public API
pub use error::{InvokeError, RegistrationError, ResolveError, RouteError, SolveError};
pub use exec::{Deferred, Target};
pub use key::{KeyField, SolverKey, full_key, prefix_cmp};
pub use resolve::{MapResolver, ParamResolver};
pub use router::{RouterBuilder, SchemaRouter};
pub use schema::{Args, Schema, SchemaArg, bind, param};
pub use solver::{Solver, SolverRouter, SolverRouterBuilder, solver_target};
pub use value::{Value, ValueType};
