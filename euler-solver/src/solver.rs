//! The solver contract and the router instantiation used by the harness

use crate::error::{InvokeError, SolveError};
use crate::exec::Target;
use crate::router::{RouterBuilder, SchemaRouter};
use crate::schema::Args;
use crate::value::ValueType;

/// A solver computes the answer to one Project Euler problem.
///
/// Each implementation is one approach to one problem, parameterized at
/// construction so the approach can be evaluated beyond the problem's own
/// constraints. Answers are assumed to fit a signed 64-bit integer; a
/// solver that cannot produce one fails deterministically.
pub trait Solver {
    /// Execute the solver and produce the answer
    fn solve(&self) -> Result<i64, SolveError>;
}

/// Router producing boxed solvers: invoking a routed computation resolves
/// the construction parameters and builds the solver, which can then be run
/// any number of times without touching the resolver again.
pub type SolverRouter = SchemaRouter<Box<dyn Solver>>;

/// Builder for a [`SolverRouter`]
pub type SolverRouterBuilder = RouterBuilder<Box<dyn Solver>>;

/// Wrap a solver constructor as a routable target.
///
/// The constructor receives the resolved argument list and returns the
/// concrete solver; boxing to `dyn Solver` happens here so registration
/// sites stay free of the coercion noise.
pub fn solver_target<S, F>(signature: Vec<ValueType>, ctor: F) -> Target<Box<dyn Solver>>
where
    S: Solver + 'static,
    F: Fn(Args) -> Result<S, InvokeError> + 'static,
{
    Target::new(signature, move |args| {
        let solver: Box<dyn Solver> = Box::new(ctor(args)?);
        Ok(solver)
    })
}
