//! Error types for the solver library

use crate::key::SolverKey;
use crate::value::ValueType;
use thiserror::Error;

/// Error type for registration failures
///
/// Registration is a startup-time precondition: any of these indicates a
/// programming error in the registration code, not a runtime condition to
/// recover from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// An entry already exists under a key equal to the new one
    #[error("an entry already exists under key {0}")]
    DuplicateKey(SolverKey),

    /// The schema argument count does not match the target signature
    #[error("schema supplies {found} argument(s) but the target expects {expected}")]
    ArityMismatch { expected: usize, found: usize },

    /// A schema argument type does not match the target signature
    #[error("schema argument {position} is {found} but the target expects {expected}")]
    TypeMismatch {
        position: usize,
        expected: ValueType,
        found: ValueType,
    },
}

/// Error type for exact-key lookup
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouteError {
    /// No entry is registered under the requested key, or the lookup key
    /// did not have the full key arity
    #[error("no executable is registered under the requested key")]
    NotFound,
}

/// Error type for parameter resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The resolver has no value for the named parameter
    #[error("no value available for parameter `{name}`")]
    Unsupported { name: String },

    /// The supplied value does not parse as the declared type
    #[error("value `{value}` for parameter `{name}` does not parse as {ty}")]
    Unresolvable {
        name: String,
        value: String,
        ty: ValueType,
    },

    /// The resolver produced a value of the wrong type
    #[error("parameter `{name}` resolved to {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },

    /// Reading the parameter from an external source failed
    #[error("failed to read parameter `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for invoking a deferred computation
#[derive(Debug, Error)]
pub enum InvokeError {
    /// A parameter could not be resolved
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A target asked for an argument position that does not exist
    #[error("argument {index} is out of bounds for an argument list of length {len}")]
    ArgumentIndex { index: usize, len: usize },

    /// A target asked for an argument as the wrong type
    #[error("argument {index} is {found}, expected {expected}")]
    ArgumentType {
        index: usize,
        expected: ValueType,
        found: ValueType,
    },

    /// The target itself failed
    #[error("target failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for executing a solver
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver failed deterministically
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
