//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No solver registered under the requested problem
    #[error("No solver exists for problem {0}")]
    NoSuchProblem(u32),

    /// No solver registered under the requested problem/variant pair
    #[error("No solver named `{variant}` exists for problem {problem}")]
    NoSuchVariant { problem: u32, variant: String },

    /// Interactive selection failed
    #[error("Selection error: {0}")]
    Selection(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] euler_solver::RegistrationError),

    /// Solver construction failed
    #[error("Invocation error: {0}")]
    Invoke(#[from] euler_solver::InvokeError),

    /// Solver execution failed
    #[error("Solve error: {0}")]
    Solve(#[from] euler_solver::SolveError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
