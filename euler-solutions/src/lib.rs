//! Project Euler puzzle solutions and their registration
//!
//! Each solution is a [`Solver`](euler_solver::Solver) implementation
//! constructed from typed parameters. [`register_all`] is the single
//! registration point: it adds every available variant to a router builder,
//! binding the constants from the problem statements and leaving
//! experimentation-friendly variants open as named parameters.

pub mod coin_partitions;
pub mod fibonacci;
pub mod multiples;
pub mod palindrome;
pub mod pandigital;
pub mod prime_factor;
pub mod sieve;

use coin_partitions::CoinPartitions;
use euler_solver::{
    RegistrationError, Schema, SolverKey, SolverRouterBuilder, ValueType, bind, param,
    solver_target,
};
use fibonacci::{EvenFibStrideSum, EvenFibSum};
use multiples::MultiplesSum;
use palindrome::PalindromeProduct;
use pandigital::PandigitalProducts;
use prime_factor::LargestPrimeFactor;

/// Register every available solver variant on the builder.
///
/// Variants named `"Project Euler"` (or `"Main"` where only one approach
/// exists) are bound to the constants from the problem statements; the
/// `"Parameterized"` variants resolve their bounds through the router's
/// resolver at each construction.
///
/// # Returns
/// * `Ok(())` - all variants registered
/// * `Err(RegistrationError)` - a duplicate key or schema mismatch, which
///   indicates a bug in this function
pub fn register_all(builder: &mut SolverRouterBuilder) -> Result<(), RegistrationError> {
    builder
        .add(
            SolverKey::new(1, "Project Euler"),
            solver_target(vec![ValueType::UInt], |args| {
                Ok(MultiplesSum::new(args.uint(0)?))
            }),
            Schema::new(vec![bind(1000u64)]),
        )?
        .add(
            SolverKey::new(1, "Parameterized"),
            solver_target(vec![ValueType::UInt], |args| {
                Ok(MultiplesSum::new(args.uint(0)?))
            }),
            Schema::new(vec![param("MultipleMax", ValueType::UInt)]),
        )?
        .add(
            SolverKey::new(2, "Naive"),
            solver_target(vec![ValueType::Int], |args| {
                Ok(EvenFibSum::new(args.int(0)?))
            }),
            Schema::new(vec![bind(4_000_000i64)]),
        )?
        .add(
            SolverKey::new(2, "Even Stride"),
            solver_target(vec![ValueType::Int], |args| {
                Ok(EvenFibStrideSum::new(args.int(0)?))
            }),
            Schema::new(vec![bind(4_000_000i64)]),
        )?
        .add(
            SolverKey::new(2, "Parameterized"),
            solver_target(vec![ValueType::Int], |args| {
                Ok(EvenFibSum::new(args.int(0)?))
            }),
            Schema::new(vec![param("FibonacciMax", ValueType::Int)]),
        )?
        .add(
            SolverKey::new(3, "Project Euler"),
            solver_target(vec![ValueType::UInt], |args| {
                Ok(LargestPrimeFactor::new(args.uint(0)?))
            }),
            Schema::new(vec![bind(600_851_475_143u64)]),
        )?
        .add(
            SolverKey::new(3, "Parameterized"),
            solver_target(vec![ValueType::UInt], |args| {
                Ok(LargestPrimeFactor::new(args.uint(0)?))
            }),
            Schema::new(vec![param("Number", ValueType::UInt)]),
        )?
        .add(
            SolverKey::new(4, "Project Euler"),
            solver_target(vec![ValueType::UInt], |args| {
                Ok(PalindromeProduct::new(args.uint(0)?))
            }),
            Schema::new(vec![bind(3u64)]),
        )?
        .add(
            SolverKey::new(4, "Parameterized"),
            solver_target(vec![ValueType::UInt], |args| {
                Ok(PalindromeProduct::new(args.uint(0)?))
            }),
            Schema::new(vec![param("Digits", ValueType::UInt)]),
        )?
        .add(
            SolverKey::new(31, "Main"),
            solver_target(Vec::new(), |_| Ok(CoinPartitions::new())),
            Schema::empty(),
        )?
        .add(
            SolverKey::new(32, "Main"),
            solver_target(Vec::new(), |_| Ok(PandigitalProducts::new())),
            Schema::empty(),
        )?;

    Ok(())
}
