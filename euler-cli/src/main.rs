//! Euler CLI - command-line interface for running Project Euler solvers

mod cli;
mod config;
mod error;
mod output;
mod resolver;
mod runner;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use euler_solver::{KeyField, SolverRouter, SolverRouterBuilder, full_key};
use euler_solutions::register_all;
use output::OutputFormatter;
use resolver::CliResolver;
use std::io::Write;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    let router = build_router(&config)?;

    if config.list {
        list_solvers(&router);
        return Ok(());
    }

    let problem = match config.problem {
        Some(problem) => problem,
        None => prompt_problem()?,
    };

    let variants = router.variant_names(problem);
    if variants.is_empty() {
        return Err(CliError::NoSuchProblem(problem));
    }
    let variant = select_variant(&config, &variants)?;

    // A variant taken from the listing is guaranteed to route, but an
    // explicit --variant may still miss.
    let exec = router
        .route(&full_key(problem, &variant))
        .map_err(|_| CliError::NoSuchVariant {
            problem,
            variant: variant.clone(),
        })?;

    // Construction resolves any open parameters once; the timing loop then
    // replays the constructed solver without touching the resolver again.
    let solver = exec.invoke()?;
    let report = runner::run_solver(solver.as_ref(), config.runs)?;

    OutputFormatter::new(config.quiet).print_report(problem, &variant, &report);
    Ok(())
}

/// Build the solver router, with the resolver backed by `--param` bindings
fn build_router(config: &Config) -> Result<SolverRouter, CliError> {
    let resolver = CliResolver::new(config.params.clone());
    let mut builder = SolverRouterBuilder::new(resolver);
    register_all(&mut builder)?;
    Ok(builder.build())
}

/// Print every registered solver, in key order
fn list_solvers(router: &SolverRouter) {
    router.partial_match(&[], |fields| {
        if let [KeyField::Problem(problem), KeyField::Variant(variant)] = fields {
            println!("{:>4}  {}", problem, variant);
        }
    });
}

/// Ask for a problem id on the console
fn prompt_problem() -> Result<u32, CliError> {
    let input = prompt_line("Problem to solve: ")?;
    input
        .trim()
        .parse()
        .map_err(|_| CliError::Selection(format!("`{}` is not a problem id", input.trim())))
}

/// Pick a variant: explicit flag first, then the only one, then interactively
fn select_variant(config: &Config, variants: &[String]) -> Result<String, CliError> {
    if let Some(variant) = &config.variant {
        return Ok(variant.clone());
    }
    if let [only] = variants {
        return Ok(only.clone());
    }

    for (index, name) in variants.iter().enumerate() {
        println!("{}: {}", index + 1, name);
    }
    let input = prompt_line("Enter solver to execute: ")?;
    let index: usize = input
        .trim()
        .parse()
        .map_err(|_| CliError::Selection(format!("`{}` is not a solver index", input.trim())))?;
    if index == 0 || index > variants.len() {
        return Err(CliError::Selection(format!(
            "solver index {} is not in bounds",
            index
        )));
    }

    Ok(variants[index - 1].clone())
}

fn prompt_line(message: &str) -> Result<String, CliError> {
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input)
}
