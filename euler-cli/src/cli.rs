//! CLI argument parsing using clap

use clap::Parser;

/// Project Euler solver runner
#[derive(Parser, Debug)]
#[command(name = "euler", about = "Run Project Euler solvers", version)]
pub struct Args {
    /// Problem to solve (prompted for interactively if omitted)
    #[arg(short, long)]
    pub problem: Option<u32>,

    /// Variant to run (interactive disambiguation if omitted and the
    /// problem has several)
    #[arg(short = 'n', long)]
    pub variant: Option<String>,

    /// Number of timed runs of the selected solver
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,

    /// Bind an unresolved schema parameter (repeatable)
    #[arg(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// List registered solvers and exit
    #[arg(short, long)]
    pub list: bool,

    /// Quiet mode - only output the answer
    #[arg(short, long)]
    pub quiet: bool,
}
