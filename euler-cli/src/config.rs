//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::collections::HashMap;

/// Resolved runtime configuration
pub struct Config {
    /// Problem to run (None = prompt interactively)
    pub problem: Option<u32>,
    /// Variant to run (None = disambiguate interactively)
    pub variant: Option<String>,
    /// Number of timed runs
    pub runs: u32,
    /// Parameter bindings from `--param` flags
    pub params: HashMap<String, String>,
    /// List registered solvers instead of running one
    pub list: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, splitting `NAME=VALUE` parameter bindings
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let params = parse_params(&args.params)?;

        Ok(Config {
            problem: args.problem,
            variant: args.variant,
            runs: args.runs,
            params,
            list: args.list,
            quiet: args.quiet,
        })
    }
}

fn parse_params(bindings: &[String]) -> Result<HashMap<String, String>, CliError> {
    let mut params = HashMap::new();
    for binding in bindings {
        let Some((name, value)) = binding.split_once('=') else {
            return Err(CliError::Config(format!(
                "parameter binding `{}` is not of the form NAME=VALUE",
                binding
            )));
        };
        if name.is_empty() {
            return Err(CliError::Config(format!(
                "parameter binding `{}` has an empty name",
                binding
            )));
        }
        if params.insert(name.to_string(), value.to_string()).is_some() {
            return Err(CliError::Config(format!(
                "parameter `{}` is bound more than once",
                name
            )));
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn bindings_split_on_the_first_equals() {
        let params = parse_params(&bindings(&["MultipleMax=1000", "Name=a=b"])).unwrap();
        assert_eq!(params["MultipleMax"], "1000");
        assert_eq!(params["Name"], "a=b");
    }

    #[test]
    fn malformed_bindings_are_rejected() {
        assert!(parse_params(&bindings(&["MultipleMax"])).is_err());
        assert!(parse_params(&bindings(&["=10"])).is_err());
        assert!(parse_params(&bindings(&["A=1", "A=2"])).is_err());
    }
}
