//! Parameter resolution for the CLI

use euler_solver::{MapResolver, ParamResolver, ResolveError, Value, ValueType};
use std::collections::HashMap;
use std::io::Write;

/// Resolves parameters from `--param` bindings first and falls back to
/// prompting on the console.
///
/// A parameter that was bound on the command line but does not parse as the
/// declared type is an error rather than a prompt, so a typo in a binding
/// cannot silently turn a batch run interactive.
pub struct CliResolver {
    bindings: MapResolver,
}

impl CliResolver {
    pub fn new(bindings: HashMap<String, String>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }
}

impl ParamResolver for CliResolver {
    fn resolve(&self, name: &str, ty: ValueType) -> Result<Value, ResolveError> {
        match self.bindings.resolve(name, ty) {
            Err(ResolveError::Unsupported { .. }) => {}
            resolved => return resolved,
        }

        let raw = prompt(name)?;
        let trimmed = raw.trim();
        ty.parse(trimmed).ok_or_else(|| ResolveError::Unresolvable {
            name: name.to_string(),
            value: trimmed.to_string(),
            ty,
        })
    }
}

fn prompt(name: &str) -> Result<String, ResolveError> {
    let read_failure = |source| ResolveError::Io {
        name: name.to_string(),
        source,
    };

    print!("Please input parameter {}: ", name);
    std::io::stdout().flush().map_err(read_failure)?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input).map_err(read_failure)?;
    Ok(input)
}
