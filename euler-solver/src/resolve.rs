//! The resolver capability for unbound schema parameters

use crate::error::ResolveError;
use crate::value::{Value, ValueType};
use std::collections::HashMap;

/// Resolves a named parameter to a concrete value.
///
/// A resolver is supplied once when a router is constructed and is consulted
/// for every `Param` schema argument on every invocation of a deferred
/// computation. The router treats it as stateless: nothing is cached between
/// invocations, so a resolver that reads external input (a console prompt,
/// for example) is asked again each time. Resolution is synchronous; a
/// resolver is free to block, and its failures propagate out of the
/// invocation unchanged.
pub trait ParamResolver {
    /// Produce a value for the parameter `name` with the declared type `ty`.
    fn resolve(&self, name: &str, ty: ValueType) -> Result<Value, ResolveError>;
}

/// Resolver backed by a name-to-text map.
///
/// Values are stored textually and parsed on demand against the declared
/// type, so one map can serve parameters of different types. Unknown names
/// fail with [`ResolveError::Unsupported`], which lets a fallback resolver
/// (such as an interactive prompt) distinguish "not provided" from
/// "provided but malformed".
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    values: HashMap<String, String>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a binding, replacing any previous value for the name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl FromIterator<(String, String)> for MapResolver {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl ParamResolver for MapResolver {
    fn resolve(&self, name: &str, ty: ValueType) -> Result<Value, ResolveError> {
        let raw = self
            .values
            .get(name)
            .ok_or_else(|| ResolveError::Unsupported {
                name: name.to_string(),
            })?;

        ty.parse(raw).ok_or_else(|| ResolveError::Unresolvable {
            name: name.to_string(),
            value: raw.clone(),
            ty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_resolver_parses_against_the_declared_type() {
        let resolver = MapResolver::new().with("Max", "1000");

        assert_eq!(
            resolver.resolve("Max", ValueType::UInt).unwrap(),
            Value::UInt(1000)
        );
        assert_eq!(
            resolver.resolve("Max", ValueType::Text).unwrap(),
            Value::Text("1000".to_string())
        );
        assert!(matches!(
            resolver.resolve("Other", ValueType::UInt),
            Err(ResolveError::Unsupported { .. })
        ));
    }

    #[test]
    fn malformed_values_are_unresolvable_rather_than_unsupported() {
        let resolver = MapResolver::new().with("Max", "ten");
        assert!(matches!(
            resolver.resolve("Max", ValueType::UInt),
            Err(ResolveError::Unresolvable { .. })
        ));
    }
}
