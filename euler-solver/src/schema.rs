//! Schema atoms describing how target arguments are supplied

use crate::error::InvokeError;
use crate::value::{Value, ValueType};

/// One argument of a schema: either a literal fixed at registration time or
/// a named parameter resolved anew on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaArg {
    /// A concrete value bound once at registration and reused on every
    /// invocation
    Bind(Value),
    /// A placeholder resolved through the registry's resolver at each
    /// invocation
    Param {
        /// The name the resolver is asked for
        name: String,
        /// The type the resolved value must have
        ty: ValueType,
    },
}

impl SchemaArg {
    /// The declared type of this argument
    pub fn value_type(&self) -> ValueType {
        match self {
            SchemaArg::Bind(value) => value.value_type(),
            SchemaArg::Param { ty, .. } => *ty,
        }
    }
}

/// Bind a literal value into a schema position.
pub fn bind(value: impl Into<Value>) -> SchemaArg {
    SchemaArg::Bind(value.into())
}

/// Leave a schema position open, to be resolved by name at each invocation.
pub fn param(name: impl Into<String>, ty: ValueType) -> SchemaArg {
    SchemaArg::Param {
        name: name.into(),
        ty,
    }
}

/// An ordered argument list for a target, positionally matched to the
/// target's signature when the entry is registered.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    args: Vec<SchemaArg>,
}

impl Schema {
    /// Create a schema from its ordered arguments
    pub fn new(args: Vec<SchemaArg>) -> Self {
        Self { args }
    }

    /// The schema with no arguments, for nullary targets
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Declared types of the arguments, in order
    pub fn arg_types(&self) -> impl Iterator<Item = ValueType> + '_ {
        self.args.iter().map(SchemaArg::value_type)
    }

    pub(crate) fn args(&self) -> &[SchemaArg] {
        &self.args
    }
}

impl FromIterator<SchemaArg> for Schema {
    fn from_iter<I: IntoIterator<Item = SchemaArg>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}

/// The fully resolved, positional argument list handed to a target.
///
/// Accessors are typed and fall back to an error rather than panicking,
/// although a mismatch cannot occur for arguments that passed
/// registration-time schema validation.
#[derive(Debug)]
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The signed integer at `index`
    pub fn int(&self, index: usize) -> Result<i64, InvokeError> {
        match self.get(index)? {
            Value::Int(value) => Ok(*value),
            other => Err(type_error(index, ValueType::Int, other)),
        }
    }

    /// The unsigned integer at `index`
    pub fn uint(&self, index: usize) -> Result<u64, InvokeError> {
        match self.get(index)? {
            Value::UInt(value) => Ok(*value),
            other => Err(type_error(index, ValueType::UInt, other)),
        }
    }

    /// The text at `index`
    pub fn text(&self, index: usize) -> Result<&str, InvokeError> {
        match self.get(index)? {
            Value::Text(value) => Ok(value),
            other => Err(type_error(index, ValueType::Text, other)),
        }
    }

    fn get(&self, index: usize) -> Result<&Value, InvokeError> {
        self.values.get(index).ok_or(InvokeError::ArgumentIndex {
            index,
            len: self.values.len(),
        })
    }
}

fn type_error(index: usize, expected: ValueType, found: &Value) -> InvokeError {
    InvokeError::ArgumentType {
        index,
        expected,
        found: found.value_type(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_reject_the_wrong_type() {
        let args = Args::new(vec![Value::UInt(10), Value::Text("x".to_string())]);
        assert_eq!(args.uint(0).unwrap(), 10);
        assert_eq!(args.text(1).unwrap(), "x");
        assert!(matches!(
            args.int(0),
            Err(InvokeError::ArgumentType { index: 0, .. })
        ));
        assert!(matches!(
            args.uint(2),
            Err(InvokeError::ArgumentIndex { index: 2, len: 2 })
        ));
    }
}
